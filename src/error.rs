//! Error types.  Startup failures are fatal; audio failures never are.

use thiserror::Error;

/// A built-in sprite failed validation.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("sprite `{name}` has no rows")]
    Empty { name: &'static str },

    #[error("sprite `{name}` row {row} is {found} columns wide, expected {expected}")]
    Ragged {
        name: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("sprite `{name}` has no visible glyphs")]
    Blank { name: &'static str },
}

/// Anything that stops the game before the first frame.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("failed to load asset: {0}")]
    Asset(#[from] AssetError),

    #[error("terminal unavailable: {0}")]
    Display(#[from] std::io::Error),

    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

/// Background audio problems.  Logged, then the game carries on in silence.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("no terminal attached to play the coquí call")]
    NoDevice,

    #[error("failed to ring the terminal bell: {0}")]
    Write(#[from] std::io::Error),
}
