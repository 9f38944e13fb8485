//! Discover the Coquí: a two-player race to click a frog that keeps hopping
//! around the screen.
//!
//! The crate splits into pure game logic (`entities`, `compute`, `timer`,
//! `placement`, `score`) and the terminal-facing pieces (`display`, `input`,
//! `viewport`, `audio`) that the binary wires into one render loop.

pub mod assets;
pub mod audio;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
pub mod placement;
pub mod score;
pub mod timer;
pub mod viewport;
