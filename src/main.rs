use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{info, warn};

use coqui_hunt::assets::Assets;
use coqui_hunt::audio::BellTrack;
use coqui_hunt::compute::{dispatch, init_session};
use coqui_hunt::config::{
    COQUI_CALL_PERIOD_SECS, FRAME_RATE, LOG_DIR_NAME, LOG_FILE_NAME, MIN_COLS, MIN_ROWS,
    WINDOW_TITLE,
};
use coqui_hunt::display;
use coqui_hunt::entities::Input;
use coqui_hunt::error::StartupError;
use coqui_hunt::input::translate;
use coqui_hunt::logging::setup_logging;
use coqui_hunt::viewport::Viewport;

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    let _guard = setup_logging(&log_dir, LOG_FILE_NAME)?;

    let assets = Assets::load()
        .map_err(StartupError::from)
        .context("Failed to load sprites")?;

    let (cols, rows) = terminal::size()
        .map_err(StartupError::from)
        .context("Failed to query the terminal size")?;
    let viewport = Viewport::new(cols, rows);
    if !viewport.fits() {
        return Err(StartupError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        })
        .context("Terminal cannot show the playfield");
    }

    let mut out = BufWriter::new(stdout());
    let result = enter_terminal(&mut out).and_then(|()| run(&mut out, &assets, viewport));

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => info!("session ended"),
        Err(err) => tracing::error!(error = %err, "session aborted"),
    }
    result
}

fn enter_terminal<W: Write>(out: &mut W) -> Result<()> {
    terminal::enable_raw_mode()
        .map_err(StartupError::from)
        .context("Failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .map_err(StartupError::from)
        .context("Failed to enter the alternate screen")?;
    out.execute(EnableMouseCapture)
        .map_err(StartupError::from)
        .context("Failed to capture the mouse")?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle(WINDOW_TITLE))?;
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Single-threaded: input is drained without
/// blocking, the session advances, one frame is drawn, then the rest of the
/// frame budget is slept away.
fn run<W: Write>(out: &mut W, assets: &Assets, mut viewport: Viewport) -> Result<()> {
    let frame = Duration::from_secs(1) / FRAME_RATE;
    let epoch = Instant::now();
    let mut rng = thread_rng();
    let mut session = init_session(&mut rng);

    let mut audio = Some(BellTrack::for_terminal(COQUI_CALL_PERIOD_SECS));
    if let Some(track) = audio.as_mut() {
        if let Err(err) = track.play_looping(0.0) {
            warn!(error = %err, "background audio unavailable, playing without sound");
            audio = None;
        }
    }

    info!(cols = viewport.cols, rows = viewport.rows, "entering the game loop");

    while session.running {
        let frame_start = Instant::now();
        let now = epoch.elapsed().as_secs_f64();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            match translate(&event::read()?, &viewport) {
                Some(Input::Resize { cols, rows }) => {
                    viewport = Viewport::new(cols, rows);
                    info!(cols, rows, "terminal resized");
                }
                Some(input) => inputs.push(input),
                None => {}
            }
        }

        session = dispatch(&session, &inputs, now, &mut rng);
        if !session.running {
            break;
        }

        display::render(out, &session, &viewport, assets, now)?;

        if let Some(track) = audio.as_mut() {
            if let Err(err) = track.update(now) {
                warn!(error = %err, "background audio stopped");
                audio = None;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
    Ok(())
}
