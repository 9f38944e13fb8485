//! Background "audio": the coquí's call, rung on the terminal bell on a loop.
//!
//! Purely decorative.  Callers log any `AudioError` and drop the track;
//! gameplay never depends on it.

use std::io::{stdout, Stdout, Write};

use crossterm::tty::IsTty;

use crate::error::AudioError;

const BELL: &[u8] = b"\x07";

pub struct BellTrack<W: Write> {
    out: W,
    period: f64,
    next_call: Option<f64>,
    attached: bool,
}

impl BellTrack<Stdout> {
    /// A track on the process's own terminal.  Playback fails up front if
    /// stdout is not a terminal.
    pub fn for_terminal(period: f64) -> Self {
        let out = stdout();
        let attached = out.is_tty();
        BellTrack::new(out, period, attached)
    }
}

impl<W: Write> BellTrack<W> {
    pub fn new(out: W, period: f64, attached: bool) -> Self {
        BellTrack {
            out,
            period,
            next_call: None,
            attached,
        }
    }

    /// Sound the first call now and schedule the loop.
    pub fn play_looping(&mut self, now: f64) -> Result<(), AudioError> {
        if !self.attached {
            return Err(AudioError::NoDevice);
        }
        self.call()?;
        self.next_call = Some(now + self.period);
        Ok(())
    }

    /// Ring again if a call is due.  Polled once per frame.
    pub fn update(&mut self, now: f64) -> Result<(), AudioError> {
        match self.next_call {
            Some(due) if now >= due => {
                self.call()?;
                self.next_call = Some(now + self.period);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.next_call.is_some()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn call(&mut self) -> Result<(), AudioError> {
        self.out.write_all(BELL)?;
        self.out.flush()?;
        Ok(())
    }
}
