//! Per-turn countdown, polled once per frame.

/// Stamps the start of a turn and reports how many whole seconds are left.
/// Times are seconds on any monotonic clock the caller chooses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnClock {
    turn_start: f64,
    limit_secs: u64,
}

impl TurnClock {
    pub fn new(limit_secs: u64) -> Self {
        TurnClock {
            turn_start: 0.0,
            limit_secs,
        }
    }

    pub fn start(&mut self, now: f64) {
        self.turn_start = now;
    }

    pub fn started_at(&self) -> f64 {
        self.turn_start
    }

    pub fn limit_secs(&self) -> u64 {
        self.limit_secs
    }

    /// `floor(limit - elapsed)`.  Goes negative once the turn has run over.
    pub fn remaining(&self, now: f64) -> i64 {
        (self.limit_secs as f64 - (now - self.turn_start)).floor() as i64
    }

    /// Remaining seconds as shown on screen, never below zero.
    pub fn display_remaining(&self, now: f64) -> u64 {
        self.remaining(now).max(0) as u64
    }

    pub fn expired(&self, now: f64) -> bool {
        self.remaining(now) <= 0
    }
}
