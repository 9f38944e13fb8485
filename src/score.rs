//! Per-player hit counters and the end-of-game verdict.

use std::fmt;

use crate::entities::Player;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    one: u32,
    two: u32,
}

/// Result of a finished game, fixed at the moment Player 2's turn expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner { player: Player, points: u32 },
    Tie { points: u32 },
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard::default()
    }

    pub fn reset(&mut self) {
        *self = Scoreboard::default();
    }

    pub fn increment(&mut self, player: Player) {
        let slot = match player {
            Player::One => &mut self.one,
            Player::Two => &mut self.two,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    pub fn winner(&self) -> Outcome {
        use std::cmp::Ordering;

        match self.one.cmp(&self.two) {
            Ordering::Greater => Outcome::Winner {
                player: Player::One,
                points: self.one,
            },
            Ordering::Less => Outcome::Winner {
                player: Player::Two,
                points: self.two,
            },
            Ordering::Equal => Outcome::Tie { points: self.one },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner { player, points } => {
                write!(f, "{} Wins with {} points!", player, points)
            }
            Outcome::Tie { points } => write!(f, "It's a Tie! Both {} points.", points),
        }
    }
}
