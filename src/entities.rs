//! All game entity types — pure data, no game rules.

use std::fmt;

use crate::score::{Outcome, Scoreboard};
use crate::timer::TurnClock;

// ── Players ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Turn order is fixed: Player 1, then Player 2.
    pub const ORDER: [Player; 2] = [Player::One, Player::Two];

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The player who plays after `self`, or `None` once both have played.
    pub fn next(self) -> Option<Player> {
        match self {
            Player::One => Some(Player::Two),
            Player::Two => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in playfield units, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open hit test: the left/top edges are inside, right/bottom are not.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// True if the whole rectangle lies inside a `width` × `height` area
    /// anchored at the origin.
    pub fn within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= width && self.bottom() <= height
    }
}

// ── Scenery ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Tree,
    Flower,
}

/// Decorative scenery.  Never moves and never takes part in hit-testing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Primary mouse button pressed at a point in playfield units.
    PrimaryClick { x: i32, y: i32 },
    /// The terminal grid changed size.  Only the render loop cares.
    Resize { cols: u16, rows: u16 },
}

// ── State machine ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameState {
    StartScreen,
    PlayerTurn { player: Player },
    /// "Time's up!" is on screen; `since` is when the turn expired.
    TurnOver { player: Player, since: f64 },
    GameOver { outcome: Outcome },
}

/// Everything one running game owns.  Cloneable so the pure update
/// functions in `compute` can hand back a new copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub state: GameState,
    pub scores: Scoreboard,
    pub clock: TurnClock,
    pub target: Rect,
    pub obstacles: Vec<Obstacle>,
    /// Cleared by the first quit; the render loop exits when it is false.
    pub running: bool,
}
