//! The game-state machine, as pure functions.
//!
//! Every public function takes an immutable reference to the current
//! `Session` (plus the current time and, where needed, an RNG handle) and
//! returns a brand-new `Session`.  Side effects are limited to the injected
//! RNG and log output.

use rand::Rng;
use tracing::{debug, info};

use crate::config::{MESSAGE_HOLD_SECS, TURN_LIMIT_SECS};
use crate::entities::{GameState, Input, Player, Session};
use crate::placement::{reposition, scatter_obstacles};
use crate::score::Scoreboard;
use crate::timer::TurnClock;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a session sitting on the start screen, with the scenery scattered
/// and the target already placed.
pub fn init_session(rng: &mut impl Rng) -> Session {
    let obstacles = scatter_obstacles(rng);
    let target = reposition(rng);
    Session {
        state: GameState::StartScreen,
        scores: Scoreboard::new(),
        clock: TurnClock::new(TURN_LIMIT_SECS),
        target,
        obstacles,
        running: true,
    }
}

// ── Input-driven transitions ────────────────────────────────────────────────

/// Handle a primary click at `(x, y)` in playfield units.
pub fn click(session: &Session, x: i32, y: i32, now: f64, rng: &mut impl Rng) -> Session {
    let mut next = session.clone();
    match &session.state {
        GameState::StartScreen => {
            next.scores.reset();
            begin_turn(&mut next, Player::One, now, rng);
        }
        GameState::PlayerTurn { player } => {
            if session.target.contains(x, y) {
                next.scores.increment(*player);
                next.target = reposition(rng);
                debug!(
                    player = player.number(),
                    score = next.scores.get(*player),
                    "coquí caught"
                );
            }
        }
        // The message hold swallows clicks so nobody skips it by accident.
        GameState::TurnOver { .. } => {}
        GameState::GameOver { .. } => {
            info!("back to the start screen");
            next.state = GameState::StartScreen;
        }
    }
    next
}

/// End the session.  Further quits change nothing.
pub fn quit(session: &Session) -> Session {
    if session.running {
        info!("quit requested");
    }
    Session {
        running: false,
        ..session.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the timed parts of the state machine: turn expiry and the end of
/// the "Time's up!" hold.
pub fn tick(session: &Session, now: f64, rng: &mut impl Rng) -> Session {
    let mut next = session.clone();
    match session.state {
        GameState::PlayerTurn { player } if session.clock.expired(now) => {
            info!(
                player = player.number(),
                score = session.scores.get(player),
                "turn over"
            );
            next.state = GameState::TurnOver { player, since: now };
        }
        GameState::TurnOver { player, since } if now - since >= MESSAGE_HOLD_SECS => {
            match player.next() {
                Some(following) => begin_turn(&mut next, following, now, rng),
                None => {
                    let outcome = session.scores.winner();
                    info!(%outcome, "game over");
                    next.state = GameState::GameOver { outcome };
                }
            }
        }
        GameState::StartScreen
        | GameState::PlayerTurn { .. }
        | GameState::TurnOver { .. }
        | GameState::GameOver { .. } => {}
    }
    next
}

/// Apply one frame's worth of input in arrival order, then tick.  A quit
/// short-circuits everything after it, including the tick.
pub fn dispatch(session: &Session, inputs: &[Input], now: f64, rng: &mut impl Rng) -> Session {
    if !session.running {
        return session.clone();
    }

    let mut current = session.clone();
    for input in inputs {
        match *input {
            Input::Quit => return quit(&current),
            Input::PrimaryClick { x, y } => current = click(&current, x, y, now, rng),
            Input::Resize { .. } => {}
        }
    }
    tick(&current, now, rng)
}

/// One turn handler for both players: fresh target, fresh clock.
fn begin_turn(session: &mut Session, player: Player, now: f64, rng: &mut impl Rng) {
    session.target = reposition(rng);
    session.clock.start(now);
    session.state = GameState::PlayerTurn { player };
    info!(player = player.number(), "turn started");
}
