//! Rendering layer — all terminal drawing lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session.  No game logic is performed; this module only translates state
//! into terminal commands.  Draw order is fixed: background, scenery, target,
//! overlays.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::assets::{Assets, Sprite};
use crate::config::{MIN_COLS, MIN_ROWS, PLAYFIELD_WIDTH};
use crate::entities::{GameState, ObstacleKind, Player, Rect, Session};
use crate::score::Outcome;
use crate::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER_ONE: Color = Color::Blue;
const C_PLAYER_TWO: Color = Color::Red;
const C_TIE: Color = Color::Grey;
const C_TIME: Color = Color::White;
const C_MESSAGE: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Vertical anchors of the two score lines, in playfield units.
const SCORE_LINE_Y: [i32; 2] = [10, 60];
/// Left margin of the score lines and right margin of the timer, in units.
const OVERLAY_MARGIN_X: i32 = 10;

pub const START_PROMPT: &str = "Click to Start";
pub const REPLAY_PROMPT: &str = "Click to Play Again";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    viewport: &Viewport,
    assets: &Assets,
    now: f64,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if viewport.fits() {
        draw_background(out, &assets.background, viewport)?;
        match &session.state {
            GameState::StartScreen => {
                draw_centered(out, viewport, 0, START_PROMPT, C_MESSAGE)?;
            }
            GameState::PlayerTurn { .. } => {
                draw_board(out, session, viewport, assets, now)?;
            }
            GameState::TurnOver { player, .. } => {
                draw_board(out, session, viewport, assets, now)?;
                draw_centered(out, viewport, 0, &turn_over_message(*player), C_MESSAGE)?;
            }
            GameState::GameOver { outcome } => {
                draw_centered(out, viewport, -1, &outcome.to_string(), outcome_color(outcome))?;
                draw_centered(out, viewport, 1, REPLAY_PROMPT, C_MESSAGE)?;
            }
        }
        draw_controls_hint(out, viewport)?;
    } else {
        draw_too_small(out, viewport)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

pub fn turn_over_message(player: Player) -> String {
    format!("Time's up! Player {}'s Turn Over.", player.number())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(
    out: &mut W,
    background: &Sprite,
    viewport: &Viewport,
) -> std::io::Result<()> {
    for row in 0..viewport.rows {
        let (line, color) = background.sample_row(row, viewport.cols, viewport.rows);
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Turn board: scenery, target, scores, timer ────────────────────────────────

fn draw_board<W: Write>(
    out: &mut W,
    session: &Session,
    viewport: &Viewport,
    assets: &Assets,
    now: f64,
) -> std::io::Result<()> {
    for obstacle in &session.obstacles {
        let sprite = match obstacle.kind {
            ObstacleKind::Tree => &assets.tree,
            ObstacleKind::Flower => &assets.flower,
        };
        blit(out, sprite, &obstacle.rect, viewport)?;
    }

    blit(out, &assets.coqui, &session.target, viewport)?;

    for (player, y) in Player::ORDER.iter().zip(SCORE_LINE_Y) {
        let (col, row) = viewport.cell_at(OVERLAY_MARGIN_X, y);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(player_color(*player)))?;
        out.queue(Print(format!(
            "{} Score: {}",
            player,
            session.scores.get(*player)
        )))?;
    }

    draw_time(out, viewport, session.clock.display_remaining(now))
}

fn draw_time<W: Write>(out: &mut W, viewport: &Viewport, seconds: u64) -> std::io::Result<()> {
    let text = format!("Time: {}", seconds);
    let (right, row) = viewport.cell_at(PLAYFIELD_WIDTH - OVERLAY_MARGIN_X, SCORE_LINE_Y[0]);
    let col = right.saturating_sub(text.chars().count() as u16);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_TIME))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Draw `sprite` stretched over the cells covered by `rect`.  Spaces in the
/// art leave whatever is underneath.
fn blit<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    rect: &Rect,
    viewport: &Viewport,
) -> std::io::Result<()> {
    let cells = viewport.project(rect);
    for dy in 0..cells.height {
        for dx in 0..cells.width {
            let (glyph, color) = sprite.sample(dx, dy, cells.width, cells.height);
            if glyph == ' ' {
                continue;
            }
            out.queue(cursor::MoveTo(cells.col + dx, cells.row + dy))?;
            out.queue(style::SetForegroundColor(color))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// Centre `text` on the screen, `offset` rows away from the middle row.
fn draw_centered<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    offset: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let width = text.chars().count() as u16;
    let col = (viewport.cols / 2).saturating_sub(width / 2);
    let mid = i32::from(viewport.rows / 2);
    let row = (mid + offset).clamp(0, i32::from(viewport.rows.saturating_sub(1))) as u16;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, viewport.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Click the coquí   Q : Quit"))?;
    Ok(())
}

fn draw_too_small<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(format!(
        "Terminal too small ({}x{}); need {}x{}. Q : Quit",
        viewport.cols, viewport.rows, MIN_COLS, MIN_ROWS
    )))?;
    Ok(())
}

// ── Colours ───────────────────────────────────────────────────────────────────

fn player_color(player: Player) -> Color {
    match player {
        Player::One => C_PLAYER_ONE,
        Player::Two => C_PLAYER_TWO,
    }
}

fn outcome_color(outcome: &Outcome) -> Color {
    match outcome {
        Outcome::Winner { player, .. } => player_color(*player),
        Outcome::Tie { .. } => C_TIE,
    }
}
