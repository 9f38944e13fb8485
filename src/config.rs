//! Fixed game constants.  Nothing here is user-configurable: time limits,
//! sizes and controls are part of the game's rules.

// ── Playfield (logical units, independent of the terminal grid) ──────────────

pub const PLAYFIELD_WIDTH: i32 = 800;
pub const PLAYFIELD_HEIGHT: i32 = 600;

/// Edge length of the square coquí target.
pub const TARGET_SIZE: i32 = 80;

/// Width of every obstacle and height of a tree.
pub const OBSTACLE_SIZE: i32 = 80;
/// Flowers are squatter than trees: 0.6 × the tree height, truncated.
pub const FLOWER_HEIGHT: i32 = OBSTACLE_SIZE * 6 / 10;
pub const OBSTACLE_COUNT: usize = 5;
/// Obstacles keep this many units clear of every playfield edge.
pub const OBSTACLE_MARGIN: i32 = 50;

// ── Timing ────────────────────────────────────────────────────────────────────

pub const TURN_LIMIT_SECS: u64 = 30;
pub const FRAME_RATE: u32 = 60;
/// How long the "Time's up!" message stays up before the next state.
pub const MESSAGE_HOLD_SECS: f64 = 1.5;
/// Seconds between two coquí calls on the terminal bell.
pub const COQUI_CALL_PERIOD_SECS: f64 = 6.0;

// ── Terminal ──────────────────────────────────────────────────────────────────

/// Smallest grid on which the target still covers at least 4×2 cells and
/// every message fits on one line.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 15;

pub const WINDOW_TITLE: &str = "Discover the Coquí";

// ── Logging ───────────────────────────────────────────────────────────────────

pub const LOG_DIR_NAME: &str = "coqui_hunt";
pub const LOG_FILE_NAME: &str = "coqui_hunt.log";
