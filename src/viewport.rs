//! Projection between the logical playfield and the terminal grid.
//!
//! The playfield is always `PLAYFIELD_WIDTH` × `PLAYFIELD_HEIGHT` units; the
//! terminal can be any size.  A cell belongs to a rectangle when the cell's
//! centre does, and a click reports the centre of the clicked cell, so a
//! click on any drawn cell of the target is always a hit.

use crate::config::{MIN_COLS, MIN_ROWS, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::entities::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// A block of terminal cells.  `width` or `height` may be zero when the
/// rectangle falls between cell centres.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    /// Whether the grid is big enough to play on.
    pub fn fits(&self) -> bool {
        self.cols >= MIN_COLS && self.rows >= MIN_ROWS
    }

    /// Playfield point under the centre of cell `(col, row)`.
    pub fn to_units(&self, col: u16, row: u16) -> (i32, i32) {
        (
            centre(col, self.cols, PLAYFIELD_WIDTH),
            centre(row, self.rows, PLAYFIELD_HEIGHT),
        )
    }

    /// Cell containing playfield point `(x, y)`, clamped to the grid.  Used to
    /// anchor text.
    pub fn cell_at(&self, x: i32, y: i32) -> (u16, u16) {
        (
            cell(x, self.cols, PLAYFIELD_WIDTH),
            cell(y, self.rows, PLAYFIELD_HEIGHT),
        )
    }

    /// Cells whose centres fall inside `rect`.
    pub fn project(&self, rect: &Rect) -> CellRect {
        let (col, width) = span(rect.x, rect.width, PLAYFIELD_WIDTH, self.cols);
        let (row, height) = span(rect.y, rect.height, PLAYFIELD_HEIGHT, self.rows);
        CellRect {
            col,
            row,
            width,
            height,
        }
    }
}

fn centre(index: u16, cells: u16, extent: i32) -> i32 {
    let cells = i64::from(cells.max(1));
    ((2 * i64::from(index) + 1) * i64::from(extent) / (2 * cells)) as i32
}

fn cell(pos: i32, cells: u16, extent: i32) -> u16 {
    let last = i64::from(cells.saturating_sub(1));
    (i64::from(pos) * i64::from(cells) / i64::from(extent)).clamp(0, last) as u16
}

/// First cell index and count of cells whose centres lie in `[start, start + len)`.
fn span(start: i32, len: i32, extent: i32, cells: u16) -> (u16, u16) {
    let n = i64::from(cells);
    let extent = i64::from(extent);
    // Centre of cell c is (2c + 1) * extent / 2n, so c is inside once
    // (2c + 1) * extent >= 2 * start * n.
    let first_inside = |pos: i64| ceil_div(2 * pos * n - extent, 2 * extent).clamp(0, n);
    let first = first_inside(i64::from(start));
    let end = first_inside(i64::from(start) + i64::from(len)).max(first);
    (first as u16, (end - first) as u16)
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}
