//! The sprite set: background scenery, the coquí, a tree and a flower.
//!
//! Sprites are plain text art with one colour per row, scaled to whatever
//! block of cells they are drawn into (nearest neighbour).  Spaces are
//! transparent.  Every sprite is validated once at startup; a broken one is a
//! fatal error naming the sprite.

use crossterm::style::Color;
use tracing::debug;

use crate::error::AssetError;

// ── Art ───────────────────────────────────────────────────────────────────────

const BACKGROUND_ART: &[(&str, Color)] = &[
    (r"   ~~~            ~~~~          ~~      ", Color::White),
    (r"                                        ", Color::White),
    (r"        /\                  /\          ", Color::DarkGreen),
    (r"   /\  /  \    /\          /  \   /\    ", Color::DarkGreen),
    (r"  /  \/    \  /  \/\      /    \_/  \   ", Color::DarkGreen),
    (r"''''''''''''''''''''''''''''''''''''''''", Color::Green),
    (r",.,.,.,.,.,.,.,.,.,.,.,.,.,.,.,.,.,.,.,.", Color::DarkGreen),
    (r".  ,  .  ,  .  ,  .  ,  .  ,  .  ,  .  ,", Color::DarkGreen),
];

const COQUI_ART: &[(&str, Color)] = &[
    (r"  _  _  ", Color::DarkYellow),
    (r" (o)(o) ", Color::Yellow),
    (r"(  __  )", Color::DarkYellow),
    (r" /|  |\ ", Color::DarkYellow),
];

const TREE_ART: &[(&str, Color)] = &[
    (r"  /\/\  ", Color::Green),
    (r" /\/\/\ ", Color::Green),
    (r"/\/\/\/\", Color::Green),
    (r"   ||   ", Color::DarkYellow),
];

const FLOWER_ART: &[(&str, Color)] = &[
    (r" @  *  @", Color::Magenta),
    (r"  \ | / ", Color::Green),
    (r"   \|/  ", Color::Green),
];

// ── Sprite ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    name: &'static str,
    rows: Vec<Vec<char>>,
    colors: Vec<Color>,
}

impl Sprite {
    /// Validate and load text art.  Rows must be non-empty, equally wide,
    /// and at least one glyph must be visible.
    pub fn parse(name: &'static str, art: &[(&str, Color)]) -> Result<Sprite, AssetError> {
        let Some((first, _)) = art.first() else {
            return Err(AssetError::Empty { name });
        };
        let expected = first.chars().count();
        if expected == 0 {
            return Err(AssetError::Empty { name });
        }

        let mut rows = Vec::with_capacity(art.len());
        let mut colors = Vec::with_capacity(art.len());
        for (row, (line, color)) in art.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != expected {
                return Err(AssetError::Ragged {
                    name,
                    row,
                    expected,
                    found: chars.len(),
                });
            }
            rows.push(chars);
            colors.push(*color);
        }

        if rows.iter().flatten().all(|c| *c == ' ') {
            return Err(AssetError::Blank { name });
        }

        Ok(Sprite { name, rows, colors })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Glyph and colour shown at cell `(col, row)` when the sprite is
    /// stretched over `cols` × `rows` cells.
    pub fn sample(&self, col: u16, row: u16, cols: u16, rows: u16) -> (char, Color) {
        let sy = scale(row, rows, self.height());
        let sx = scale(col, cols, self.width());
        (self.rows[sy][sx], self.colors[sy])
    }

    /// One whole scaled row, for painting full-width backgrounds in one go.
    pub fn sample_row(&self, row: u16, cols: u16, rows: u16) -> (String, Color) {
        let sy = scale(row, rows, self.height());
        let line = (0..cols)
            .map(|col| self.rows[sy][scale(col, cols, self.width())])
            .collect();
        (line, self.colors[sy])
    }
}

fn scale(index: u16, cells: u16, source: usize) -> usize {
    let cells = usize::from(cells.max(1));
    (usize::from(index) * source / cells).min(source - 1)
}

// ── Asset set ─────────────────────────────────────────────────────────────────

/// Every sprite the game draws, loaded once before the first frame.
#[derive(Clone, Debug)]
pub struct Assets {
    pub background: Sprite,
    pub coqui: Sprite,
    pub tree: Sprite,
    pub flower: Sprite,
}

impl Assets {
    pub fn load() -> Result<Assets, AssetError> {
        let assets = Assets {
            background: Sprite::parse("background", BACKGROUND_ART)?,
            coqui: Sprite::parse("coqui", COQUI_ART)?,
            tree: Sprite::parse("tree", TREE_ART)?,
            flower: Sprite::parse("flower", FLOWER_ART)?,
        };
        debug!("sprites loaded");
        Ok(assets)
    }
}
