//! Random placement of the target and the scenery.
//!
//! All randomness comes through the injected `rng` so tests can pin a seed.

use rand::Rng;

use crate::config::{
    FLOWER_HEIGHT, OBSTACLE_COUNT, OBSTACLE_MARGIN, OBSTACLE_SIZE, PLAYFIELD_HEIGHT,
    PLAYFIELD_WIDTH, TARGET_SIZE,
};
use crate::entities::{Obstacle, ObstacleKind, Rect};

/// Width and height of each kind of scenery.
pub fn obstacle_size(kind: ObstacleKind) -> (i32, i32) {
    match kind {
        ObstacleKind::Tree => (OBSTACLE_SIZE, OBSTACLE_SIZE),
        ObstacleKind::Flower => (OBSTACLE_SIZE, FLOWER_HEIGHT),
    }
}

/// Draw a fresh target position.  Both axes are sampled from the closed range
/// `[size, extent - size]`, so the whole square always stays on the
/// playfield.  Consecutive positions are independent and may coincide.
pub fn reposition(rng: &mut impl Rng) -> Rect {
    let x = rng.gen_range(TARGET_SIZE..=PLAYFIELD_WIDTH - TARGET_SIZE);
    let y = rng.gen_range(TARGET_SIZE..=PLAYFIELD_HEIGHT - TARGET_SIZE);
    Rect::new(x, y, TARGET_SIZE, TARGET_SIZE)
}

/// Scatter the decorative trees and flowers once per session.
pub fn scatter_obstacles(rng: &mut impl Rng) -> Vec<Obstacle> {
    (0..OBSTACLE_COUNT)
        .map(|_| {
            let kind = if rng.gen_bool(0.5) {
                ObstacleKind::Tree
            } else {
                ObstacleKind::Flower
            };
            let (width, height) = obstacle_size(kind);
            let x = rng.gen_range(OBSTACLE_MARGIN..=PLAYFIELD_WIDTH - width - OBSTACLE_MARGIN);
            let y = rng.gen_range(OBSTACLE_MARGIN..=PLAYFIELD_HEIGHT - height - OBSTACLE_MARGIN);
            Obstacle {
                kind,
                rect: Rect::new(x, y, width, height),
            }
        })
        .collect()
}
