use coqui_hunt::config::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use coqui_hunt::entities::Rect;
use coqui_hunt::placement::reposition;
use coqui_hunt::viewport::*;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn fits_requires_minimum_grid() {
    assert!(Viewport::new(40, 15).fits());
    assert!(Viewport::new(120, 40).fits());
    assert!(!Viewport::new(39, 15).fits());
    assert!(!Viewport::new(40, 14).fits());
}

#[test]
fn to_units_reports_cell_centres() {
    let v = Viewport::new(80, 60); // 10 units per cell both ways
    assert_eq!(v.to_units(0, 0), (5, 5));
    assert_eq!(v.to_units(79, 59), (795, 595));
}

#[test]
fn cell_at_clamps_to_grid() {
    let v = Viewport::new(80, 60);
    assert_eq!(v.cell_at(10, 60), (1, 6));
    assert_eq!(v.cell_at(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT), (79, 59));
    assert_eq!(v.cell_at(-5, -5), (0, 0));
}

#[test]
fn project_aligned_rect() {
    let v = Viewport::new(80, 60);
    let cells = v.project(&Rect::new(100, 200, 80, 80));
    assert_eq!(
        cells,
        CellRect {
            col: 10,
            row: 20,
            width: 8,
            height: 8
        }
    );
}

#[test]
fn project_on_minimum_grid() {
    let v = Viewport::new(40, 15);
    let cells = v.project(&Rect::new(720, 520, 80, 80));
    assert_eq!((cells.col, cells.width), (36, 4));
    assert_eq!(cells.row + cells.height, 15);
    assert!(cells.height >= 1);
}

proptest! {
    #[test]
    fn clicking_any_drawn_target_cell_is_a_hit(
        seed in any::<u64>(),
        cols in 40u16..300,
        rows in 15u16..120,
    ) {
        let target = reposition(&mut StdRng::seed_from_u64(seed));
        let v = Viewport::new(cols, rows);
        let cells = v.project(&target);
        prop_assert!(cells.width >= 1 && cells.height >= 1);
        prop_assert!(cells.col + cells.width <= cols);
        prop_assert!(cells.row + cells.height <= rows);
        for dy in 0..cells.height {
            for dx in 0..cells.width {
                let (x, y) = v.to_units(cells.col + dx, cells.row + dy);
                prop_assert!(target.contains(x, y));
            }
        }
    }

    #[test]
    fn cells_outside_the_projection_miss(
        seed in any::<u64>(),
        cols in 40u16..120,
        rows in 15u16..50,
    ) {
        let target = reposition(&mut StdRng::seed_from_u64(seed));
        let v = Viewport::new(cols, rows);
        let cells = v.project(&target);
        for row in 0..rows {
            for col in 0..cols {
                let inside = col >= cells.col
                    && col < cells.col + cells.width
                    && row >= cells.row
                    && row < cells.row + cells.height;
                let (x, y) = v.to_units(col, row);
                prop_assert_eq!(target.contains(x, y), inside);
            }
        }
    }
}
