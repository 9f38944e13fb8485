use coqui_hunt::assets::{Assets, Sprite};
use coqui_hunt::error::AssetError;

use crossterm::style::Color;

#[test]
fn built_in_sprites_load() {
    let assets = Assets::load().unwrap();
    assert_eq!(assets.background.name(), "background");
    assert_eq!(assets.coqui.name(), "coqui");
    assert_eq!(assets.tree.name(), "tree");
    assert_eq!(assets.flower.name(), "flower");
    assert!(assets.flower.height() < assets.tree.height());
}

#[test]
fn ragged_sprite_is_rejected_with_its_name() {
    let art = [("abc", Color::White), ("ab", Color::White)];
    match Sprite::parse("broken", &art) {
        Err(AssetError::Ragged {
            name,
            row,
            expected,
            found,
        }) => {
            assert_eq!((name, row, expected, found), ("broken", 1, 3, 2));
        }
        other => panic!("expected Ragged, got {:?}", other),
    }
}

#[test]
fn empty_and_blank_sprites_are_rejected() {
    assert!(matches!(
        Sprite::parse("none", &[]),
        Err(AssetError::Empty { name: "none" })
    ));
    assert!(matches!(
        Sprite::parse("blank", &[("   ", Color::White)]),
        Err(AssetError::Blank { name: "blank" })
    ));
}

#[test]
fn error_message_names_the_sprite() {
    let err = Sprite::parse("coqui", &[]).unwrap_err();
    assert_eq!(err.to_string(), "sprite `coqui` has no rows");
}

#[test]
fn sampling_stretches_nearest_neighbour() {
    let art = [("ab", Color::Red), ("cd", Color::Blue)];
    let sprite = Sprite::parse("quad", &art).unwrap();

    // 4x4 cells: each source glyph covers a 2x2 block
    assert_eq!(sprite.sample(0, 0, 4, 4), ('a', Color::Red));
    assert_eq!(sprite.sample(1, 1, 4, 4), ('a', Color::Red));
    assert_eq!(sprite.sample(2, 1, 4, 4), ('b', Color::Red));
    assert_eq!(sprite.sample(3, 3, 4, 4), ('d', Color::Blue));

    // Shrinking keeps the top-left glyph
    assert_eq!(sprite.sample(0, 0, 1, 1), ('a', Color::Red));
}

#[test]
fn sample_row_spans_the_whole_width() {
    let sprite = Sprite::parse("bar", &[("xy", Color::Green)]).unwrap();
    assert_eq!(sprite.sample_row(0, 6, 3), ("xxxyyy".to_string(), Color::Green));
}
