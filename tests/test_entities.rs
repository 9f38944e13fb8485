use coqui_hunt::entities::*;

#[test]
fn player_order_and_numbers() {
    assert_eq!(Player::ORDER, [Player::One, Player::Two]);
    assert_eq!(Player::One.number(), 1);
    assert_eq!(Player::Two.number(), 2);
    assert_eq!(Player::One.next(), Some(Player::Two));
    assert_eq!(Player::Two.next(), None);
    assert_eq!(Player::Two.to_string(), "Player 2");
}

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::new(100, 200, 80, 80);
    assert!(r.contains(100, 200));
    assert!(r.contains(179, 279));
    assert!(!r.contains(180, 250));
    assert!(!r.contains(150, 280));
    assert!(!r.contains(99, 250));
    assert!(!r.contains(150, 199));
}

#[test]
fn rect_within_bounds() {
    assert!(Rect::new(720, 520, 80, 80).within(800, 600));
    assert!(!Rect::new(721, 520, 80, 80).within(800, 600));
    assert!(!Rect::new(-1, 0, 80, 80).within(800, 600));
}

#[test]
fn session_clone_is_independent() {
    use coqui_hunt::compute::init_session;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let original = init_session(&mut StdRng::seed_from_u64(7));
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.scores.increment(Player::One);
    cloned.obstacles.clear();
    cloned.running = false;

    assert_eq!(original.scores.get(Player::One), 0);
    assert_eq!(original.obstacles.len(), 5);
    assert!(original.running);
}
