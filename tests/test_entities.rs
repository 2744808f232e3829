use space_invaders::entities::*;

#[test]
fn default_state_is_title_screen() {
    let s = GameState::default();
    assert_eq!(s.phase, Phase::NotStarted);
    assert!(!s.is_running());
    assert_eq!(s.score, 0);
    assert_eq!(s.player, Player::spawn());
    assert!(s.enemies.is_empty());
    assert!(s.bullets.is_empty());
}

#[test]
fn entity_sizes() {
    assert_eq!(Player::SIZE, 30.0);
    assert_eq!(Enemy::SIZE, 20.0);
    assert_eq!(Bullet::SIZE, 5.0);
    assert_eq!(Enemy::at(0.0, 100.0).bottom(), 120.0);
}

#[test]
fn bounds_cover_square_footprint() {
    let b = Enemy::at(20.0, 50.0).bounds();
    assert_eq!(b.min, Position::new(20.0, 50.0));
    assert_eq!(b.max, Position::new(40.0, 70.0));
}

#[test]
fn overlap_is_symmetric_and_strict() {
    let a = Aabb::square(Position::new(0.0, 0.0), 10.0);
    let inside = Aabb::square(Position::new(5.0, 5.0), 10.0);
    let touching = Aabb::square(Position::new(10.0, 0.0), 10.0);
    let apart = Aabb::square(Position::new(30.0, 30.0), 10.0);

    assert!(a.intersects(&inside));
    assert!(inside.intersects(&a));
    assert!(!a.intersects(&touching));
    assert!(!touching.intersects(&a));
    assert!(!a.intersects(&apart));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::default();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::at(5.0, 5.0));

    assert_eq!(original.player.pos.x, 135.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
