mod common;

use common::{assert_close, WorldBuilder};

#[test]
fn test_left_wall_reflects_velocity() {
    let mut world = WorldBuilder::new()
        .with_population("a", "red")
        .with_moving_entity("a", 1.0, 50.0, -5.0, 0.0)
        .with_rule("a", "a", 0.0, 10.0)
        .build();
    world.tick();

    let a = world.entities("a")[0];
    assert_eq!(a.position.x, 0.0);
    assert_close(a.velocity.x, 4.9, "vx");
    assert_eq!(a.position.y, 50.0);
}

#[test]
fn test_far_corner_clamps_both_axes() {
    let mut world = WorldBuilder::new()
        .with_size(100.0, 80.0)
        .with_population("a", "red")
        .with_moving_entity("a", 99.0, 79.0, 10.0, 10.0)
        .with_rule("a", "a", 0.0, 10.0)
        .build();
    world.tick();

    let a = world.entities("a")[0];
    assert_eq!((a.position.x, a.position.y), (100.0, 80.0));
    assert!(a.velocity.x < 0.0 && a.velocity.y < 0.0);
}

#[test]
fn test_population_without_rules_does_not_move() {
    // Motion only happens when the population is the source of a rule.
    let mut world = WorldBuilder::new()
        .with_population("a", "red")
        .with_moving_entity("a", 50.0, 50.0, 3.0, 0.0)
        .build();
    world.tick();
    let a = world.entities("a")[0];
    assert_eq!(a.position.x, 50.0);
    assert_eq!(a.velocity.x, 3.0);
}

#[test]
fn test_strong_repulsion_stays_in_bounds() {
    let mut world = WorldBuilder::new()
        .with_population("a", "red")
        .with_entity("a", 1.0, 1.0)
        .with_entity("a", 99.0, 99.0)
        .with_entity("a", 50.0, 2.0)
        .with_rule("a", "a", -500.0, 1000.0)
        .build();
    for _ in 0..50 {
        world.tick();
        for e in world.all_entities() {
            assert!((0.0..=100.0).contains(&e.position.x));
            assert!((0.0..=100.0).contains(&e.position.y));
        }
    }
}

#[test]
fn test_overflowing_force_never_leaves_infinite_velocity() {
    let mut world = WorldBuilder::new()
        .with_population("a", "red")
        .with_entity("a", 40.0, 40.0)
        .with_entity("a", 50.0, 45.0)
        .with_rule("a", "a", 1e308, 1000.0)
        .with_rule("a", "a", -1e308, 1000.0)
        .build();
    for _ in 0..20 {
        world.tick();
        for e in world.all_entities() {
            assert!(e.velocity.x.is_finite() && e.velocity.y.is_finite());
            assert!((0.0..=100.0).contains(&e.position.x));
            assert!((0.0..=100.0).contains(&e.position.y));
        }
    }
}
