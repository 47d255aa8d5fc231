#![allow(missing_docs)]

use bugworld::simulation::action::Action;
use bugworld::simulation::entity::Entity;
use bugworld::simulation::geometric_utils::point;
use bugworld::simulation::reasoner::{attraction, decide};
use bugworld::simulation::world::World;
use ndarray::Array1;

fn world_of(entities: Vec<Entity>) -> World {
    let mut world = World::empty();
    for entity in entities {
        world.insert(entity);
    }
    world
}

fn assert_direction(action: &Action, x: f32, y: f32) {
    match action {
        Action::Crawl(direction) => {
            assert!(
                (direction[0] - x).abs() < 1e-5 && (direction[1] - y).abs() < 1e-5,
                "expected direction ({x}, {y}), got {direction}"
            );
        }
        other => panic!("expected Crawl, got {other:?}"),
    }
}

#[test]
fn test_heavy_bug_always_spawns() {
    // well fed, and with food in reach: mass still wins
    let world = world_of(vec![
        Entity::bug(point(0.0, 0.0), 100.0, 2.01),
        Entity::food(point(1.0, 0.0), 1.0),
        Entity::bug(point(0.0, 0.0), 0.0, 3.0),
    ]);

    let actions = decide(world.entities());

    assert_eq!(actions[&0], Action::Spawn);
    assert_eq!(actions[&2], Action::Spawn);
}

#[test]
fn test_spawn_threshold_is_strict() {
    let world = world_of(vec![Entity::bug(point(0.0, 0.0), 3.0, 2.0)]);

    let actions = decide(world.entities());

    assert_eq!(actions[&0], Action::Idle);
}

#[test]
fn test_well_fed_bug_idles() {
    let world = world_of(vec![
        Entity::bug(point(0.0, 0.0), 1.5, 1.0),
        Entity::food(point(1.0, 0.0), 1.0),
    ]);

    let actions = decide(world.entities());

    assert_eq!(actions[&0], Action::Idle);
}

#[test]
fn test_hungry_bug_consumes_food_in_reach() {
    // nutrition == mass is not "well fed"
    let world = world_of(vec![
        Entity::bug(point(0.0, 0.0), 1.0, 1.0),
        Entity::food(point(5.0, 0.0), 1.0),
        Entity::food(point(0.0, 4.9), 1.0),
    ]);

    let actions = decide(world.entities());

    // the food at exactly 5.0 is out of reach
    assert_eq!(actions[&0], Action::Consume(2));
}

#[test]
fn test_consume_picks_one_of_the_foods_in_reach() {
    let world = world_of(vec![
        Entity::bug(point(10.0, 10.0), 0.2, 1.0),
        Entity::food(point(12.0, 10.0), 1.0),
        Entity::food(point(100.0, 100.0), 1.0),
        Entity::food(point(10.0, 7.0), 1.0),
    ]);

    let actions = decide(world.entities());

    match actions[&0] {
        Action::Consume(id) => assert!(id == 1 || id == 3, "unexpected target {id}"),
        ref other => panic!("expected Consume, got {other:?}"),
    }
}

#[test]
fn test_food_gets_no_action() {
    let world = world_of(vec![
        Entity::food(point(0.0, 0.0), 1.0),
        Entity::bug(point(50.0, 0.0), 0.5, 1.0),
        Entity::food(point(90.0, 0.0), 1.0),
    ]);

    let actions = decide(world.entities());

    assert_eq!(actions.len(), 1);
    assert!(actions.contains_key(&1));

    let only_food = world_of(vec![Entity::food(point(0.0, 0.0), 1.0)]);
    assert!(decide(only_food.entities()).is_empty());
}

#[test]
fn test_crawl_towards_distant_food() {
    let world = world_of(vec![
        Entity::bug(point(0.0, 0.0), 0.5, 1.0),
        Entity::food(point(0.0, 20.0), 1.0),
    ]);

    let actions = decide(world.entities());

    assert_direction(&actions[&0], 0.0, 1.0);
}

#[test]
fn test_lone_bug_crawls_along_positive_x() {
    let world = world_of(vec![Entity::bug(point(-3.0, 7.0), 0.5, 1.0)]);

    let actions = decide(world.entities());

    assert_direction(&actions[&0], 1.0, 0.0);
}

#[test]
fn test_crawl_away_from_nearby_bug() {
    let world = world_of(vec![
        Entity::bug(point(0.0, 0.0), 0.5, 1.0),
        Entity::bug(point(3.0, 0.0), 0.5, 1.0),
    ]);

    let actions = decide(world.entities());

    assert_direction(&actions[&0], -1.0, 0.0);
    assert_direction(&actions[&1], 1.0, 0.0);
}

#[test]
fn test_coincident_bugs_fall_back_to_positive_x() {
    let world = world_of(vec![
        Entity::bug(point(4.0, 4.0), 0.5, 1.0),
        Entity::bug(point(4.0, 4.0), 0.5, 1.5),
    ]);

    let actions = decide(world.entities());

    assert_direction(&actions[&0], 1.0, 0.0);
    assert_direction(&actions[&1], 1.0, 0.0);
}

#[test]
fn test_attraction_sums_food_pull_and_bug_push() {
    let world = world_of(vec![
        Entity::food(point(4.0, 0.0), 1.0),
        Entity::bug(point(0.0, 2.0), 1.0, 2.0),
    ]);

    let field = attraction(&point(0.0, 0.0), world.entities());

    // food: 1/4 along +X; bug: -10 * 2 / 2^3 along +Y
    assert!((field[0] - 0.25).abs() < 1e-6);
    assert!((field[1] + 2.5).abs() < 1e-6);
}

#[test]
fn test_attraction_skips_entities_at_zero_distance() {
    let world = world_of(vec![
        Entity::food(point(1.0, 1.0), 1.0),
        Entity::bug(point(1.0, 1.0), 1.0, 1.0),
        Entity::food(point(1.0, 11.0), 1.0),
    ]);

    let field = attraction(&point(1.0, 1.0), world.entities());

    assert!(field[0].abs() < 1e-6);
    assert!((field[1] - 0.1).abs() < 1e-6);
}

#[test]
fn test_attraction_of_empty_world_is_zero() {
    let field = attraction(&point(3.0, -2.0), World::empty().entities());

    assert_eq!(field, Array1::<f32>::zeros(2));
}

#[test]
fn test_bug_repulsion_decays_with_cube_of_distance() {
    let near = world_of(vec![Entity::bug(point(2.0, 0.0), 0.0, 1.0)]);
    let far = world_of(vec![Entity::bug(point(4.0, 0.0), 0.0, 1.0)]);

    let near_push = attraction(&point(0.0, 0.0), near.entities())[0];
    let far_push = attraction(&point(0.0, 0.0), far.entities())[0];

    assert!(near_push < 0.0 && far_push < 0.0);
    assert!((near_push / far_push - 8.0).abs() < 1e-4);
}

#[test]
fn test_overflowing_push_does_not_drown_food() {
    // d³ underflows for the neighbour, so its push cannot be represented
    let world = world_of(vec![
        Entity::bug(point(0.0, 0.0), 0.5, 1.0),
        Entity::bug(point(1e-20, 0.0), 0.5, 1.0),
        Entity::food(point(0.0, 10.0), 1.0),
    ]);

    let field = attraction(&point(0.0, 0.0), world.entities());
    assert!(field.iter().all(|c| c.is_finite()), "field {field}");

    let actions = decide(world.entities());
    assert_direction(&actions[&0], 0.0, 1.0);
}
