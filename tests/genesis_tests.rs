#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use bugworld::simulation::entity::Entity;
use bugworld::simulation::genesis::populate;
use bugworld::simulation::params::Params;

fn create_test_params(seed: u64) -> Params {
    Params {
        n_bugs: 25,
        n_food: 75,
        spawn_extent: 800,
        bug_nutrition: 0.8,
        bug_mass: 1.2,
        food_quantity: 2.0,
        seed: Some(seed),
        ..Params::default()
    }
}

#[test]
fn test_population_counts_and_order() {
    let params = create_test_params(1);
    let world = populate(&params);

    assert_eq!(world.len(), 100);
    assert_eq!(world.seed(), 100);

    for (&id, entity) in world.entities() {
        match entity {
            Entity::Bug(bug) => {
                assert!(id < 25, "bugs are inserted first");
                assert_eq!(bug.nutrition, 0.8);
                assert_eq!(bug.mass, 1.2);
            }
            Entity::Food(food) => {
                assert!(id >= 25);
                assert_eq!(food.quantity, 2.0);
            }
        }
    }
}

#[test]
fn test_positions_are_integers_within_extent() {
    let params = Params {
        spawn_extent: 10,
        ..create_test_params(3)
    };
    let world = populate(&params);

    for entity in world.entities().values() {
        let pos = match entity {
            Entity::Bug(bug) => &bug.pos,
            Entity::Food(food) => &food.pos,
        };
        assert_eq!(pos.len(), 2);
        for &c in pos {
            assert!((-10.0..=10.0).contains(&c), "coordinate {c} out of range");
            assert_eq!(c, c.round());
        }
    }
}

#[test]
fn test_same_seed_same_world() {
    let a = populate(&create_test_params(42));
    let b = populate(&create_test_params(42));

    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_diverge() {
    let a = populate(&create_test_params(1));
    let b = populate(&create_test_params(2));

    assert_ne!(a, b);
}

#[test]
fn test_empty_population() {
    let params = Params {
        n_bugs: 0,
        n_food: 0,
        ..create_test_params(5)
    };

    assert!(populate(&params).is_empty());
}
