#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use bugworld::simulation::params::{Params, ParamsError};
use std::fs;

#[test]
fn test_default_params_are_valid() {
    let params = Params::default();

    assert!(params.validate().is_ok());
    assert_eq!(params.spawn_extent, 800);
    assert_eq!(params.max_delta, 32.0);
    assert_eq!(params.seed, None);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let params = Params::from_json(r#"{ "n_bugs": 5, "seed": 7 }"#).expect("valid json");

    assert_eq!(params.n_bugs, 5);
    assert_eq!(params.seed, Some(7));
    assert_eq!(params.n_food, Params::default().n_food);
    assert_eq!(params.max_delta, Params::default().max_delta);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let result = Params::from_json("{ n_bugs: 5 ");

    assert!(matches!(result, Err(ParamsError::Parse(_))));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    for json in [
        r#"{ "max_delta": 0.0 }"#,
        r#"{ "max_delta": -16.0 }"#,
        r#"{ "spawn_extent": -1 }"#,
        r#"{ "bug_mass": -0.5 }"#,
        r#"{ "bug_nutrition": -1.0 }"#,
        r#"{ "food_quantity": -2.0 }"#,
    ] {
        let result = Params::from_json(json);
        assert!(
            matches!(result, Err(ParamsError::Invalid(_))),
            "{json} should be rejected, got {result:?}"
        );
    }
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("bugworld_params_{}.json", std::process::id()));
    let params = Params {
        n_bugs: 12,
        n_food: 34,
        seed: Some(99),
        ..Params::default()
    };
    fs::write(&path, serde_json::to_string_pretty(&params).expect("serialize")).expect("write");

    let loaded = Params::load_from_file(&path);
    let _ = fs::remove_file(&path);

    assert_eq!(loaded.expect("load"), params);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = Params::load_from_file("definitely/not/here/params.json");

    assert!(matches!(result, Err(ParamsError::Io(_))));
}
