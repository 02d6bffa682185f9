//! Document metadata specs

use crate::prelude::*;

#[test]
fn meta_starts_at_version_zero() {
    let temp = Project::empty();

    let first = temp.diskdb().args(["meta"]).passes().json();
    let second = temp.diskdb().args(["meta"]).passes().json();

    assert_eq!(first["version"], 0);
    assert_eq!(second["version"], 0);
    assert!(second["timestamp"].as_i64().unwrap() >= first["timestamp"].as_i64().unwrap());
}

#[test]
fn stamp_adds_id_and_meta() {
    let temp = Project::empty();

    let doc = temp
        .diskdb()
        .args(["stamp", r#"{"name":"ada"}"#])
        .passes()
        .json();

    assert_eq!(doc["name"], "ada");
    assert!(doc["_id"].is_string());
    assert_eq!(doc["meta"]["version"], 0);
}

#[test]
fn stamp_rejects_non_objects() {
    let temp = Project::empty();

    temp.diskdb()
        .args(["stamp", "[1,2]"])
        .exits_with(1)
        .stderr_has("document must be a JSON object");
}
