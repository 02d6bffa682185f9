//! Collection listing specs

use crate::prelude::*;

fn sorted_names(output: &Output) -> Vec<String> {
    let mut names: Vec<String> = serde_json::from_value(output.json()).unwrap();
    names.sort();
    names
}

#[test]
fn list_strips_collection_extensions() {
    let temp = Project::empty();
    temp.file("db/a.db", "[]");
    temp.file("db/b.json", "[]");

    let output = temp.diskdb().args(["list", "db"]).passes();
    assert_eq!(sorted_names(&output), vec!["a", "b"]);
}

#[test]
fn list_keeps_unrecognized_names() {
    let temp = Project::empty();
    temp.file("db/a.db", "[]");
    temp.file("db/notes.txt", "");

    let output = temp.diskdb().args(["list", "db"]).passes();
    assert_eq!(sorted_names(&output), vec!["a", "notes.txt"]);
}

#[test]
fn list_empty_directory() {
    let temp = Project::empty();
    std::fs::create_dir(temp.join("db")).unwrap();

    temp.diskdb().args(["list", "db"]).passes().stdout_eq("[]");
}

#[test]
fn list_missing_directory_fails() {
    let temp = Project::empty();

    temp.diskdb()
        .args(["list", "nope"])
        .exits_with(1)
        .stderr_has("cannot list nope");
}
