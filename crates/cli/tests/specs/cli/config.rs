//! Options file specs
//!
//! `diskdb.toml` in the working directory sets database options.

use crate::prelude::*;

#[test]
fn config_file_in_working_directory_enables_compression() {
    let temp = Project::empty();
    temp.file("diskdb.toml", "compress = true\n");

    temp.diskdb().args(["write", "c.db", "[1]"]).passes();

    let raw = std::fs::read(temp.join("c.db")).unwrap();
    assert!(serde_json::from_slice::<serde_json::Value>(&raw).is_err());

    temp.diskdb()
        .args(["read", "c.db"])
        .passes()
        .stdout_eq("[1]");
}

#[test]
fn explicit_config_path_is_used() {
    let temp = Project::empty();
    temp.file("conf/db.toml", "compress = true\n");

    temp.diskdb()
        .args(["--config", "conf/db.toml", "write", "c.db", "[1]"])
        .passes();
    temp.diskdb()
        .args(["--compress", "read", "c.db"])
        .passes()
        .stdout_eq("[1]");
}

#[test]
fn invalid_config_fails() {
    let temp = Project::empty();
    temp.file("diskdb.toml", "level = 3\n");

    temp.diskdb()
        .args(["read", "c.db"])
        .exits_with(1)
        .stderr_has("invalid options");
}
