// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk naming of collection files

/// Preferred collection file extension
pub const EXT_DB: &str = ".db";

/// Fallback extension for plain structured-data files
pub const EXT_JSON: &str = ".json";

/// Recover a collection name from a directory entry name.
///
/// Strips `.db` if present, otherwise `.json`. Names with neither suffix
/// come back unchanged.
pub fn collection_name(file_name: &str) -> &str {
    [EXT_DB, EXT_JSON]
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
