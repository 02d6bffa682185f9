// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file collection storage
//!
//! Every operation touches one file and reads or writes it in full. There is
//! no locking: concurrent writers to the same path race and the last write
//! wins.
//!
//! Failures split into two classes. Environmental ones (missing files,
//! permissions, codec errors) are recorded through [`Diagnostics`] and come
//! back as sentinel values. A collection file that exists but is not valid
//! JSON comes back as [`CorruptCollection`] and is left to the caller.

use crate::compress::{Compressor, ZstdCompressor};
use crate::diagnostics::{Diagnostics, NoopDiagnostics};
use crate::error::{CorruptCollection, StoreError};
use crate::layout::collection_name;
use crate::options::DbOptions;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// File-per-collection store
#[derive(Debug, Clone)]
pub struct DiskStore<C = ZstdCompressor, D = NoopDiagnostics> {
    compressor: C,
    diagnostics: D,
}

impl DiskStore {
    /// Store with the zstd codec and no diagnostics
    pub fn new() -> Self {
        Self {
            compressor: ZstdCompressor::default(),
            diagnostics: NoopDiagnostics,
        }
    }
}

impl Default for DiskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Compressor, D: Diagnostics> DiskStore<C, D> {
    /// Swap in a different codec for compressed databases
    pub fn with_compressor<C2: Compressor>(self, compressor: C2) -> DiskStore<C2, D> {
        DiskStore {
            compressor,
            diagnostics: self.diagnostics,
        }
    }

    /// Route recoverable failures to `diagnostics`
    pub fn with_diagnostics<D2: Diagnostics>(self, diagnostics: D2) -> DiskStore<C, D2> {
        DiskStore {
            compressor: self.compressor,
            diagnostics,
        }
    }

    /// Whether `path` exists and can be read by this process.
    pub async fn exists(&self, path: &Path) -> bool {
        match check_access(path).await {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.record("exists", path, &e);
                false
            }
        }
    }

    /// Replace the contents of `path`, creating parent directories as needed.
    ///
    /// Returns false if anything failed; the cause goes to diagnostics.
    pub async fn write(&self, path: &Path, contents: &str, compress: bool) -> bool {
        match self.try_write(path, contents, compress).await {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.record("write", path, &e);
                false
            }
        }
    }

    /// [`DiskStore::write`] with the failure cause returned
    pub async fn try_write(
        &self,
        path: &Path,
        contents: &str,
        compress: bool,
    ) -> Result<(), StoreError> {
        ensure_parent_dir(path).await?;
        let bytes = if compress {
            self.compressor.compress(contents.as_bytes().to_vec()).await?
        } else {
            contents.as_bytes().to_vec()
        };
        fs::write(path, bytes).await?;
        Ok(())
    }

    /// Serialize `collection` and write it with the database's options
    pub async fn write_collection(
        &self,
        path: &Path,
        collection: &Value,
        options: &DbOptions,
    ) -> bool {
        let contents = match serde_json::to_string(collection) {
            Ok(contents) => contents,
            Err(e) => {
                let e = StoreError::Serialize(e);
                self.diagnostics.record("write", path, &e);
                return false;
            }
        };
        self.write(path, &contents, options.compress).await
    }

    /// Load and parse the collection at `path`.
    ///
    /// Returns `Ok(None)` when the file cannot be read or decompressed, and
    /// `Err` only when its contents are not valid JSON.
    pub async fn read(
        &self,
        path: &Path,
        options: &DbOptions,
    ) -> Result<Option<Value>, CorruptCollection> {
        match self.try_read(path, options).await {
            Ok(value) => Ok(Some(value)),
            Err(StoreError::Corrupt(corrupt)) => {
                self.diagnostics.record("read", path, &corrupt);
                Err(corrupt)
            }
            Err(e) => {
                self.diagnostics.record("read", path, &e);
                Ok(None)
            }
        }
    }

    /// [`DiskStore::read`] with the failure cause returned
    pub async fn try_read(&self, path: &Path, options: &DbOptions) -> Result<Value, StoreError> {
        let raw = fs::read(path).await?;
        let contents = if options.compress {
            self.compressor.decompress(raw).await?
        } else {
            raw
        };
        let value = parse_collection(&contents).map_err(|source| CorruptCollection {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(value)
    }

    /// Delete the collection file at `path`.
    ///
    /// `Some(true)` on success, `None` if the file could not be removed.
    pub async fn remove(&self, path: &Path) -> Option<bool> {
        match fs::remove_file(path).await {
            Ok(()) => Some(true),
            Err(e) => {
                self.diagnostics.record("remove", path, &e);
                None
            }
        }
    }

    /// Names of the collections stored in `dir`, in directory order.
    ///
    /// Entries without a recognized extension are returned as-is.
    pub async fn list_collections(&self, dir: &Path) -> Result<Vec<String>, StoreError> {
        let mut entries = fs::read_dir(dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            names.push(collection_name(&file_name.to_string_lossy()).to_string());
        }
        Ok(names)
    }
}

/// Parse a whole collection file as one JSON value.
///
/// Nesting depth is bounded only by memory; the stack grows on demand.
pub fn parse_collection(contents: &[u8]) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_slice(contents);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

async fn check_access(path: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(path).await?;
    if metadata.is_file() {
        fs::File::open(path).await?;
    }
    Ok(())
}

/// Create every missing directory above `path`
async fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
