// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage error types

use crate::compress::CompressError;
use std::path::PathBuf;
use thiserror::Error;

/// A collection file that exists but does not hold valid JSON.
///
/// This is the one failure the store never downgrades to a sentinel: a
/// corrupt file must be surfaced to whoever owns the process.
#[derive(Debug, Error)]
#[error("collection file is not valid JSON: {}", .path.display())]
pub struct CorruptCollection {
    pub path: PathBuf,
    #[source]
    pub source: serde_json::Error,
}

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("compression error: {0}")]
    Compress(#[from] CompressError),
    #[error(transparent)]
    Corrupt(#[from] CorruptCollection),
    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    /// True when the error is a corrupt collection rather than an
    /// environmental failure.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt(_))
    }
}
