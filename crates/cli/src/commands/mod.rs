// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod collection;
pub mod document;

use crate::output::OutputFormat;
use diskdb_storage::{DbOptions, DiskStore, TracingDiagnostics, ZstdCompressor};

/// Everything a command needs to run
pub struct Context {
    pub store: DiskStore<ZstdCompressor, TracingDiagnostics>,
    pub options: DbOptions,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(options: DbOptions, format: OutputFormat) -> Self {
        Self {
            store: DiskStore::new().with_diagnostics(TracingDiagnostics),
            options,
            format,
        }
    }
}
