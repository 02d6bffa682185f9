// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! diskdb-storage: file-per-collection JSON persistence
//!
//! This crate provides:
//! - Whole-file reads and writes of JSON collections, optionally compressed
//! - Existence checks, removal, and collection discovery in a directory
//! - Document metadata stamping
//! - Injectable collaborators for compression, time, and diagnostics

pub mod clock;
pub mod compress;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod layout;
pub mod options;
pub mod store;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use compress::{CompressError, Compressor, ZstdCompressor};
pub use diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use document::{gen_meta, Document, Meta};
pub use error::{CorruptCollection, StoreError};
pub use layout::{collection_name, EXT_DB, EXT_JSON};
pub use options::{DbOptions, OptionsError};
pub use store::{parse_collection, DiskStore};
