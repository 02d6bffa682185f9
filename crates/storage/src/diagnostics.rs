// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic sink for recoverable storage failures

use std::error::Error;
use std::path::Path;

/// Receives every failure the store recovers from locally.
///
/// This is a side channel: nothing recorded here changes what the store
/// returns to its caller.
pub trait Diagnostics: Clone + Send + Sync + 'static {
    fn record(&self, op: &'static str, path: &Path, error: &(dyn Error + 'static));
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn record(&self, _op: &'static str, _path: &Path, _error: &(dyn Error + 'static)) {}
}

/// Emits a `tracing` debug event under the `diskdb` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record(&self, op: &'static str, path: &Path, error: &(dyn Error + 'static)) {
        tracing::debug!(
            target: "diskdb",
            op,
            path = %path.display(),
            error = %error,
            "storage operation failed"
        );
    }
}
