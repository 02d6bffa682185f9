// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pluggable compression for collection file contents

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a compressor
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("codec error: {0}")]
    Codec(#[from] std::io::Error),
    #[error("codec task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Reversible byte transform applied to collection files when the
/// database is opened with `compress = true`.
///
/// `decompress(compress(x)) == x` must hold for every input.
#[async_trait]
pub trait Compressor: Clone + Send + Sync + 'static {
    async fn compress(&self, data: Vec<u8>) -> Result<Vec<u8>, CompressError>;

    async fn decompress(&self, data: Vec<u8>) -> Result<Vec<u8>, CompressError>;
}

/// zstd compressor; the default codec for compressed databases
#[derive(Debug, Clone, Copy)]
pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    pub const DEFAULT_LEVEL: i32 = 3;

    pub fn new(level: i32) -> Self {
        Self { level }
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}

#[async_trait]
impl Compressor for ZstdCompressor {
    async fn compress(&self, data: Vec<u8>) -> Result<Vec<u8>, CompressError> {
        let level = self.level;
        let encoded =
            tokio::task::spawn_blocking(move || zstd::encode_all(data.as_slice(), level)).await??;
        Ok(encoded)
    }

    async fn decompress(&self, data: Vec<u8>) -> Result<Vec<u8>, CompressError> {
        let decoded =
            tokio::task::spawn_blocking(move || zstd::decode_all(data.as_slice())).await??;
        Ok(decoded)
    }
}

#[cfg(test)]
#[path = "compress_tests.rs"]
mod tests;
