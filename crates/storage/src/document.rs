// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Documents and their creation metadata

use crate::clock::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Creation stamp carried by every document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub version: u64,
}

impl Meta {
    /// Stamp with the system clock
    pub fn now() -> Self {
        gen_meta(&SystemClock)
    }
}

/// Generate the metadata for a new document: current time, version 0.
pub fn gen_meta(clock: &impl Clock) -> Meta {
    Meta {
        timestamp: clock.now_ms(),
        version: 0,
    }
}

/// A JSON object stored in a collection.
///
/// Serializes as the caller's fields plus `_id` and `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    pub meta: Meta,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create a document from caller fields, stamping its metadata once.
    ///
    /// A string `_id` supplied by the caller is kept; otherwise a v4 UUID is
    /// assigned. Any caller-supplied `meta` is replaced.
    pub fn new(mut fields: Map<String, Value>, clock: &impl Clock) -> Self {
        let id = match fields.remove("_id") {
            Some(Value::String(id)) => id,
            _ => uuid::Uuid::new_v4().to_string(),
        };
        fields.remove("meta");

        Self {
            id,
            meta: gen_meta(clock),
            fields,
        }
    }

    /// Like [`Document::new`], for an arbitrary JSON value. Returns `None`
    /// unless the value is an object.
    pub fn from_value(value: Value, clock: &impl Clock) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields, clock)),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert("_id".to_string(), Value::String(self.id));
        fields.insert(
            "meta".to_string(),
            serde_json::json!({
                "timestamp": self.meta.timestamp,
                "version": self.meta.version,
            }),
        );
        Value::Object(fields)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
