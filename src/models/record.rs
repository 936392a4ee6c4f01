//! Stored record shape, one per log.
//! This is exactly what lands in the document store: no id (the store keys
//! records by document id), all fields tolerated as missing on read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String, // ISO-8601, e.g. "2024-05-01T07:30:00"
    #[serde(default)]
    pub notes: String,
}
