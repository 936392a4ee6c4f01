//! Internal operations log, kept as a table inside the document store.

use crate::errors::AppResult;
use crate::store::DocStore;
use chrono::Local;
use serde::{Deserialize, Serialize};

pub const OPLOG_TABLE: &str = "oplog";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpEntry {
    pub date: String, // ISO 8601, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one entry to the operations log.
pub fn record(store: &mut DocStore, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = OpEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };
    store.insert(OPLOG_TABLE, serde_json::to_value(&entry)?)?;
    Ok(())
}

/// All entries in insertion order, with their ids.
pub fn entries(store: &DocStore) -> AppResult<Vec<(u64, OpEntry)>> {
    let mut out = Vec::new();
    for (id, value) in store.all(OPLOG_TABLE) {
        let entry: OpEntry = serde_json::from_value(value)?;
        out.push((id, entry));
    }
    Ok(out)
}
