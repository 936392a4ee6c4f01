// src/export/model.rs

use serde::Serialize;

/// Flat record for export output, id included.
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub notes: String,
}
