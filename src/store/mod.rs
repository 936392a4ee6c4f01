//! File-backed JSON document store (lightweight, single writer).
//!
//! One file holds a set of named tables; each table maps a store-assigned
//! integer document id to one JSON object. Every mutation rewrites the whole
//! file. Document ids grow monotonically within a session: the next id is
//! `max(existing) + 1` at load time and is never decremented on removal.

use crate::errors::{AppError, AppResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct Table {
    records: BTreeMap<u64, Value>,
    next_id: u64,
}

impl Table {
    fn assign_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }
}

pub struct DocStore {
    path: PathBuf,
    tables: BTreeMap<String, Table>,
}

impl DocStore {
    /// Open an existing store file. Fails if the file is absent; the only
    /// code path that creates a store is [`DocStore::create`].
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if !p.exists() {
            return Err(AppError::StoreNotFound(path.to_string()));
        }

        let text = fs::read_to_string(p)?;
        let raw: BTreeMap<String, BTreeMap<String, Value>> = if text.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&text)?
        };

        let mut tables = BTreeMap::new();
        for (name, records_raw) in raw {
            let mut table = Table::default();
            for (key, value) in records_raw {
                let id: u64 = key.parse().map_err(|_| {
                    AppError::CorruptStore(format!("non-integer document id '{key}' in table '{name}'"))
                })?;
                table.next_id = table.next_id.max(id + 1);
                table.records.insert(id, value);
            }
            tables.insert(name, table);
        }

        Ok(Self {
            path: p.to_path_buf(),
            tables,
        })
    }

    /// Create an empty store file (overwrites nothing; an existing file is
    /// opened instead).
    pub fn create(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if p.exists() {
            return Self::open(path);
        }
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let store = Self {
            path: p.to_path_buf(),
            tables: BTreeMap::new(),
        };
        store.flush()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a record and return its newly assigned document id.
    pub fn insert(&mut self, table: &str, value: Value) -> AppResult<u64> {
        let t = self.tables.entry(table.to_string()).or_default();
        let id = t.assign_id();
        t.records.insert(id, value);
        self.flush()?;
        Ok(id)
    }

    /// All records of a table in ascending id order.
    pub fn all(&self, table: &str) -> Vec<(u64, Value)> {
        match self.tables.get(table) {
            Some(t) => t.records.iter().map(|(id, v)| (*id, v.clone())).collect(),
            None => Vec::new(),
        }
    }

    pub fn get(&self, table: &str, id: u64) -> Option<&Value> {
        self.tables.get(table).and_then(|t| t.records.get(&id))
    }

    pub fn contains(&self, table: &str, id: u64) -> bool {
        self.get(table, id).is_some()
    }

    /// Overwrite the record with the given id. Returns false when no record
    /// exists under that id (update never inserts).
    pub fn update(&mut self, table: &str, id: u64, value: Value) -> AppResult<bool> {
        let Some(t) = self.tables.get_mut(table) else {
            return Ok(false);
        };
        if !t.records.contains_key(&id) {
            return Ok(false);
        }
        t.records.insert(id, value);
        self.flush()?;
        Ok(true)
    }

    /// Remove the record with the given id. Returns true only if a record
    /// existed. The id is not reused within this session.
    pub fn remove(&mut self, table: &str, id: u64) -> AppResult<bool> {
        let Some(t) = self.tables.get_mut(table) else {
            return Ok(false);
        };
        if t.records.remove(&id).is_none() {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    fn flush(&self) -> AppResult<()> {
        let mut raw: BTreeMap<&str, BTreeMap<String, &Value>> = BTreeMap::new();
        for (name, table) in &self.tables {
            let records = table
                .records
                .iter()
                .map(|(id, v)| (id.to_string(), v))
                .collect();
            raw.insert(name, records);
        }

        let text = serde_json::to_string_pretty(&raw)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
