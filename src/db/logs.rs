//! CRUD façade over the `logs` table of the document store, translating
//! between stored records and `Event` entities.
//!
//! Absence is a value (`Ok(None)` / `Ok(false)`); only storage failures are
//! errors. One instance exclusively owns the store file; opening the same
//! file from two instances is not supported.

use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::record::LogRecord;
use crate::store::DocStore;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::db::oplog::{self, OpEntry};

pub const LOGS_TABLE: &str = "logs";

pub struct LogsDatabase {
    store: DocStore,
}

impl LogsDatabase {
    /// Open an existing store. Fails with `StoreNotFound` when the file is
    /// absent; `init` is the only path that creates one.
    pub fn open(filename: &str) -> AppResult<Self> {
        Ok(Self {
            store: DocStore::open(filename)?,
        })
    }

    /// Bootstrap variant used by `init`: creates the file when missing.
    pub fn open_or_create(filename: &str) -> AppResult<Self> {
        Ok(Self {
            store: DocStore::create(filename)?,
        })
    }

    /// Combine `date` (`YYYY-MM-DD`) and `time` (`HH:MM`) and insert
    /// `{title, date, notes}`. Returns the store-assigned id. Duplicates are
    /// permitted; there is no uniqueness check.
    pub fn add_log(&mut self, title: &str, date: &str, time: &str, notes: &str) -> AppResult<u64> {
        let stamp = date::combine_date_time(date, time)?;
        let record = LogRecord {
            title: title.to_string(),
            date: date::format_iso(stamp),
            notes: notes.to_string(),
        };
        self.store.insert(LOGS_TABLE, serde_json::to_value(&record)?)
    }

    /// Same insertion as [`add_log`], returning the persisted entity with
    /// its new id.
    ///
    /// [`add_log`]: LogsDatabase::add_log
    pub fn insert_event(
        &mut self,
        name: &str,
        date: &str,
        time: &str,
        description: &str,
    ) -> AppResult<Event> {
        let id = self.add_log(name, date, time, description)?;
        let stamp = date::combine_date_time(date, time)?;
        Ok(Event::new(
            Some(id),
            name,
            &date::format_iso(stamp),
            description,
        ))
    }

    /// Every stored log as an `Event`, ascending id order. An empty store
    /// yields an empty vector, not an error.
    pub fn get_all(&self) -> AppResult<Vec<Event>> {
        let mut out = Vec::new();
        for (id, value) in self.store.all(LOGS_TABLE) {
            let record: LogRecord = serde_json::from_value(value)?;
            out.push(self.to_event(id, &record));
        }
        Ok(out)
    }

    /// Look up one log by document id. `Ok(None)` when absent.
    pub fn get(&self, id: u64) -> AppResult<Option<Event>> {
        match self.store.get(LOGS_TABLE, id) {
            Some(value) => {
                let record: LogRecord = serde_json::from_value(value.clone())?;
                Ok(Some(self.to_event(id, &record)))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the stored record matching the entity's id with its
    /// `to_record()` projection. Returns false when the entity has no id or
    /// the id has no record; update never inserts.
    pub fn update(&mut self, event: &Event) -> AppResult<bool> {
        let Some(id) = event.id() else {
            return Ok(false);
        };
        self.store
            .update(LOGS_TABLE, id, serde_json::to_value(event.to_record())?)
    }

    /// Remove the log with the given id. True only if a record existed and
    /// was removed; a second call for the same id returns false.
    pub fn remove(&mut self, id: u64) -> AppResult<bool> {
        self.store.remove(LOGS_TABLE, id)
    }

    /// Append an entry to the internal operations log.
    pub fn log_op(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        oplog::record(&mut self.store, operation, target, message)
    }

    pub fn op_entries(&self) -> AppResult<Vec<(u64, OpEntry)>> {
        oplog::entries(&self.store)
    }

    fn to_event(&self, id: u64, record: &LogRecord) -> Event {
        // Lenient policy: a stored record with an unreadable date still
        // yields an entity (timestamped "now"), so one bad record never
        // makes the whole store unreadable.
        if date::parse_datetime(&record.date).is_none() {
            warning(format!(
                "Log #{id} has an unreadable date '{}'; substituting the current time",
                record.date
            ));
        }
        Event::from_record(id, record)
    }
}
