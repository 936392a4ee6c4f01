//! The in-memory entity for one running log: title, timestamp, notes,
//! plus the document id once persisted.

use crate::errors::AppResult;
use crate::export::model::LogExport;
use crate::models::record::LogRecord;
use crate::utils::date;
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Event {
    id: Option<u64>, // assigned by the store, immutable after construction
    pub name: String,
    pub description: String,
    date: NaiveDateTime,
}

impl Event {
    /// Build an event from a raw date string.
    ///
    /// The date is parsed leniently (see `utils::date::parse_datetime`); an
    /// unparseable string is replaced with the current local time, so
    /// construction is total. Name and description are stored verbatim,
    /// empty strings included.
    pub fn new(id: Option<u64>, name: &str, date_str: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            date: date::parse_datetime(date_str).unwrap_or_else(date::now),
        }
    }

    pub fn from_record(id: u64, record: &LogRecord) -> Self {
        Self::new(Some(id), &record.title, &record.date, &record.notes)
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// ISO-8601 view of the timestamp, `YYYY-MM-DDTHH:MM:SS`.
    pub fn date_str(&self) -> String {
        date::format_iso(self.date)
    }

    pub fn date_part(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_part(&self) -> String {
        self.date.format("%H:%M").to_string()
    }

    /// Replace the timestamp from a raw string, with the same lenient
    /// fallback-to-now policy as construction.
    pub fn set_date(&mut self, value: &str) {
        self.date = date::parse_datetime(value).unwrap_or_else(date::now);
    }

    /// Combine a `YYYY-MM-DD` date and an `HH:MM` time into the stored
    /// timestamp. Malformed input leaves the previous timestamp unchanged
    /// and returns the error.
    pub fn set_date_time(&mut self, date_part: &str, time_part: &str) -> AppResult<()> {
        self.date = date::combine_date_time(date_part, time_part)?;
        Ok(())
    }

    /// The stored shape: `{title, date, notes}`, no id.
    pub fn to_record(&self) -> LogRecord {
        LogRecord {
            title: self.name.clone(),
            date: self.date_str(),
            notes: self.description.clone(),
        }
    }

    /// Flat view with the id included, for JSON/CSV output.
    pub fn to_export(&self) -> LogExport {
        LogExport {
            id: self.id.unwrap_or(0),
            title: self.name.clone(),
            date: self.date_str(),
            notes: self.description.clone(),
        }
    }
}
