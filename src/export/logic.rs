// src/export/logic.rs

use crate::db::LogsDatabase;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::LogExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored logs.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` ranges of those)
    pub fn export(
        db: &LogsDatabase,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let logs: Vec<LogExport> = db
            .get_all()?
            .iter()
            .filter(|ev| match date_bounds {
                Some((start, end)) => {
                    let d = ev.date().date();
                    d >= start && d <= end
                }
                None => true,
            })
            .map(|ev| ev.to_export())
            .collect();

        if logs.is_empty() {
            warning("No logs found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&logs, path)?,
            ExportFormat::Json => export_json(&logs, path)?,
        }

        Ok(())
    }
}
