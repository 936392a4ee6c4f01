use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Edit an existing log: read, modify, write back through `update`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        date,
        time,
        notes,
    } = cmd
    {
        if title.is_none() && date.is_none() && time.is_none() && notes.is_none() {
            warning("No fields provided to edit (use --title/--date/--time/--notes)");
            return Ok(());
        }

        let mut db = LogsDatabase::open(&cfg.database)?;

        let mut event = db.get(*id)?.ok_or(AppError::NotFound(*id))?;

        let mut changes: Vec<String> = Vec::new();

        if let Some(t) = title {
            event.name = t.clone();
            changes.push(format!("title={}", t));
        }

        if let Some(n) = notes {
            event.description = n.clone();
            changes.push("notes".to_string());
        }

        if date.is_some() || time.is_some() {
            // Unchanged half keeps its current value.
            let date_part = date.clone().unwrap_or_else(|| event.date_part());
            let time_part = time.clone().unwrap_or_else(|| event.time_part());
            event.set_date_time(&date_part, &time_part)?;
            changes.push(format!("date={} time={}", date_part, time_part));
        }

        if db.update(&event)? {
            success(format!("Log #{} updated ({})", id, changes.join(", ")));
            if let Err(e) = db.log_op("edit", &event.name, &format!("id={} | {}", id, changes.join(", "))) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        } else {
            // The record disappeared between get and update.
            return Err(AppError::NotFound(*id));
        }
    }

    Ok(())
}
