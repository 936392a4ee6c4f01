use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_time;

/// Add a new running log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        date: date_arg,
        time: time_arg,
        notes,
    } = cmd
    {
        //
        // 1. Resolve date (default: today) and validate
        //
        let date_str = match date_arg {
            Some(d) => {
                date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                d.clone()
            }
            None => date::today().format("%Y-%m-%d").to_string(),
        };

        //
        // 2. Resolve time (default: current minute) and validate
        //
        let time_str = match time_arg {
            Some(t) => {
                parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
                t.clone()
            }
            None => date::now().format("%H:%M").to_string(),
        };

        let notes_str = notes.clone().unwrap_or_default();

        //
        // 3. Open the store and insert
        //
        let mut db = LogsDatabase::open(&cfg.database)?;
        let event = db.insert_event(title, &date_str, &time_str, &notes_str)?;

        let id = event.id().unwrap_or(0);
        success(format!(
            "Log #{} added: {} ({} {})",
            id, event.name, date_str, time_str
        ));

        if let Err(e) = db.log_op(
            "add",
            title,
            &format!("id={} date={} time={}", id, date_str, time_str),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
