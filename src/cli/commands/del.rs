use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut db = LogsDatabase::open(&cfg.database)?;

        let Some(event) = db.get(*id)? else {
            return Err(AppError::NotFound(*id));
        };

        if !*yes {
            let prompt = format!(
                "Delete log #{} \"{}\" ({})? This action is irreversible.",
                id,
                event.name,
                event.date_str()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if db.remove(*id)? {
            success(format!("Log #{} \"{}\" has been deleted.", id, event.name));
            if let Err(e) = db.log_op("del", &event.name, &format!("Deleted log id={}", id)) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        } else {
            return Err(AppError::NotFound(*id));
        }
    }

    Ok(())
}
