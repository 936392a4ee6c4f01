use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let db = LogsDatabase::open(&cfg.database)?;

        let event = db.get(*id)?.ok_or(AppError::NotFound(*id))?;

        println!("📄 Log #{}", id);
        println!("Title: {}", event.name);
        println!("Date:  {}", event.date_str());
        if event.description.is_empty() {
            println!("Notes: -");
        } else {
            println!("Notes:");
            for line in textwrap::wrap(&event.description, 72) {
                println!("  {}", line);
            }
        }
    }

    Ok(())
}
