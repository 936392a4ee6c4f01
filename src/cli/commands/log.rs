use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::AppResult;

/// Print the internal operations log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let db = LogsDatabase::open(&cfg.database)?;

        println!("📜 Internal log:");
        for (id, entry) in db.op_entries()? {
            if entry.target.is_empty() {
                println!("{:>3}: {} | {} | {}", id, entry.date, entry.operation, entry.message);
            } else {
                println!(
                    "{:>3}: {} | {} ({}) | {}",
                    id, entry.date, entry.operation, entry.target, entry.message
                );
            }
        }
    }

    Ok(())
}
