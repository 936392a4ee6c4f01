use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::compress_backup;
use std::fs;
use std::path::Path;

/// Copy the document store to a backup file, optionally gzip-compressed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let src = Path::new(&cfg.database);
        let dest = Path::new(file);

        if !src.exists() {
            return Err(AppError::StoreNotFound(cfg.database.clone()));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if *compress {
            let compressed = compress_backup(dest)?;
            // The plain copy is redundant once the gz exists.
            if let Err(e) = fs::remove_file(dest) {
                eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
            }
            success(format!("Backup compressed: {}", compressed.display()));
            compressed
        } else {
            dest.to_path_buf()
        };

        if let Ok(mut db) = LogsDatabase::open(&cfg.database) {
            let _ = db.log_op(
                "backup",
                &final_path.to_string_lossy(),
                if *compress {
                    "Store backup created and compressed"
                } else {
                    "Store backup created"
                },
            );
        }
    }

    Ok(())
}
