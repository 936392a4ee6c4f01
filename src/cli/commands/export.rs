use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let db = LogsDatabase::open(&cfg.database)?;
        ExportLogic::export(&db, format.clone(), file, range, *force)?;
    }

    Ok(())
}
