use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::LogsDatabase;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty document store (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing runlogger…");
    println!("🗄️  Store: {}", &db_path);

    // The one auto-create path: every other command requires the store to
    // already exist.
    let mut db = LogsDatabase::open_or_create(&db_path)?;

    println!("✅ Document store initialized at {}", &db_path);

    // Internal log entry (non-blocking)
    if let Err(e) = db.log_op(
        "init",
        "Store initialized",
        &format!("Document store initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 runlogger initialization completed!");
    Ok(())
}
