use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::db::CsvStore;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the CSV backing file, header only, when missing
///  - the SQLite database (internal log, events table)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.as_deref(), cli.db.as_deref(), cli.test)?;

    info("Initializing ctc-checkin…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data file   : {}", cfg.data_file);
    println!("🗄️  Database    : {}", cfg.database);

    if cfg.backend == Backend::Csv {
        if CsvStore::new(&cfg.data_file).create_if_missing()? {
            success(format!("Created data file {}", cfg.data_file));
        } else {
            info(format!("Data file already present: {}", cfg.data_file));
        }
    }

    let pool = DbPool::new(&cfg.database)?;

    // internal log (non-blocking)
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        &cfg.data_file,
        &format!("Initialized (database {})", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("ctc-checkin initialization completed!");
    Ok(())
}
