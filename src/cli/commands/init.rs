use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{initialize, pool::DbPool};
use crate::errors::AppResult;
use crate::store::LocalStore;
use crate::ui::messages::success;

/// Create the config directory and file, and initialize the selected store.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    if !cli.test {
        success(format!("Config file: {:?}", Config::config_file()));
    }

    match cfg.store.as_str() {
        "remote" => {
            let pool = DbPool::new(&cfg.database)?;
            initialize::init_db(&pool.conn)?;
            success(format!("Database:    {}", cfg.database));
        }
        _ => {
            let store = LocalStore::new(&cfg.entries_file);
            if !store.path().exists() {
                store.save(&[])?;
            }
            success(format!("Entries file: {}", cfg.entries_file));
        }
    }

    Ok(())
}
