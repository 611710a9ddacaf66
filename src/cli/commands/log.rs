use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{log as audit_log, pool::DbPool};
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the remote store's internal audit log, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let rows = audit_log::load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Audit log is empty.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{}  {:<16}  {}", date, operation, message);
        }
    }

    Ok(())
}
