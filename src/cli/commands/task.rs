use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::identity::FileIdentity;
use crate::service::RemoteService;
use crate::ui::messages::success;

/// Flip a sub-task's completed flag. Only the remote store keeps task rows.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task { done, undone } = cmd {
        if cfg.store != "remote" {
            return Err(AppError::Config(
                "tasks are only persisted by the remote store (use --store remote)".into(),
            ));
        }

        let (task_id, completed) = match (done, undone) {
            (Some(id), None) => (*id, true),
            (None, Some(id)) => (*id, false),
            _ => {
                return Err(AppError::Config(
                    "pass exactly one of --done <ID> or --undone <ID>".into(),
                ));
            }
        };

        let hub = FileIdentity::new(&cfg.identity_file).hub();
        let mut service = RemoteService::open(&cfg.database, hub)?;
        service.set_task_completed(task_id, completed)?;

        success(format!(
            "Task {} marked {}",
            task_id,
            if completed { "done" } else { "not done" }
        ));
    }

    Ok(())
}
