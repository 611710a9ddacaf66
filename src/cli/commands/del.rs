use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workflow::{EntryWorkflow, WorkflowState};
use crate::errors::{AppError, AppResult};
use crate::service;
use crate::ui::messages::success;

/// Delete a session by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut wf = EntryWorkflow::new(service::for_config(cfg)?);
        wf.mount();

        if wf.state == WorkflowState::Unauthenticated {
            return Err(AppError::AuthRequired);
        }

        wf.delete(*id)?;
        success(format!("Deleted session {}", id));
    }

    Ok(())
}
