use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workflow::{DraftField, EntryWorkflow, WorkflowState};
use crate::errors::{AppError, AppResult};
use crate::service;
use crate::ui::messages::success;

/// Record a focus session through the entry workflow.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        session_type,
        planned,
        actual,
        tasks_done,
        energy,
        notes,
        tasks,
    } = cmd
    {
        let mut wf = EntryWorkflow::new(service::for_config(cfg)?);
        wf.mount();

        if wf.state == WorkflowState::Unauthenticated {
            return Err(AppError::AuthRequired);
        }

        if let Some(d) = date {
            wf.update_field(DraftField::Date, d)?;
        }

        // Tier first: changing it resets planned minutes to the tier default,
        // so an explicit --planned must land afterwards.
        if let Some(t) = session_type {
            wf.update_field(DraftField::SessionType, t)?;
        }
        if let Some(p) = planned {
            wf.update_field(DraftField::PlannedMinutes, p)?;
        }

        wf.update_field(DraftField::ActualMinutes, actual.as_deref().unwrap_or(""))?;

        if let Some(n) = tasks_done {
            wf.update_field(DraftField::TasksCompleted, n)?;
        }
        if let Some(e) = energy {
            wf.update_field(DraftField::EnergyAfter, e)?;
        }
        if let Some(n) = notes {
            wf.update_field(DraftField::Notes, n)?;
        }

        wf.draft.tasks = tasks.clone();

        wf.save()?;

        success(format!(
            "Session recorded ({} in the list)",
            wf.entries.len()
        ));
    }

    Ok(())
}
