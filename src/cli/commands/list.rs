use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workflow::{EntryWorkflow, WorkflowState};
use crate::errors::{AppError, AppResult};
use crate::service;
use crate::ui::messages::info;

/// List sessions, most recent first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { notes } = cmd {
        let mut wf = EntryWorkflow::new(service::for_config(cfg)?);
        wf.mount();

        if wf.state == WorkflowState::Unauthenticated {
            return Err(AppError::AuthRequired);
        }
        if let Some(e) = &wf.last_error {
            return Err(AppError::Fetch(e.clone()));
        }

        if wf.entries.is_empty() {
            info("No sessions recorded yet.");
            return Ok(());
        }

        println!(
            "{:>5}  {:<10}  {:<6}  {:>7}  {:>6}  {:>5}  {:<6}",
            "ID", "DATE", "TIER", "PLANNED", "ACTUAL", "TASKS", "ENERGY"
        );
        for entry in &wf.entries {
            let tasks = entry
                .tasks_completed
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());

            println!(
                "{:>5}  {:<10}  {:<6}  {:>7}  {:>6}  {:>5}  {:<6}",
                entry.id,
                entry.date_str(),
                entry.session_type.label(),
                entry.planned_minutes,
                entry.actual_minutes,
                tasks,
                entry.energy_after.label(),
            );

            if *notes && let Some(text) = entry.display_notes() {
                println!("       {}", text);
            }
        }
    }

    Ok(())
}
