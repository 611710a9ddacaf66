use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::identity::FileIdentity;
use crate::ui::messages::{info, success};

/// Handle login / logout / whoami against the file-backed identity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let identity = FileIdentity::new(&cfg.identity_file);

    match cmd {
        Commands::Login { user } => {
            identity.store(user)?;
            success(format!("Signed in as {}", user.trim()));
        }
        Commands::Logout => {
            identity.clear()?;
            success("Signed out");
        }
        Commands::Whoami => match identity.load() {
            Some(id) => info(format!("Signed in as {}", id.id)),
            None => info("Not signed in"),
        },
        _ => {}
    }

    Ok(())
}
