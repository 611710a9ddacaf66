use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Print the active configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        print!("{}", cfg.to_yaml()?);
    }

    Ok(())
}
