//! Config command - inspect the config file.

use clap::{Args, Subcommand};

use super::Session;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the current configuration with keys masked
    Show,

    /// Print the config file path
    Path,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, session: Session) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = session.into_config()?;
            println!("{}", config.to_masked_json()?);
        }
        ConfigCommand::Path => {
            println!("{}", session.config_path().display());
        }
    }
    Ok(())
}
