//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod languages;
mod run;
mod submissions;

pub use run::RunArgs;
pub use submissions::SubmissionCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a program against a test suite
    Run(RunArgs),
    /// Stored submissions
    Submissions {
        #[command(subcommand)]
        command: SubmissionCommands,
    },
    /// List supported languages
    Languages,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run(args) => run::handle_run(args, config).await,
        Commands::Submissions { command } => {
            submissions::handle_submission_command(command, config).await
        }
        Commands::Languages => {
            languages::list_languages();
            Ok(())
        }
    }
}
