//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name recorded on log events (e.g. "generate", "check").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate => "generate",
        Commands::Check => "check",
        Commands::Print => "print",
        Commands::Init { .. } => "init",
    }
}
