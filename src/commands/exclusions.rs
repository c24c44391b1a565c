//! Exclusions command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ExclusionsConfig;
use crate::error::GiftRingError;

impl FromCommand for ExclusionsConfig {
    fn from_command(command: Commands) -> Result<Self, GiftRingError> {
        match command {
            Commands::Exclusions { roster, format } => ExclusionsConfig::builder()
                .with_sources(roster.sources())
                .with_format(format.format)
                .build(),
            _ => Err(GiftRingError::ConfigurationError {
                message: "Invalid command type for ExclusionsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ExclusionsConfig);

/// Execute the exclusions command
pub fn execute_exclusions_command(command: Commands) -> Result<()> {
    let config = ExclusionsConfig::from_command(command)
        .wrap_err("Failed to parse exclusions command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::exclusions::ExclusionsExecutor;
    ExclusionsExecutor::execute(config)
}
