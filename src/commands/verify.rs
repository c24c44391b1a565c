//! Verify command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::VerifyConfig;
use crate::error::GiftRingError;

impl FromCommand for VerifyConfig {
    fn from_command(command: Commands) -> Result<Self, GiftRingError> {
        match command {
            Commands::Verify {
                chain,
                roster,
                format,
            } => VerifyConfig::builder()
                .with_chain(chain)
                .with_sources(roster.sources())
                .with_format(format.format)
                .build(),
            _ => Err(GiftRingError::ConfigurationError {
                message: "Invalid command type for VerifyConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(VerifyConfig);

/// Execute the verify command
pub fn execute_verify_command(command: Commands) -> Result<()> {
    let config = VerifyConfig::from_command(command)
        .wrap_err("Failed to parse verify command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::verify::VerifyExecutor;
    VerifyExecutor::execute(config)
}
