//! Draw command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DrawConfig;
use crate::error::GiftRingError;

impl FromCommand for DrawConfig {
    fn from_command(command: Commands) -> Result<Self, GiftRingError> {
        match command {
            Commands::Draw {
                roster,
                format,
                max_attempts,
                seed,
                error_on_failure,
            } => DrawConfig::builder()
                .with_sources(roster.sources())
                .with_format(format.format)
                .with_max_attempts(max_attempts)
                .with_seed(seed)
                .with_error_on_failure(error_on_failure)
                .build(),
            _ => Err(GiftRingError::ConfigurationError {
                message: "Invalid command type for DrawConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DrawConfig);

/// Execute the draw command
pub fn execute_draw_command(command: Commands) -> Result<()> {
    let config = DrawConfig::from_command(command)
        .wrap_err("Failed to parse draw command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::draw::DrawExecutor;
    DrawExecutor::execute(config)
}
