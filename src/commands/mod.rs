//! Command implementations for the gift-ring CLI
//!
//! This module contains the implementations for each CLI command:
//! - draw: Draw a gift ring
//! - exclusions: List every pair that may not sit side by side
//! - verify: Check an existing gift ring against the roster

pub mod draw;
pub mod exclusions;
pub mod verify;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Draw { .. } => draw::execute_draw_command(command),
        Commands::Exclusions { .. } => exclusions::execute_exclusions_command(command),
        Commands::Verify { .. } => verify::execute_verify_command(command),
    }
}
