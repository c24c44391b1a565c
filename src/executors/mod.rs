//! Command executors that handle the actual logic for each command

pub mod draw;
pub mod exclusions;
pub mod verify;

use miette::Result;

use crate::cli::OutputFormat;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

pub(crate) fn report_generator(format: OutputFormat) -> Box<dyn ReportGenerator> {
    match format {
        OutputFormat::Human => Box::new(HumanReportGenerator::new()),
        OutputFormat::Json => Box::new(JsonReportGenerator::new()),
    }
}
