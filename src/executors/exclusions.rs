//! Exclusions command executor

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::ExclusionsConfig;
use crate::constraints::ConstraintSet;
use crate::executors::{CommandExecutor, report_generator};
use crate::roster::Roster;

pub struct ExclusionsExecutor;

impl ExclusionsExecutor {
    /// Effective exclusion set for the configured roster
    pub fn collect(config: &ExclusionsConfig) -> Result<ConstraintSet> {
        let roster = Roster::load(&config.sources).wrap_err("Failed to load the roster")?;
        roster.validate().wrap_err("Invalid roster")?;
        Ok(roster.effective_constraints())
    }
}

impl CommandExecutor for ExclusionsExecutor {
    type Config = ExclusionsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let constraints = Self::collect(&config)?;

        let output = report_generator(config.format)
            .exclusions_report(&constraints)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{output}");

        Ok(())
    }
}
