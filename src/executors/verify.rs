//! Verify command executor

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::VerifyConfig;
use crate::constraints::RingVerification;
use crate::executors::{CommandExecutor, report_generator};
use crate::roster::Roster;

pub struct VerifyExecutor;

impl VerifyExecutor {
    /// Check the configured ring against the configured roster
    pub fn verify(config: &VerifyConfig) -> Result<RingVerification> {
        let roster = Roster::load(&config.sources).wrap_err("Failed to load the roster")?;
        roster.validate().wrap_err("Invalid roster")?;

        Ok(RingVerification::check(
            roster.participants(),
            &config.chain,
            &roster.effective_constraints(),
        ))
    }
}

impl CommandExecutor for VerifyExecutor {
    type Config = VerifyConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let verification = Self::verify(&config)?;

        let output = report_generator(config.format)
            .verify_report(&verification)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{output}");

        if !verification.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
