//! Draw command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::common::ConfigBuilder;
use crate::config::DrawConfig;
use crate::constants::generator::DEFAULT_MAX_ATTEMPTS;
use crate::error::GiftRingError;
use crate::executors::{CommandExecutor, report_generator};
use crate::generator::{ArrangementGenerator, GenerationOutcome, GeneratorConfig};
use crate::progress::ProgressReporter;
use crate::reports::DrawReport;
use crate::roster::Roster;

pub struct DrawExecutor;

impl DrawExecutor {
    /// Load the roster and run the search, without printing anything
    pub fn draw(
        config: &DrawConfig,
        progress: Option<&mut ProgressReporter>,
    ) -> Result<DrawReport> {
        let roster = Roster::load(&config.sources).wrap_err("Failed to load the roster")?;
        roster.validate().wrap_err("Invalid roster")?;
        let constraint_count = roster.effective_constraints().len();

        let max_attempts = config
            .max_attempts
            .or(roster.max_attempts())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);
        let generator = ArrangementGenerator::new(
            GeneratorConfig::builder()
                .with_max_attempts(max_attempts)
                .build()?,
        );

        let mut progress = progress;
        if let Some(p) = progress.as_deref_mut() {
            p.start_draw(roster.participants().len(), constraint_count);
        }

        let result = Self::search(&generator, &roster, config.seed);

        if let Some(p) = progress.as_deref_mut() {
            match &result {
                Ok(outcome) => p.finish_draw(outcome),
                Err(_) => p.abandon_draw(),
            }
        }

        let outcome = result.wrap_err("Failed to draw a gift ring")?;
        info!(
            found = outcome.is_found(),
            attempts = outcome.attempts(),
            max_attempts = generator.config().max_attempts,
            "draw finished"
        );

        Ok(DrawReport {
            outcome,
            participant_count: roster.participants().len(),
            constraint_count,
        })
    }

    fn search(
        generator: &ArrangementGenerator,
        roster: &Roster,
        seed: Option<u64>,
    ) -> Result<GenerationOutcome, GiftRingError> {
        match seed {
            Some(seed) => generator.generate_arrangement_with_rng(
                roster.participants(),
                roster.exclusions(),
                roster.families(),
                &mut StdRng::seed_from_u64(seed),
            ),
            None => generator.generate_arrangement(
                roster.participants(),
                roster.exclusions(),
                roster.families(),
            ),
        }
    }
}

impl CommandExecutor for DrawExecutor {
    type Config = DrawConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Secret Santa ring generator\n", style("🎅").red());

        let mut progress = ProgressReporter::for_terminal();
        let report = Self::draw(&config, progress.as_mut())?;

        let output = report_generator(config.format)
            .draw_report(&report)
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{output}");

        // Exit with error code if no ring was found and requested
        if config.error_on_failure && !report.outcome.is_found() {
            std::process::exit(1);
        }

        Ok(())
    }
}
