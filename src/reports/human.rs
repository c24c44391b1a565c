//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{DrawReport, ReportGenerator};
use crate::constraints::{ConstraintSet, RingVerification};
use crate::error::GiftRingError;
use crate::generator::GenerationOutcome;
use crate::utils::string::{join_names, pluralize};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn draw_report(&self, report: &DrawReport) -> Result<String, GiftRingError> {
        let mut output = String::new();

        match &report.outcome {
            GenerationOutcome::Arranged {
                arrangement,
                attempts,
            } => {
                writeln!(
                    output,
                    "\n{} Successfully drew a gift ring for {} {} on attempt {}!\n",
                    style("🎉").green().bold(),
                    style(report.participant_count).green().bold(),
                    pluralize("participant", report.participant_count),
                    style(attempts).yellow()
                )?;

                for edge in arrangement.edges() {
                    writeln!(
                        output,
                        "  {} {} → {} {}",
                        style("🎁").red(),
                        style(&edge.giver).bold(),
                        style("🎄").green(),
                        style(&edge.receiver).bold()
                    )?;
                }
            }
            GenerationOutcome::Exhausted { attempts } => {
                writeln!(
                    output,
                    "\n{} Could not find a valid arrangement with these constraints after {} {}.",
                    style("😕").red().bold(),
                    style(attempts).red().bold(),
                    pluralize("attempt", *attempts)
                )?;
                writeln!(
                    output,
                    "{} Try reducing the number of constraints ({} {} in effect), or raise \
                     --max-attempts.",
                    style("💡").yellow(),
                    style(report.constraint_count).yellow(),
                    pluralize("exclusion", report.constraint_count)
                )?;
            }
        }

        Ok(output)
    }

    fn exclusions_report(&self, constraints: &ConstraintSet) -> Result<String, GiftRingError> {
        let mut output = String::new();

        if constraints.is_empty() {
            writeln!(
                output,
                "\n{} No exclusions: anyone may give to anyone.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n{} {} {} in effect:\n",
            style("⚡").yellow(),
            style(constraints.len()).yellow().bold(),
            pluralize("exclusion", constraints.len())
        )?;

        for (constraint, origins) in constraints.iter_with_origins() {
            let origins: Vec<String> = origins.iter().map(ToString::to_string).collect();
            writeln!(
                output,
                "  {} {} cannot be paired with {} {}",
                style("❌").red(),
                style(constraint.first()).bold(),
                style(constraint.second()).bold(),
                style(format!("({})", origins.join(", "))).dim()
            )?;
        }

        Ok(output)
    }

    fn verify_report(&self, verification: &RingVerification) -> Result<String, GiftRingError> {
        let mut output = String::new();

        if verification.is_valid() {
            writeln!(
                output,
                "\n{} The gift ring is valid.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n{} The gift ring is not valid:\n",
            style("❌").red().bold()
        )?;

        let sections = [
            ("Missing from the ring", &verification.missing),
            ("Not on the roster", &verification.unknown),
            ("Listed more than once", &verification.repeated),
        ];
        for (title, names) in sections {
            if names.is_empty() {
                continue;
            }
            writeln!(
                output,
                "  {} {}: {}",
                style("📋").blue(),
                title,
                style(join_names(names)).bold()
            )?;
        }

        if !verification.violations.is_empty() {
            writeln!(output, "  {} Excluded pairs side by side:", style("🔗").cyan())?;
            for constraint in &verification.violations {
                writeln!(
                    output,
                    "    {} {} and {}",
                    style("→").dim(),
                    style(constraint.first()).yellow(),
                    style(constraint.second()).yellow()
                )?;
            }
        }

        Ok(output)
    }
}
