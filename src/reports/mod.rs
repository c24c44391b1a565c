//! Report generation modules for different output formats
//!
//! This module contains report generators for the supported output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::constraints::{ConstraintSet, RingVerification};
use crate::error::GiftRingError;
use crate::generator::GenerationOutcome;

/// Everything a draw report needs to know
#[derive(Debug, Clone)]
pub struct DrawReport {
    pub outcome: GenerationOutcome,
    pub participant_count: usize,
    pub constraint_count: usize,
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Report the result of a draw
    fn draw_report(&self, report: &DrawReport) -> Result<String, GiftRingError>;

    /// Report the effective exclusion set
    fn exclusions_report(&self, constraints: &ConstraintSet) -> Result<String, GiftRingError>;

    /// Report the findings of a ring verification
    fn verify_report(&self, verification: &RingVerification) -> Result<String, GiftRingError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
