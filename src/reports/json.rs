//! JSON format report generation

use serde_json::json;

use super::{DrawReport, ReportGenerator};
use crate::constraints::{ConstraintSet, RingVerification};
use crate::error::GiftRingError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn draw_report(&self, report: &DrawReport) -> Result<String, GiftRingError> {
        let edges = report
            .outcome
            .arrangement()
            .map(|arrangement| arrangement.edges())
            .unwrap_or_default();

        let value = json!({
            "found": report.outcome.is_found(),
            "attempts": report.outcome.attempts(),
            "participant_count": report.participant_count,
            "constraint_count": report.constraint_count,
            "edges": edges,
        });

        serde_json::to_string_pretty(&value).map_err(GiftRingError::Json)
    }

    fn exclusions_report(&self, constraints: &ConstraintSet) -> Result<String, GiftRingError> {
        let exclusions: Vec<_> = constraints
            .iter_with_origins()
            .map(|(constraint, origins)| {
                json!({
                    "pair": [constraint.first(), constraint.second()],
                    "origins": origins,
                })
            })
            .collect();

        let value = json!({
            "exclusion_count": constraints.len(),
            "exclusions": exclusions,
        });

        serde_json::to_string_pretty(&value).map_err(GiftRingError::Json)
    }

    fn verify_report(&self, verification: &RingVerification) -> Result<String, GiftRingError> {
        let value = json!({
            "valid": verification.is_valid(),
            "missing": verification.missing,
            "unknown": verification.unknown,
            "repeated": verification.repeated,
            "violations": verification
                .violations
                .iter()
                .map(|c| [c.first(), c.second()])
                .collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&value).map_err(GiftRingError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::core::{Arrangement, Constraint, Groups};
    use crate::generator::GenerationOutcome;

    #[test]
    fn test_draw_report_found() {
        let report = DrawReport {
            outcome: GenerationOutcome::Arranged {
                arrangement: Arrangement::from_order(vec!["A".to_string(), "B".to_string()]),
                attempts: 1,
            },
            participant_count: 2,
            constraint_count: 0,
        };

        let text = JsonReportGenerator::new().draw_report(&report).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["found"], true);
        assert_eq!(json["attempts"], 1);
        assert_eq!(json["participant_count"], 2);
        assert_eq!(
            json["edges"],
            json!([
                { "giver": "A", "receiver": "B" },
                { "giver": "B", "receiver": "A" },
            ])
        );
    }

    #[test]
    fn test_draw_report_exhausted() {
        let report = DrawReport {
            outcome: GenerationOutcome::Exhausted { attempts: 1000 },
            participant_count: 3,
            constraint_count: 3,
        };

        let text = JsonReportGenerator::new().draw_report(&report).unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["found"], false);
        assert_eq!(json["attempts"], 1000);
        assert_eq!(json["edges"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_exclusions_report_origins() {
        let mut groups = Groups::new();
        groups.insert("Fam1".to_string(), vec!["A".to_string(), "B".to_string()]);
        let constraints = ConstraintSet::expand(&[Constraint::new("B", "A")], &groups);

        let text = JsonReportGenerator::new()
            .exclusions_report(&constraints)
            .unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["exclusion_count"], 1);
        assert_eq!(json["exclusions"][0]["pair"], json!(["A", "B"]));
        assert_eq!(
            json["exclusions"][0]["origins"],
            json!([{ "kind": "explicit" }, { "kind": "family", "family": "Fam1" }])
        );
    }

    #[test]
    fn test_verify_report() {
        let verification = RingVerification {
            unknown: vec!["Z".to_string()],
            ..Default::default()
        };

        let text = JsonReportGenerator::new()
            .verify_report(&verification)
            .unwrap();
        let json: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["valid"], false);
        assert_eq!(json["unknown"], json!(["Z"]));
        assert_eq!(json["violations"], json!([]));
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let text = JsonReportGenerator::new()
            .exclusions_report(&ConstraintSet::new())
            .unwrap();

        assert!(text.contains('\n'));
        assert!(text.contains("  "));
    }
}
