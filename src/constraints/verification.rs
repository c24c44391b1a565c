use std::collections::HashSet;

use serde::Serialize;

use super::ConstraintSet;
use crate::core::{Arrangement, Constraint, Participant};

/// Findings from checking a given ring against a roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RingVerification {
    /// Participants absent from the ring
    pub missing: Vec<Participant>,
    /// Names in the ring that are not participants
    pub unknown: Vec<Participant>,
    /// Names that appear in the ring more than once
    pub repeated: Vec<Participant>,
    /// Forbidden pairs that sit side by side
    pub violations: Vec<Constraint>,
}

impl RingVerification {
    /// Check `ring` (in giving order, last gives to first) against the
    /// roster's participants and effective constraints.
    pub fn check(
        participants: &[Participant],
        ring: &[Participant],
        constraints: &ConstraintSet,
    ) -> Self {
        let roster: HashSet<&str> = participants.iter().map(String::as_str).collect();

        let mut seen = HashSet::new();
        let mut repeated = Vec::new();
        for name in ring {
            if !seen.insert(name.as_str()) && !repeated.contains(name) {
                repeated.push(name.clone());
            }
        }

        let missing = participants
            .iter()
            .filter(|p| !seen.contains(p.as_str()))
            .cloned()
            .collect();

        let mut unknown: Vec<Participant> = Vec::new();
        for name in ring {
            if !roster.contains(name.as_str()) && !unknown.contains(name) {
                unknown.push(name.clone());
            }
        }

        // Positions are ambiguous once a name repeats.
        let violations = if repeated.is_empty() {
            constraints
                .violations(&Arrangement::from_order(ring.to_vec()))
                .into_iter()
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        Self {
            missing,
            unknown,
            repeated,
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
            && self.unknown.is_empty()
            && self.repeated.is_empty()
            && self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::Groups;

    fn names(list: &[&str]) -> Vec<Participant> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_ring() {
        let constraints = ConstraintSet::expand(&[Constraint::new("A", "C")], &Groups::new());
        let result = RingVerification::check(
            &names(&["A", "B", "C", "D"]),
            &names(&["A", "B", "C", "D"]),
            &constraints,
        );

        assert!(result.is_valid());
    }

    #[test]
    fn test_wraparound_violation() {
        let constraints = ConstraintSet::expand(&[Constraint::new("A", "D")], &Groups::new());
        let result = RingVerification::check(
            &names(&["A", "B", "C", "D"]),
            &names(&["A", "B", "C", "D"]),
            &constraints,
        );

        assert_eq!(result.violations, vec![Constraint::new("A", "D")]);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_membership_problems() {
        let result = RingVerification::check(
            &names(&["A", "B", "C", "D"]),
            &names(&["A", "B", "B", "Z"]),
            &ConstraintSet::new(),
        );

        assert_eq!(result.missing, names(&["C", "D"]));
        assert_eq!(result.unknown, names(&["Z"]));
        assert_eq!(result.repeated, names(&["B"]));
        assert!(result.violations.is_empty());
    }
}
