//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::constraints::ConstraintSet;

/// Opaque participant identifier
pub type Participant = String;

/// Named groups ("families") mapped to their members
pub type Groups = BTreeMap<String, Vec<Participant>>;

/// An unordered pair of participants that must never sit next to each other
///
/// The pair is stored in sorted order so `(X, Y)` and `(Y, X)` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Constraint {
    first: Participant,
    second: Participant,
}

impl Constraint {
    pub fn new(a: impl Into<Participant>, b: impl Into<Participant>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ✕ {}", self.first, self.second)
    }
}

/// A directed hand-off: `giver` gives to `receiver`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub giver: Participant,
    pub receiver: Participant,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.giver, self.receiver)
    }
}

/// A cyclic ordering of every participant
///
/// Position `i` gives to position `(i + 1) % len`, including the wraparound
/// from the last participant back to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    order: Vec<Participant>,
}

impl Arrangement {
    pub fn from_order(order: Vec<Participant>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[Participant] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `len()` directed edges of the ring, closing back to the first
    /// participant.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.order.len();
        (0..n)
            .map(|i| Edge {
                giver: self.order[i].clone(),
                receiver: self.order[(i + 1) % n].clone(),
            })
            .collect()
    }

    pub fn receiver_of(&self, giver: &str) -> Option<&str> {
        let n = self.order.len();
        self.order
            .iter()
            .position(|p| p == giver)
            .map(|i| self.order[(i + 1) % n].as_str())
    }

    /// No pair in `constraints` sits in neighbouring slots
    pub fn is_valid_for(&self, constraints: &ConstraintSet) -> bool {
        constraints.is_satisfied_by(self)
    }

    /// Index of every participant in the ring
    pub fn positions(&self) -> HashMap<&str, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, p)| (p.as_str(), i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ring(names: &[&str]) -> Arrangement {
        Arrangement::from_order(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_constraint_is_unordered() {
        assert_eq!(Constraint::new("Els", "Theo"), Constraint::new("Theo", "Els"));
        assert_eq!(Constraint::new("Theo", "Els").first(), "Els");
    }

    #[test]
    fn test_constraint_self_pair() {
        assert!(!Constraint::new("Opa", "Oma").is_self_pair());
        assert!(Constraint::new("Nico", "Nico").is_self_pair());
    }

    #[test]
    fn test_edges_close_the_ring() {
        let edges = ring(&["A", "B", "C"]).edges();
        let pairs: Vec<_> = edges
            .iter()
            .map(|e| (e.giver.as_str(), e.receiver.as_str()))
            .collect();

        assert_eq!(pairs, vec![("A", "B"), ("B", "C"), ("C", "A")]);
    }

    #[test]
    fn test_receiver_of() {
        let arrangement = ring(&["A", "B", "C", "D"]);
        assert_eq!(arrangement.receiver_of("B"), Some("C"));
        assert_eq!(arrangement.receiver_of("D"), Some("A"));
        assert_eq!(arrangement.receiver_of("Z"), None);
    }

    #[test]
    fn test_is_valid_for_checks_wraparound() {
        let constraints = ConstraintSet::expand(&[Constraint::new("A", "D")], &Groups::new());

        assert!(!ring(&["A", "B", "C", "D"]).is_valid_for(&constraints));
        assert!(ring(&["A", "B", "D", "C"]).is_valid_for(&constraints));
        assert!(ring(&["A", "B", "C", "D"]).is_valid_for(&ConstraintSet::default()));
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge {
            giver: "Theo".to_string(),
            receiver: "Els".to_string(),
        };
        assert_eq!(edge.to_string(), "Theo → Els");
    }
}
