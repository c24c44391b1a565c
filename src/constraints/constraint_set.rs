use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::core::{Arrangement, Constraint, Groups, Participant};

/// Where a forbidden pair came from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", content = "family", rename_all = "lowercase")]
pub enum ConstraintOrigin {
    Explicit,
    Family(String),
}

impl fmt::Display for ConstraintOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintOrigin::Explicit => write!(f, "explicit"),
            ConstraintOrigin::Family(name) => write!(f, "family '{name}'"),
        }
    }
}

/// The effective set of forbidden adjacencies
///
/// Each unordered pair is stored once, together with every origin that
/// produced it.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    pairs: BTreeMap<Constraint, BTreeSet<ConstraintOrigin>>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of `explicit` and every pair of distinct members within each
    /// group. Repeated members are collapsed before pairing.
    pub fn expand(explicit: &[Constraint], groups: &Groups) -> Self {
        let mut set = Self::new();

        for constraint in explicit {
            set.insert(constraint.clone(), ConstraintOrigin::Explicit);
        }

        for (family, members) in groups {
            let unique: BTreeSet<&Participant> = members.iter().collect();
            let unique: Vec<&Participant> = unique.into_iter().collect();

            for (i, a) in unique.iter().enumerate() {
                for b in &unique[i + 1..] {
                    set.insert(
                        Constraint::new(a.as_str(), b.as_str()),
                        ConstraintOrigin::Family(family.clone()),
                    );
                }
            }
        }

        set
    }

    pub fn insert(&mut self, constraint: Constraint, origin: ConstraintOrigin) {
        self.pairs.entry(constraint).or_default().insert(origin);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, constraint: &Constraint) -> bool {
        self.pairs.contains_key(constraint)
    }

    /// Whether `a` and `b` may not sit next to each other, in either order
    pub fn forbids(&self, a: &str, b: &str) -> bool {
        self.contains(&Constraint::new(a, b))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.pairs.keys()
    }

    pub fn origins(&self, constraint: &Constraint) -> Option<&BTreeSet<ConstraintOrigin>> {
        self.pairs.get(constraint)
    }

    pub fn iter_with_origins(
        &self,
    ) -> impl Iterator<Item = (&Constraint, &BTreeSet<ConstraintOrigin>)> {
        self.pairs.iter()
    }

    /// Constraints whose two participants are neighbours in `arrangement`.
    /// Pairs naming someone outside the ring are ignored.
    pub fn violations<'a>(&'a self, arrangement: &Arrangement) -> Vec<&'a Constraint> {
        let positions = arrangement.positions();
        let n = arrangement.len();

        self.iter()
            .filter(|c| {
                match (
                    positions.get(c.first()).copied(),
                    positions.get(c.second()).copied(),
                ) {
                    (Some(i), Some(j)) => cyclically_adjacent(i, j, n),
                    _ => false,
                }
            })
            .collect()
    }

    pub fn is_satisfied_by(&self, arrangement: &Arrangement) -> bool {
        self.violations(arrangement).is_empty()
    }
}

/// Positions `i` and `j` in a ring of `n` are neighbours, counting the
/// wraparound between the last and first slot.
pub fn cyclically_adjacent(i: usize, j: usize, n: usize) -> bool {
    let distance = i.abs_diff(j);
    distance == 1 || (n > 1 && distance == n - 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(list: &[&str]) -> Vec<Participant> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expand_without_groups() {
        let explicit = vec![Constraint::new("A", "B"), Constraint::new("B", "A")];
        let set = ConstraintSet::expand(&explicit, &Groups::new());

        assert_eq!(set.len(), 1);
        assert!(set.forbids("A", "B"));
        assert!(set.forbids("B", "A"));
    }

    #[test]
    fn test_group_expansion_is_all_pairs() {
        let mut groups = Groups::new();
        groups.insert("Fam".to_string(), names(&["C", "A", "B"]));

        let set = ConstraintSet::expand(&[], &groups);
        let pairs: Vec<_> = set.iter().cloned().collect();

        assert_eq!(
            pairs,
            vec![
                Constraint::new("A", "B"),
                Constraint::new("A", "C"),
                Constraint::new("B", "C"),
            ]
        );
    }

    #[test]
    fn test_group_order_does_not_matter() {
        let mut forward = Groups::new();
        forward.insert("Fam".to_string(), names(&["A", "B", "C"]));
        let mut backward = Groups::new();
        backward.insert("Fam".to_string(), names(&["C", "B", "A"]));

        let a: Vec<_> = ConstraintSet::expand(&[], &forward).iter().cloned().collect();
        let b: Vec<_> = ConstraintSet::expand(&[], &backward)
            .iter()
            .cloned()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_and_singleton_groups_add_nothing() {
        let mut groups = Groups::new();
        groups.insert("Empty".to_string(), vec![]);
        groups.insert("Solo".to_string(), names(&["A"]));
        groups.insert("Repeated".to_string(), names(&["B", "B", "B"]));

        assert!(ConstraintSet::expand(&[], &groups).is_empty());
    }

    #[test]
    fn test_origins_are_merged() {
        let mut groups = Groups::new();
        groups.insert("Fam1".to_string(), names(&["A", "B"]));
        groups.insert("Fam2".to_string(), names(&["B", "A", "C"]));

        let set = ConstraintSet::expand(&[Constraint::new("A", "B")], &groups);
        let origins = set.origins(&Constraint::new("B", "A")).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(
            origins.iter().cloned().collect::<Vec<_>>(),
            vec![
                ConstraintOrigin::Explicit,
                ConstraintOrigin::Family("Fam1".to_string()),
                ConstraintOrigin::Family("Fam2".to_string()),
            ]
        );
    }

    #[test]
    fn test_cyclic_adjacency() {
        assert!(cyclically_adjacent(0, 1, 4));
        assert!(cyclically_adjacent(3, 0, 4));
        assert!(!cyclically_adjacent(0, 2, 4));
        assert!(!cyclically_adjacent(1, 3, 4));
        assert!(cyclically_adjacent(0, 1, 2));
    }

    #[test]
    fn test_violations_include_wraparound() {
        let set = ConstraintSet::expand(
            &[Constraint::new("A", "D"), Constraint::new("A", "C")],
            &Groups::new(),
        );
        let arrangement = Arrangement::from_order(names(&["A", "B", "C", "D"]));

        let violations = set.violations(&arrangement);
        assert_eq!(violations, vec![&Constraint::new("A", "D")]);
        assert!(!set.is_satisfied_by(&arrangement));

        let fixed = Arrangement::from_order(names(&["A", "B", "D", "C"]));
        assert!(!set.is_satisfied_by(&fixed));
        let fixed = Arrangement::from_order(names(&["A", "B", "D", "E", "C", "F"]));
        assert!(set.is_satisfied_by(&fixed));
    }
}
