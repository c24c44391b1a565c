use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, trace};

use super::GeneratorConfig;
use crate::constraints::{ConstraintSet, cyclically_adjacent, validate_inputs};
use crate::core::{Arrangement, Constraint, Groups, Participant};
use crate::error::GiftRingError;

/// Result of one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A valid ring was found on attempt number `attempts` (1-based)
    Arranged {
        arrangement: Arrangement,
        attempts: usize,
    },
    /// Every one of the `attempts` candidates broke at least one constraint.
    /// A valid ring may still exist.
    Exhausted { attempts: usize },
}

impl GenerationOutcome {
    pub fn arrangement(&self) -> Option<&Arrangement> {
        match self {
            GenerationOutcome::Arranged { arrangement, .. } => Some(arrangement),
            GenerationOutcome::Exhausted { .. } => None,
        }
    }

    pub fn attempts(&self) -> usize {
        match self {
            GenerationOutcome::Arranged { attempts, .. }
            | GenerationOutcome::Exhausted { attempts } => *attempts,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, GenerationOutcome::Arranged { .. })
    }
}

/// Randomised search for a gift ring with no forbidden neighbours
///
/// The generator only holds its configuration. Each call owns its working
/// permutation and draws from the random source it is handed, so concurrent
/// calls never interfere.
#[derive(Debug, Clone, Default)]
pub struct ArrangementGenerator {
    config: GeneratorConfig,
}

impl ArrangementGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw a ring using the thread-local random source
    pub fn generate_arrangement(
        &self,
        participants: &[Participant],
        constraints: &[Constraint],
        groups: &Groups,
    ) -> Result<GenerationOutcome, GiftRingError> {
        self.generate_arrangement_with_rng(participants, constraints, groups, &mut rand::rng())
    }

    /// Draw a ring from `rng`
    ///
    /// Up to `max_attempts` independent uniform permutations are tried. The
    /// first one in which no effective constraint pair sits in neighbouring
    /// slots (wraparound included) is returned.
    pub fn generate_arrangement_with_rng<R: Rng>(
        &self,
        participants: &[Participant],
        constraints: &[Constraint],
        groups: &Groups,
        rng: &mut R,
    ) -> Result<GenerationOutcome, GiftRingError> {
        let index = validate_inputs(participants, constraints, groups)?;
        let effective = ConstraintSet::expand(constraints, groups);
        let pairs = indexed_pairs(&effective, &index);
        let n = participants.len();

        debug!(
            participants = n,
            constraints = pairs.len(),
            max_attempts = self.config.max_attempts,
            "searching for gift ring"
        );

        let mut order: Vec<usize> = Vec::with_capacity(n);
        let mut slot_of = vec![0usize; n];

        for attempt in 1..=self.config.max_attempts {
            order.clear();
            order.extend(0..n);
            fisher_yates(&mut order, rng);

            for (slot, &who) in order.iter().enumerate() {
                slot_of[who] = slot;
            }

            let clash = pairs
                .iter()
                .find(|&&(a, b)| cyclically_adjacent(slot_of[a], slot_of[b], n));

            match clash {
                None => {
                    debug!(attempt, "gift ring found");
                    let arrangement = Arrangement::from_order(
                        order.iter().map(|&i| participants[i].clone()).collect(),
                    );
                    return Ok(GenerationOutcome::Arranged {
                        arrangement,
                        attempts: attempt,
                    });
                }
                Some(&(a, b)) => {
                    trace!(
                        attempt,
                        first = %participants[a],
                        second = %participants[b],
                        "candidate rejected"
                    );
                }
            }
        }

        debug!(
            attempts = self.config.max_attempts,
            "attempt budget exhausted without a valid ring"
        );
        Ok(GenerationOutcome::Exhausted {
            attempts: self.config.max_attempts,
        })
    }
}

fn indexed_pairs(effective: &ConstraintSet, index: &HashMap<&str, usize>) -> Vec<(usize, usize)> {
    effective
        .iter()
        .filter_map(|c| Some((*index.get(c.first())?, *index.get(c.second())?)))
        .collect()
}

/// Uniform in-place shuffle (Fisher–Yates)
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
