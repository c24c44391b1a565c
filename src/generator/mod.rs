//! # Arrangement Generator Module
//!
//! Finds a single gift ring (A → B → C → … → A) in which no forbidden pair
//! of participants sits side by side.
//!
//! ## Algorithm
//!
//! A bounded randomised search. Each attempt draws a fresh uniform
//! permutation (Fisher–Yates) and rejects it if any effective constraint pair
//! lands in neighbouring slots, counting the wraparound from the last slot to
//! the first. A position table is rebuilt per candidate so each check costs
//! O(1), giving O(N + |constraints|) per attempt.
//!
//! The search is not exhaustive. Running out of attempts means no ring was
//! found, not that none exists.
//!
//! ## Example
//!
//! ```
//! use gift_ring::core::{Constraint, Groups};
//! use gift_ring::generator::{ArrangementGenerator, GenerationOutcome};
//!
//! # fn main() -> miette::Result<()> {
//! let participants: Vec<String> = ["Theo", "Els", "Nico", "Opa", "Oma"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let exclusions = vec![Constraint::new("Theo", "Els")];
//! let mut families = Groups::new();
//! families.insert(
//!     "Grandparents".to_string(),
//!     vec!["Opa".to_string(), "Oma".to_string()],
//! );
//!
//! let generator = ArrangementGenerator::default();
//! match generator.generate_arrangement(&participants, &exclusions, &families)? {
//!     GenerationOutcome::Arranged { arrangement, .. } => {
//!         assert_eq!(arrangement.edges().len(), participants.len());
//!     }
//!     GenerationOutcome::Exhausted { attempts } => {
//!         println!("No ring found after {attempts} attempts");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod generator_impl;

pub use config::*;
pub use generator_impl::*;
