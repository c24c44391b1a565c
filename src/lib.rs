//! # Gift Ring - Secret Santa Without the Awkward Pairings
//!
//! Gift Ring arranges the participants of a gift exchange into one closed
//! hand-off ring (A gives to B, B to C, ... and the last back to A) such that
//! no excluded pair of participants is ever adjacent. Members of the same
//! family are kept apart automatically.
//!
//! ## Main Components
//!
//! - **Roster**: Collects participants, exclusions and families from roster
//!   files and command-line input
//! - **Constraints**: Expands families into forbidden pairs and checks rings
//!   against them
//! - **Generator**: Randomised, budget-bounded search for a valid ring
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Drawing a Ring
//!
//! ```
//! use gift_ring::generator::{ArrangementGenerator, GenerationOutcome};
//! use gift_ring::roster::Roster;
//!
//! # fn main() -> miette::Result<()> {
//! let mut roster = Roster::new();
//! roster.add_participants(["Theo", "Els", "Nico", "Opa", "Oma", "Anton"]);
//! roster.add_exclusion("Theo", "Els");
//! roster.add_family(
//!     "Grandparents",
//!     vec!["Opa".to_string(), "Oma".to_string()],
//! );
//!
//! let generator = ArrangementGenerator::default();
//! let outcome = generator.generate_arrangement(
//!     roster.participants(),
//!     roster.exclusions(),
//!     roster.families(),
//! )?;
//!
//! match outcome {
//!     GenerationOutcome::Arranged { arrangement, attempts } => {
//!         println!("Found a ring on attempt {attempts}");
//!         for edge in arrangement.edges() {
//!             println!("  {} → {}", edge.giver, edge.receiver);
//!         }
//!         assert!(arrangement.is_valid_for(&roster.effective_constraints()));
//!     }
//!     GenerationOutcome::Exhausted { attempts } => {
//!         println!("No ring found in {attempts} attempts, try fewer exclusions");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Reproducible Draws
//!
//! ```
//! use gift_ring::common::ConfigBuilder;
//! use gift_ring::core::{Constraint, Groups};
//! use gift_ring::generator::{ArrangementGenerator, GeneratorConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> miette::Result<()> {
//! let participants: Vec<String> = ["A", "B", "C", "D", "E"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let exclusions = vec![Constraint::new("A", "B")];
//!
//! let generator = ArrangementGenerator::new(
//!     GeneratorConfig::builder().with_max_attempts(200).build()?,
//! );
//!
//! let first = generator.generate_arrangement_with_rng(
//!     &participants,
//!     &exclusions,
//!     &Groups::new(),
//!     &mut StdRng::seed_from_u64(2024),
//! )?;
//! let second = generator.generate_arrangement_with_rng(
//!     &participants,
//!     &exclusions,
//!     &Groups::new(),
//!     &mut StdRng::seed_from_u64(2024),
//! )?;
//!
//! assert_eq!(first, second);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod constraints;
pub mod core;
pub mod error;
pub mod executors;
pub mod generator;
pub mod reports;
pub mod roster;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    logging::init();

    let cli = Cli::parse();
    execute_command(cli.command)
}
