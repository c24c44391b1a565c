//! # Constraint Expansion Module
//!
//! Turns explicit exclusions and family memberships into one effective set of
//! forbidden pairs. Every pair of distinct members of a family is forbidden,
//! in addition to the pairs the user declared directly.
//!
//! ## Example
//!
//! ```
//! use gift_ring::constraints::ConstraintSet;
//! use gift_ring::core::{Constraint, Groups};
//!
//! let explicit = vec![Constraint::new("Theo", "Els")];
//! let mut families = Groups::new();
//! families.insert(
//!     "Grandparents".to_string(),
//!     vec!["Opa".to_string(), "Oma".to_string(), "Opa".to_string()],
//! );
//!
//! let effective = ConstraintSet::expand(&explicit, &families);
//!
//! assert_eq!(effective.len(), 2);
//! assert!(effective.forbids("Els", "Theo"));
//! assert!(effective.forbids("Oma", "Opa"));
//! assert!(!effective.forbids("Theo", "Opa"));
//! ```

mod constraint_set;
mod validation;
mod verification;

pub use constraint_set::*;
pub use validation::*;
pub use verification::*;
