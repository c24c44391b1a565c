//! # Configuration Module
//!
//! This module provides configuration structures for all gift-ring commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **DrawConfig**: Configuration for the `draw` command that searches for a
//!   gift ring
//! - **ExclusionsConfig**: Configuration for the `exclusions` command that
//!   lists the effective forbidden pairs
//! - **VerifyConfig**: Configuration for the `verify` command that checks an
//!   existing ring
//!
//! ## Example
//!
//! ```
//! use gift_ring::cli::OutputFormat;
//! use gift_ring::common::ConfigBuilder;
//! use gift_ring::config::DrawConfig;
//! use gift_ring::roster::RosterSources;
//!
//! let config = DrawConfig::builder()
//!     .with_sources(RosterSources {
//!         names: vec!["Theo".into(), "Els".into(), "Nico".into()],
//!         ..Default::default()
//!     })
//!     .with_format(OutputFormat::Human)
//!     .with_max_attempts(Some(500))
//!     .with_seed(None)
//!     .with_error_on_failure(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_attempts, Some(500));
//! ```

pub mod draw;
pub mod exclusions;
pub mod verify;

pub use draw::DrawConfig;
pub use exclusions::ExclusionsConfig;
pub use verify::VerifyConfig;

use crate::error::GiftRingError;

pub(crate) fn missing_field(field: &str) -> GiftRingError {
    GiftRingError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
