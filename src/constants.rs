//! Configuration constants for gift-ring
//!
//! This module contains all configurable constants used throughout the
//! application. These values can be overridden through environment variables,
//! command-line flags or the roster file.

use std::time::Duration;

/// Search configuration
pub mod generator {
    /// Candidate permutations drawn before giving up
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

    /// Smallest exchange that forms a ring
    pub const MIN_PARTICIPANTS: usize = 2;
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while the ring is being drawn
    pub const SPINNER_FRAMES: &[&str] = &["🎁 ", "🎁✦", "🎁✧", "🎁★", "🎁☆", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Logging configuration
pub mod logging {
    /// Filter used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_constants() {
        assert_eq!(generator::DEFAULT_MAX_ATTEMPTS, 1000);
        assert_eq!(generator::MIN_PARTICIPANTS, 2);
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.last(), Some(&"✓"));
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }
}
