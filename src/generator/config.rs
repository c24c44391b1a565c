//! Generator configuration

use crate::common::ConfigBuilder;
use crate::constants::generator::DEFAULT_MAX_ATTEMPTS;
use crate::error::GiftRingError;

/// Configuration for [`ArrangementGenerator`](super::ArrangementGenerator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Candidate permutations drawn before reporting that no ring was found
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct GeneratorConfigBuilder {
    max_attempts: Option<usize>,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self { max_attempts: None }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

impl ConfigBuilder for GeneratorConfigBuilder {
    type Config = GeneratorConfig;

    fn build(self) -> Result<Self::Config, GiftRingError> {
        let max_attempts = self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(GiftRingError::ConfigurationError {
                message: "max_attempts must be at least 1".to_string(),
            });
        }

        Ok(GeneratorConfig { max_attempts })
    }
}
