//! Draw command configuration

use super::missing_field;
use crate::cli::OutputFormat;
use crate::roster::RosterSources;

/// Configuration for the draw command
///
/// This struct contains all options for drawing and reporting a gift ring.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Where the participants, exclusions and families come from
    pub sources: RosterSources,
    /// Output format for the report
    pub format: OutputFormat,
    /// Attempt budget (falls back to the roster file, then the default)
    pub max_attempts: Option<usize>,
    /// Seed for a reproducible draw
    pub seed: Option<u64>,
    /// Whether to exit with error code if no ring is found
    pub error_on_failure: bool,
}

impl DrawConfig {
    pub fn builder() -> DrawConfigBuilder {
        DrawConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DrawConfigBuilder {
    sources: Option<RosterSources>,
    format: Option<OutputFormat>,
    max_attempts: Option<Option<usize>>,
    seed: Option<Option<u64>>,
    error_on_failure: Option<bool>,
}

impl DrawConfigBuilder {
    pub fn new() -> Self {
        Self {
            sources: None,
            format: None,
            max_attempts: None,
            seed: None,
            error_on_failure: None,
        }
    }

    pub fn with_sources(mut self, sources: RosterSources) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_error_on_failure(mut self, error_on_failure: bool) -> Self {
        self.error_on_failure = Some(error_on_failure);
        self
    }
}

impl crate::common::ConfigBuilder for DrawConfigBuilder {
    type Config = DrawConfig;

    fn build(self) -> Result<Self::Config, crate::error::GiftRingError> {
        Ok(DrawConfig {
            sources: self.sources.ok_or_else(|| missing_field("sources"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_attempts: self
                .max_attempts
                .ok_or_else(|| missing_field("max_attempts"))?,
            seed: self.seed.ok_or_else(|| missing_field("seed"))?,
            error_on_failure: self
                .error_on_failure
                .ok_or_else(|| missing_field("error_on_failure"))?,
        })
    }
}
