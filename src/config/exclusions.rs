//! Exclusions command configuration

use super::missing_field;
use crate::cli::OutputFormat;
use crate::roster::RosterSources;

/// Configuration for the exclusions command
#[derive(Debug, Clone)]
pub struct ExclusionsConfig {
    /// Where the participants, exclusions and families come from
    pub sources: RosterSources,
    /// Output format for the report
    pub format: OutputFormat,
}

impl ExclusionsConfig {
    pub fn builder() -> ExclusionsConfigBuilder {
        ExclusionsConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ExclusionsConfigBuilder {
    sources: Option<RosterSources>,
    format: Option<OutputFormat>,
}

impl ExclusionsConfigBuilder {
    pub fn with_sources(mut self, sources: RosterSources) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for ExclusionsConfigBuilder {
    type Config = ExclusionsConfig;

    fn build(self) -> Result<Self::Config, crate::error::GiftRingError> {
        Ok(ExclusionsConfig {
            sources: self.sources.ok_or_else(|| missing_field("sources"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}
