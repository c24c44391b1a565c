//! Verify command configuration

use super::missing_field;
use crate::cli::OutputFormat;
use crate::roster::RosterSources;

/// Configuration for the verify command
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Ring to check, in giving order
    pub chain: Vec<String>,
    /// Where the participants, exclusions and families come from
    pub sources: RosterSources,
    /// Output format for the report
    pub format: OutputFormat,
}

impl VerifyConfig {
    pub fn builder() -> VerifyConfigBuilder {
        VerifyConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct VerifyConfigBuilder {
    chain: Option<Vec<String>>,
    sources: Option<RosterSources>,
    format: Option<OutputFormat>,
}

impl VerifyConfigBuilder {
    pub fn with_chain(mut self, chain: Vec<String>) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn with_sources(mut self, sources: RosterSources) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for VerifyConfigBuilder {
    type Config = VerifyConfig;

    fn build(self) -> Result<Self::Config, crate::error::GiftRingError> {
        let chain: Vec<String> = self
            .chain
            .ok_or_else(|| missing_field("chain"))?
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if chain.is_empty() {
            return Err(crate::error::GiftRingError::ConfigurationError {
                message: "The ring to verify is empty".to_string(),
            });
        }

        Ok(VerifyConfig {
            chain,
            sources: self.sources.ok_or_else(|| missing_field("sources"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
        })
    }
}
