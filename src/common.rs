//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::roster::RosterSources;

/// Roster input arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct RosterArgs {
    /// Participant names
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// TOML roster file with participants, exclusions and families
    #[arg(short, long, value_name = "FILE", env = "GIFT_RING_ROSTER")]
    pub roster: Option<PathBuf>,

    /// Text file with one participant name per line
    #[arg(long, value_name = "FILE", env = "GIFT_RING_NAMES_FILE")]
    pub names_file: Option<PathBuf>,

    /// Pair that may not sit side by side, written FIRST:SECOND
    #[arg(short = 'x', long, value_name = "FIRST:SECOND")]
    pub exclude: Vec<String>,

    /// Family whose members may not sit side by side, written NAME=A,B,C
    #[arg(long, value_name = "NAME=MEMBERS")]
    pub family: Vec<String>,

    /// Ignore the exclusions listed in the roster file
    #[arg(long)]
    pub clear_exclusions: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "GIFT_RING_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl RosterArgs {
    /// Collect the arguments into roster sources
    pub fn sources(&self) -> RosterSources {
        RosterSources {
            roster_file: self.roster.clone(),
            names_file: self.names_file.clone(),
            names: self.names.clone(),
            exclusions: self.exclude.clone(),
            families: self.family.clone(),
            clear_exclusions: self.clear_exclusions,
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GiftRingError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::GiftRingError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GiftRingError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_args_sources() {
        let args = RosterArgs {
            names: vec!["Opa".to_string(), "Oma".to_string()],
            roster: Some(PathBuf::from("roster.toml")),
            names_file: None,
            exclude: vec!["Opa:Oma".to_string()],
            family: vec![],
            clear_exclusions: true,
        };

        let sources = args.sources();
        assert_eq!(sources.roster_file, Some(PathBuf::from("roster.toml")));
        assert_eq!(sources.names, vec!["Opa", "Oma"]);
        assert_eq!(sources.exclusions, vec!["Opa:Oma"]);
        assert!(sources.families.is_empty());
        assert!(sources.clear_exclusions);
    }
}
