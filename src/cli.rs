use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, RosterArgs};

#[derive(Parser)]
#[command(
    name = "gift-ring",
    about = "🎁 Arrange gift exchange participants into a single hand-off ring",
    long_about = "gift-ring draws one closed gift-giving ring (A gives to B, B to C, ... and the \
                  last back to A) such that no excluded pair and no two members of the same \
                  family ever sit next to each other in the ring.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw a gift ring
    ///
    /// Shuffles the participants until no excluded pair or family pair is
    /// adjacent in the ring, then prints who gives to whom.
    #[command(
        long_about = "Draw a gift ring for the given participants. Each attempt shuffles every \
                      participant into a fresh random order and rejects it if any excluded pair \
                      (including every pair within a family) would give to or receive from each \
                      other. The search stops at the first valid ring, or reports that none was \
                      found once the attempt budget is spent. Running out of attempts does not \
                      prove that no ring exists."
    )]
    Draw {
        #[command(flatten)]
        roster: RosterArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Number of shuffles to try before giving up
        #[arg(long, value_name = "COUNT", env = "GIFT_RING_MAX_ATTEMPTS")]
        max_attempts: Option<usize>,

        /// Seed for a reproducible draw
        #[arg(long, value_name = "SEED", env = "GIFT_RING_SEED")]
        seed: Option<u64>,

        /// Exit with error code if no ring was found
        #[arg(long, env = "GIFT_RING_ERROR_ON_FAILURE")]
        error_on_failure: bool,
    },

    /// List every pair that may not sit side by side
    ///
    /// Shows the explicit exclusions together with the pairs implied by
    /// family membership.
    #[command(
        long_about = "Print the effective exclusion set used by the draw: every explicit \
                      exclusion plus every pair of distinct members within each family. Each \
                      pair is listed once, annotated with where it came from."
    )]
    Exclusions {
        #[command(flatten)]
        roster: RosterArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Check an existing gift ring against the roster
    ///
    /// Reports missing, unknown or repeated participants and every excluded
    /// pair that sits side by side.
    #[command(
        long_about = "Verify a gift ring given in order (the last participant gives to the \
                      first). The ring must name every participant exactly once and must not \
                      place any excluded pair or family pair next to each other."
    )]
    Verify {
        /// Ring order, comma separated
        #[arg(
            long,
            required = true,
            value_delimiter = ',',
            value_name = "NAMES",
            env = "GIFT_RING_CHAIN"
        )]
        chain: Vec<String>,

        #[command(flatten)]
        roster: RosterArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_draw() {
        let cli = Cli::try_parse_from([
            "gift-ring",
            "draw",
            "Theo",
            "Els",
            "Nico",
            "--exclude",
            "Theo:Els",
            "--family",
            "Kids=Els,Nico",
            "--max-attempts",
            "50",
            "--seed",
            "9",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Draw {
                roster,
                format,
                max_attempts,
                seed,
                error_on_failure,
            } => {
                assert_eq!(roster.names, vec!["Theo", "Els", "Nico"]);
                assert_eq!(roster.exclude, vec!["Theo:Els"]);
                assert_eq!(roster.family, vec!["Kids=Els,Nico"]);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(max_attempts, Some(50));
                assert_eq!(seed, Some(9));
                assert!(!error_on_failure);
            }
            _ => panic!("Expected Draw command"),
        }
    }

    #[test]
    fn test_parse_verify_chain() {
        let cli = Cli::try_parse_from(["gift-ring", "verify", "--chain", "A,B,C", "A", "B", "C"])
            .unwrap();

        match cli.command {
            Commands::Verify { chain, roster, .. } => {
                assert_eq!(chain, vec!["A", "B", "C"]);
                assert_eq!(roster.names, vec!["A", "B", "C"]);
            }
            _ => panic!("Expected Verify command"),
        }
    }
}
