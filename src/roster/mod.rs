//! # Roster Module
//!
//! Collects everything the organiser supplies (participants, exclusions and
//! families) into one immutable snapshot that is handed to the generator.
//!
//! Input may come from a TOML roster file, a plain names file with one name
//! per line, and command-line additions. Later sources are merged into
//! earlier ones: repeated participants and repeated exclusions are kept once.
//!
//! ## Example
//!
//! ```
//! use gift_ring::roster::Roster;
//!
//! # fn main() -> miette::Result<()> {
//! let mut roster = Roster::new();
//! roster.add_participants(["Theo", "Els", "Nico", "Opa", "Oma"]);
//! roster.add_exclusion_spec("Theo:Els")?;
//! roster.add_family_spec("Grandparents=Opa,Oma")?;
//!
//! assert_eq!(roster.participants().len(), 5);
//! assert_eq!(roster.effective_constraints().len(), 2);
//! # Ok(())
//! # }
//! ```

mod roster_file;

use std::path::PathBuf;

pub use roster_file::*;

use crate::constraints::{ConstraintSet, validate_inputs};
use crate::core::{Constraint, Groups, Participant};
use crate::error::GiftRingError;

/// Where roster input comes from
#[derive(Debug, Clone, Default)]
pub struct RosterSources {
    /// TOML roster file
    pub roster_file: Option<PathBuf>,
    /// Plain text file with one participant per line
    pub names_file: Option<PathBuf>,
    /// Extra participants
    pub names: Vec<String>,
    /// Extra exclusions written as `A:B`
    pub exclusions: Vec<String>,
    /// Extra families written as `NAME=A,B,C`
    pub families: Vec<String>,
    /// Drop exclusions read from the roster file
    pub clear_exclusions: bool,
}

/// Organiser-owned input state, passed to the generator as a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
    exclusions: Vec<Constraint>,
    families: Groups,
    max_attempts: Option<usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from the roster file, names file and extra
    /// command-line entries, in that order.
    pub fn load(sources: &RosterSources) -> miette::Result<Self> {
        let mut roster = Self::new();

        if let Some(path) = &sources.roster_file {
            roster.merge_file(RosterFile::parse_file(path)?);
        }
        if sources.clear_exclusions {
            roster.clear_exclusions();
        }
        if let Some(path) = &sources.names_file {
            roster.add_participants(parse_names_file(path)?);
        }

        roster.add_participants(
            sources
                .names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty()),
        );
        for spec in &sources.exclusions {
            roster.add_exclusion_spec(spec)?;
        }
        for spec in &sources.families {
            roster.add_family_spec(spec)?;
        }

        Ok(roster)
    }

    /// Merge a parsed roster file; names are trimmed like every other source
    pub fn merge_file(&mut self, file: RosterFile) {
        self.add_participants(
            file.participants
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty()),
        );
        for [a, b] in &file.exclusions {
            self.add_exclusion(a.trim(), b.trim());
        }
        for (family, members) in file.families {
            let members = members
                .iter()
                .map(|m| m.trim())
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect();
            self.add_family(family.trim(), members);
        }
        self.set_max_attempts(file.max_attempts);
    }

    /// Every exclusion and family member must name a participant
    pub fn validate(&self) -> Result<(), GiftRingError> {
        validate_inputs(&self.participants, &self.exclusions, &self.families)?;
        Ok(())
    }

    /// Add participants, skipping any already present
    pub fn add_participants<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Participant>,
    {
        for name in names {
            let name = name.into();
            if !self.participants.contains(&name) {
                self.participants.push(name);
            }
        }
    }

    /// Add an exclusion unless the same pair (in either order) is present
    pub fn add_exclusion(&mut self, a: impl Into<Participant>, b: impl Into<Participant>) {
        let constraint = Constraint::new(a, b);
        if !self.exclusions.contains(&constraint) {
            self.exclusions.push(constraint);
        }
    }

    /// Parse `A:B` and add it as an exclusion
    pub fn add_exclusion_spec(&mut self, spec: &str) -> Result<(), GiftRingError> {
        let (a, b) = parse_exclusion(spec)?;
        self.add_exclusion(a, b);
        Ok(())
    }

    pub fn add_family(&mut self, name: impl Into<String>, members: Vec<Participant>) {
        let entry = self.families.entry(name.into()).or_default();
        for member in members {
            if !entry.contains(&member) {
                entry.push(member);
            }
        }
    }

    /// Parse `NAME=A,B,C` and add it as a family
    pub fn add_family_spec(&mut self, spec: &str) -> Result<(), GiftRingError> {
        let (name, members) = parse_family(spec)?;
        self.add_family(name, members);
        Ok(())
    }

    pub fn clear_exclusions(&mut self) {
        self.exclusions.clear();
    }

    pub fn set_max_attempts(&mut self, max_attempts: Option<usize>) {
        if max_attempts.is_some() {
            self.max_attempts = max_attempts;
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn exclusions(&self) -> &[Constraint] {
        &self.exclusions
    }

    pub fn families(&self) -> &Groups {
        &self.families
    }

    pub fn max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }

    pub fn effective_constraints(&self) -> ConstraintSet {
        ConstraintSet::expand(&self.exclusions, &self.families)
    }
}

/// Split `A:B` into its two trimmed names
pub fn parse_exclusion(spec: &str) -> Result<(String, String), GiftRingError> {
    match spec.split_once(':') {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
            Ok((a.trim().to_string(), b.trim().to_string()))
        }
        _ => Err(GiftRingError::ConfigurationError {
            message: format!("Invalid exclusion '{spec}', expected FIRST:SECOND"),
        }),
    }
}

/// Split `NAME=A,B,C` into the family name and its members
pub fn parse_family(spec: &str) -> Result<(String, Vec<String>), GiftRingError> {
    let invalid = || GiftRingError::ConfigurationError {
        message: format!("Invalid family '{spec}', expected NAME=MEMBER,MEMBER,..."),
    };

    let (name, members) = spec.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let members = members
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();

    Ok((name.to_string(), members))
}
