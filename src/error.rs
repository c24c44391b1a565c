use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid roster syntax in '{file}'")]
#[diagnostic(
    code(gift_ring::roster_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct RosterParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum GiftRingError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(gift_ring::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    RosterParseError(Box<RosterParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(gift_ring::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(gift_ring::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(gift_ring::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(gift_ring::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("A gift ring needs at least 2 participants, got {count}")]
    #[diagnostic(
        code(gift_ring::too_few_participants),
        help("Add more participants to the exchange")
    )]
    TooFewParticipants { count: usize },

    #[error("Participant '{name}' is listed more than once")]
    #[diagnostic(
        code(gift_ring::duplicate_participant),
        help("Participant names must be unique; rename one of them")
    )]
    DuplicateParticipant { name: String },

    #[error("Unknown participant '{name}' referenced by {context}")]
    #[diagnostic(
        code(gift_ring::unknown_participant),
        help("Every excluded pair and family member must also be a participant")
    )]
    UnknownParticipant { name: String, context: String },

    #[error("Participant '{name}' cannot be excluded from themselves")]
    #[diagnostic(
        code(gift_ring::self_constraint),
        help("An exclusion needs two different participants")
    )]
    SelfConstraint { name: String },
}
