use std::collections::BTreeMap;
use std::path::Path;

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::error::{GiftRingError, RosterParseError};

/// On-disk roster, as written by the organiser
///
/// ```toml
/// participants = ["Theo", "Els", "Nico"]
/// exclusions   = [["Theo", "Els"]]
/// max_attempts = 1000
///
/// [families]
/// Grandparents = ["Opa", "Oma"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterFile {
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<[String; 2]>,
    #[serde(default)]
    pub families: BTreeMap<String, Vec<String>>,
    pub max_attempts: Option<usize>,
}

impl RosterFile {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        Self::parse_str(&content, &path.display().to_string())
    }

    pub fn parse_str(content: &str, file: &str) -> Result<Self> {
        let roster = toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            GiftRingError::RosterParseError(Box::new(RosterParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })?;

        Ok(roster)
    }
}

/// Read a plain names file: one participant per line, blank lines skipped
pub fn parse_names_file(path: &Path) -> Result<Vec<String>> {
    Ok(parse_names(&read_file(path)?))
}

pub fn parse_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| GiftRingError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(content)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_roster() {
        let roster = RosterFile::parse_str(
            r#"
participants = ["Theo", "Els", "Opa", "Oma"]
exclusions = [["Theo", "Els"]]
max_attempts = 250

[families]
Grandparents = ["Opa", "Oma"]
"#,
            "roster.toml",
        )
        .unwrap();

        assert_eq!(roster.participants, vec!["Theo", "Els", "Opa", "Oma"]);
        assert_eq!(
            roster.exclusions,
            vec![["Theo".to_string(), "Els".to_string()]]
        );
        assert_eq!(roster.families["Grandparents"], vec!["Opa", "Oma"]);
        assert_eq!(roster.max_attempts, Some(250));
    }

    #[test]
    fn test_parse_minimal_roster() {
        let roster = RosterFile::parse_str("participants = [\"A\", \"B\"]", "r.toml").unwrap();
        assert!(roster.exclusions.is_empty());
        assert!(roster.families.is_empty());
        assert_eq!(roster.max_attempts, None);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(RosterFile::parse_str("players = [\"A\"]", "r.toml").is_err());
    }

    #[test]
    fn test_parse_reports_syntax_error() {
        let err = RosterFile::parse_str("participants = [", "broken.toml").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = RosterFile::parse_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_parse_names() {
        let names = parse_names("Theo\n  Els  \n\n\tNico\n   \n");
        assert_eq!(names, vec!["Theo", "Els", "Nico"]);
    }

    #[test]
    fn test_parse_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("names.txt");
        fs::write(&path, "Opa\nOma\n").unwrap();

        assert_eq!(parse_names_file(&path).unwrap(), vec!["Opa", "Oma"]);
    }
}
