use crate::domain::model::Level;
use crate::domain::ports::SelectionProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A saved reading session: which lessons to run and how to present them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub journal: JournalMeta,
    pub run: RunConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub lessons: Option<Vec<String>>,
    pub level: Option<String>,
    pub stop_on_error: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub timing: Option<bool>,
    pub headers: Option<bool>,
}

impl Playlist {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let playlist: Playlist = toml::from_str(raw)?;
        Ok(playlist)
    }

    pub fn timing(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.timing)
            .unwrap_or(false)
    }

    pub fn headers(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.headers)
            .unwrap_or(true)
    }
}

impl Validate for Playlist {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("journal.name", &self.journal.name)?;

        if let Some(lessons) = &self.run.lessons {
            validation::validate_lesson_names("run.lessons", lessons)?;
        }

        if let Some(level) = &self.run.level {
            level.parse::<Level>()?;
        }

        Ok(())
    }
}

impl SelectionProvider for Playlist {
    fn lessons(&self) -> &[String] {
        self.run.lessons.as_deref().unwrap_or(&[])
    }

    fn level(&self) -> Option<&str> {
        self.run.level.as_deref()
    }

    fn stop_on_error(&self) -> bool {
        self.run.stop_on_error.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[journal]
name = "evening session"
description = "iterators refresher"

[run]
lessons = ["iterators", "iterator-adapters"]
stop_on_error = false

[output]
timing = true
"#;

    #[test]
    fn test_parse_and_validate() {
        let playlist = Playlist::from_toml(SAMPLE).unwrap();
        assert!(playlist.validate().is_ok());
        assert_eq!(playlist.journal.name, "evening session");
        assert_eq!(playlist.lessons().len(), 2);
        assert!(!playlist.stop_on_error());
        assert!(playlist.timing());
        assert!(playlist.headers());
    }

    #[test]
    fn test_level_only_playlist() {
        let raw = r#"
[journal]
name = "basics pass"

[run]
level = "basics"
"#;
        let playlist = Playlist::from_toml(raw).unwrap();
        assert!(playlist.validate().is_ok());
        assert!(playlist.lessons().is_empty());
        assert_eq!(playlist.level(), Some("basics"));
    }

    #[test]
    fn test_invalid_level_fails_validation() {
        let raw = r#"
[journal]
name = "bad"

[run]
level = "wizard"
"#;
        let playlist = Playlist::from_toml(raw).unwrap();
        assert!(playlist.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        assert!(Playlist::from_toml("journal = ").is_err());
    }
}
