use crate::domain::model::Level;
use crate::domain::ports::SelectionProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-lessons")]
#[command(about = "A runnable journal of small Rust lessons, one topic per module")]
pub struct CliConfig {
    /// Lessons to run, in order. Empty runs the whole journal.
    #[arg(long, value_delimiter = ',')]
    pub lessons: Vec<String>,

    /// Only run lessons of this level (basics, intermediate, advanced)
    #[arg(long)]
    pub level: Option<String>,

    /// List the catalog instead of running anything
    #[arg(long)]
    pub list: bool,

    /// Catalog listing format: text or json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Print per-lesson wall time after the run
    #[arg(long)]
    pub timing: bool,

    /// Keep going when a lesson fails
    #[arg(long)]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log CPU/memory stats between lessons
    #[arg(long)]
    pub monitor: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("format", &self.format, &["text", "json"])?;
        validation::validate_lesson_names("lessons", &self.lessons)?;

        if let Some(level) = &self.level {
            level.parse::<Level>()?;
        }

        Ok(())
    }
}

impl SelectionProvider for CliConfig {
    fn lessons(&self) -> &[String] {
        &self.lessons
    }

    fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    fn stop_on_error(&self) -> bool {
        !self.keep_going
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            lessons: vec![],
            level: None,
            list: false,
            format: "text".to_string(),
            timing: false,
            keep_going: false,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_bad_format_is_rejected() {
        let mut config = base_config();
        config.format = "yaml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let mut config = base_config();
        config.level = Some("expert".to_string());
        assert!(config.validate().is_err());

        config.level = Some("Intermediate".to_string());
        assert!(config.validate().is_ok());
    }
}
