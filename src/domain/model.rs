use crate::utils::error::JournalError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Reading order of the journal. The order here is pedagogical only; lessons
/// never depend on each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basics,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basics, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Basics => "basics",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basics" => Ok(Level::Basics),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(JournalError::UnknownLevelError {
                value: other.to_string(),
            }),
        }
    }
}

/// Static metadata a lesson announces about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonInfo {
    pub name: &'static str,
    pub level: Level,
    pub summary: &'static str,
}

/// Outcome of one lesson: captured console text plus bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct LessonRun {
    pub name: String,
    pub level: Level,
    pub output: String,
    pub duration_ms: u64,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LessonRun {
    pub fn succeeded(info: &LessonInfo, output: String, duration: Duration) -> Self {
        Self {
            name: info.name.to_string(),
            level: info.level,
            output,
            duration_ms: duration.as_millis() as u64,
            ok: true,
            error: None,
        }
    }

    pub fn failed(info: &LessonInfo, output: String, duration: Duration, error: String) -> Self {
        Self {
            name: info.name.to_string(),
            level: info.level,
            output,
            duration_ms: duration.as_millis() as u64,
            ok: false,
            error: Some(error),
        }
    }
}

/// Report for a whole journal run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub runs: Vec<LessonRun>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            runs: Vec::new(),
        }
    }

    pub fn completed(&self) -> usize {
        self.runs.iter().filter(|r| r.ok).count()
    }

    pub fn failed(&self) -> usize {
        self.runs.len() - self.completed()
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_reading_order() {
        assert!(Level::Basics < Level::Intermediate);
        assert!(Level::Intermediate < Level::Advanced);
    }
}
