pub mod config;
pub mod core;
pub mod domain;
pub mod lessons;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Playlist;

pub use crate::core::registry::LessonRegistry;
pub use crate::core::runner::JournalEngine;
pub use domain::model::{Level, LessonInfo, LessonRun, RunReport};
pub use domain::ports::{Lesson, SelectionProvider};
pub use utils::error::{JournalError, Result};
