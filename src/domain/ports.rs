use crate::domain::model::LessonInfo;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// One self-contained teaching example. A lesson writes human-readable text
/// to the supplied writer and must produce identical bytes on every run so
/// golden-output tests hold. Lessons never touch each other's state.
#[async_trait]
pub trait Lesson: Send + Sync {
    fn info(&self) -> LessonInfo;

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()>;
}

/// Where a run's lesson selection comes from: CLI flags or a TOML playlist.
pub trait SelectionProvider: Send + Sync {
    /// Explicit lesson names, in the order they should run. Empty means
    /// "everything the level filter allows".
    fn lessons(&self) -> &[String];

    /// Optional level filter applied when no explicit names are given.
    fn level(&self) -> Option<&str>;

    /// Abort the run on the first failing lesson instead of recording it
    /// and moving on.
    fn stop_on_error(&self) -> bool {
        true
    }
}
