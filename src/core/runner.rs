use crate::core::registry::LessonRegistry;
use crate::domain::model::{LessonRun, RunReport};
use crate::domain::ports::{Lesson, SelectionProvider};
use crate::utils::error::{JournalError, Result};
use crate::utils::monitor::RunMonitor;
use std::time::Instant;

/// Runs a selection of lessons and collects their console text. The engine is
/// delivery plumbing only; lessons stay ignorant of it and of each other.
pub struct JournalEngine {
    registry: LessonRegistry,
    monitor: RunMonitor,
}

impl JournalEngine {
    pub fn new(registry: LessonRegistry) -> Self {
        Self {
            registry,
            monitor: RunMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(registry: LessonRegistry, monitor_enabled: bool) -> Self {
        Self {
            registry,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub fn registry(&self) -> &LessonRegistry {
        &self.registry
    }

    /// Run one lesson, capturing its output instead of streaming it, so the
    /// caller decides how to present it and tests can assert on the bytes.
    pub async fn run_lesson(&self, lesson: &dyn Lesson) -> Result<LessonRun> {
        let info = lesson.info();
        tracing::info!("📖 Running lesson '{}' ({})", info.name, info.level);

        let mut captured: Vec<u8> = Vec::new();
        let started = Instant::now();
        let outcome = lesson.run(&mut captured).await;
        let elapsed = started.elapsed();

        let output = String::from_utf8_lossy(&captured).into_owned();
        match outcome {
            Ok(()) => Ok(LessonRun::succeeded(&info, output, elapsed)),
            Err(e) => {
                tracing::error!("❌ Lesson '{}' failed: {}", info.name, e);
                Ok(LessonRun::failed(&info, output, elapsed, e.to_string()))
            }
        }
    }

    pub async fn run(&self, selection: &dyn SelectionProvider) -> Result<RunReport> {
        let lessons = self.select(selection)?;
        tracing::info!("Journal run starting with {} lesson(s)", lessons.len());

        let mut report = RunReport::new();
        for lesson in lessons {
            let name = lesson.info().name;
            self.monitor.log_lesson(name);

            let run = self.run_lesson(lesson).await?;
            if !run.ok && selection.stop_on_error() {
                let message = run.error.clone().unwrap_or_else(|| "unknown".to_string());
                report.runs.push(run);
                self.monitor.log_final();
                return Err(JournalError::LessonError {
                    name: name.to_string(),
                    message,
                });
            }
            report.runs.push(run);
        }

        self.monitor.log_final();
        tracing::info!(
            "Journal run finished: {} completed, {} failed",
            report.completed(),
            report.failed()
        );
        Ok(report)
    }

    /// Resolve a selection against the catalog. Explicit names win; otherwise
    /// the optional level filter is applied to the full reading order.
    fn select(&self, selection: &dyn SelectionProvider) -> Result<Vec<&dyn Lesson>> {
        if !selection.lessons().is_empty() {
            return selection
                .lessons()
                .iter()
                .map(|name| self.registry.get(name))
                .collect();
        }

        match selection.level() {
            Some(level) => Ok(self.registry.by_level(level.parse()?)),
            None => Ok(self.registry.iter().collect()),
        }
    }
}
