pub mod registry;
pub mod runner;

pub use registry::LessonRegistry;
pub use runner::JournalEngine;
