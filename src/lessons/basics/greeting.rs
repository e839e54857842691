use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// The first entry in the journal: a program that prints one line.
pub struct Greeting;

#[async_trait]
impl Lesson for Greeting {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "greeting",
            level: Level::Basics,
            summary: "println! and the smallest possible program",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "Hello from the Rust learning journal!")?;
        Ok(())
    }
}
