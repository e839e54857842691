use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Structs with fields plus an impl block: Rust's answer to a simple class.
pub struct StructsAndMethods;

struct Animal {
    name: String,
}

impl Animal {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn speak(&self) -> String {
        format!("{} says hello!", self.name)
    }
}

#[async_trait]
impl Lesson for StructsAndMethods {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "structs-and-methods",
            level: Level::Basics,
            summary: "a struct with a field and an impl block",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let dog = Animal::new("Buddy");
        writeln!(out, "{}", dog.speak())?;

        // Methods taking &self borrow; the value stays usable afterwards.
        writeln!(out, "The animal is still named {}", dog.name)?;
        Ok(())
    }
}
