use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// `Vec`, `for` loops and a first taste of map/collect.
pub struct VectorsAndLoops;

#[async_trait]
impl Lesson for VectorsAndLoops {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "vectors-and-loops",
            level: Level::Basics,
            summary: "Vec, for loops and map/collect",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let fruits = vec!["apple", "banana", "cherry"];
        for fruit in &fruits {
            writeln!(out, "Fruit: {}", fruit)?;
        }

        let numbers = [1, 2, 3, 4, 5];
        let squares: Vec<i32> = numbers.iter().map(|n| n * n).collect();
        writeln!(out, "Squares: {:?}", squares)?;

        // Enumerate gives the index for free.
        for (i, fruit) in fruits.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, fruit)?;
        }

        Ok(())
    }
}
