use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Derive macros as the boilerplate killer: Debug, Clone, PartialEq, Default,
/// ordering, and serde round-trips.
pub struct DerivedStructs;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Book {
    title: String,
    author: String,
    year: u32,
    pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Team {
    name: String,
    members: Vec<String>,
    score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Student {
    grade: u32,
    name: &'static str,
}

#[async_trait]
impl Lesson for DerivedStructs {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "derived-structs",
            level: Level::Intermediate,
            summary: "derive macros: Debug, Clone, Default, Ord and serde",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Derived Debug and PartialEq ===")?;
        let p1 = Point { x: 3.0, y: 4.0 };
        let p2 = Point { x: 3.0, y: 4.0 };
        writeln!(out, "Point: {:?}", p1)?;
        writeln!(out, "p1 == p2 is {}", p1 == p2)?;

        writeln!(out, "=== Default ===")?;
        let mut team = Team {
            name: "Rustaceans".to_string(),
            ..Team::default()
        };
        team.members.push("Alice".to_string());
        team.members.push("Bob".to_string());
        writeln!(out, "Team: {:?}", team)?;

        // Struct update syntax copies the rest from another value.
        let next_season = Team {
            score: 10,
            ..team.clone()
        };
        writeln!(out, "Next season: {:?}", next_season)?;

        writeln!(out, "=== Derived ordering ===")?;
        let mut students = [
            Student {
                name: "Alice",
                grade: 85,
            },
            Student {
                name: "Bob",
                grade: 92,
            },
            Student {
                name: "Charlie",
                grade: 78,
            },
        ];
        students.sort_by(|a, b| b.cmp(a));
        writeln!(out, "Sorted by grade, highest first:")?;
        for s in &students {
            writeln!(out, "  {:?}", s)?;
        }

        writeln!(out, "=== serde round-trip ===")?;
        let book = Book {
            title: "Rust Mastery".to_string(),
            author: "Jane Doe".to_string(),
            year: 2024,
            pages: 350,
        };
        let json = serde_json::to_string(&book)?;
        writeln!(out, "As JSON: {}", json)?;

        let parsed: Book = serde_json::from_str(&json)?;
        writeln!(out, "Round-trips cleanly: {}", parsed == book)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_serde_round_trip() {
        let book = Book {
            title: "t".to_string(),
            author: "a".to_string(),
            year: 2020,
            pages: 1,
        };
        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }
}
