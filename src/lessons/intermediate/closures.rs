use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Closures and the functional trio: map, filter, fold.
pub struct Closures;

#[async_trait]
impl Lesson for Closures {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "closures",
            level: Level::Intermediate,
            summary: "closures with map, filter, fold and sort keys",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let square = |x: i32| x * x;
        let add = |a: i32, b: i32| a + b;
        writeln!(out, "Square of 5: {}", square(5))?;
        writeln!(out, "3 + 7 = {}", add(3, 7))?;

        let numbers = [1, 2, 3, 4, 5];
        let doubled: Vec<i32> = numbers.iter().map(|x| x * 2).collect();
        writeln!(out, "Doubled: {:?}", doubled)?;

        let words = ["a", "cat", "is", "sleeping", "on", "couch"];
        let long_words: Vec<&str> = words.iter().copied().filter(|w| w.len() > 3).collect();
        writeln!(out, "Words longer than 3 chars: {:?}", long_words)?;

        // fold is the workhorse reduce()-style combinator.
        let total = numbers.iter().fold(0, |acc, x| acc + x);
        writeln!(out, "Sum via fold: {}", total)?;

        let sentence = ["Rust", "is", "fast"]
            .iter()
            .fold(String::new(), |mut acc, word| {
                if !acc.is_empty() {
                    acc.push(' ');
                }
                acc.push_str(word);
                acc
            });
        writeln!(out, "Sentence: {}", sentence)?;

        // Sorting and min/max by key.
        let mut students = vec![("Alice", 85), ("Bob", 92), ("Charlie", 78)];
        students.sort_by_key(|&(_, grade)| std::cmp::Reverse(grade));
        writeln!(out, "By grade (highest first):")?;
        for (name, grade) in &students {
            writeln!(out, "  {}: {}", name, grade)?;
        }

        let people = [("Alice", 30), ("Bob", 25), ("Charlie", 35)];
        let youngest = people.iter().min_by_key(|&&(_, age)| age);
        let oldest = people.iter().max_by_key(|&&(_, age)| age);
        if let (Some(y), Some(o)) = (youngest, oldest) {
            writeln!(out, "Youngest: {}, age {}", y.0, y.1)?;
            writeln!(out, "Oldest: {}, age {}", o.0, o.1)?;
        }

        // Closures capture their environment; move hands ownership over.
        let factor = 3;
        let scale = move |x: i32| x * factor;
        let scaled: Vec<i32> = numbers.iter().map(|&x| scale(x)).collect();
        writeln!(out, "Scaled by captured factor {}: {:?}", factor, scaled)?;

        Ok(())
    }
}
