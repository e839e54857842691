use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Hand-written iterators: the Rust counterpart of generator functions.
pub struct Iterators;

/// Counts from 1 up to a limit, one `next()` at a time.
struct CountUpTo {
    current: u32,
    limit: u32,
}

impl CountUpTo {
    fn new(limit: u32) -> Self {
        Self { current: 0, limit }
    }
}

impl Iterator for CountUpTo {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.current < self.limit {
            self.current += 1;
            Some(self.current)
        } else {
            None
        }
    }
}

/// Fibonacci numbers below a limit; state lives in the struct, not a frame.
struct Fibonacci {
    current: u64,
    next: u64,
    limit: u64,
}

impl Fibonacci {
    fn below(limit: u64) -> Self {
        Self {
            current: 0,
            next: 1,
            limit,
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.current >= self.limit {
            return None;
        }
        let value = self.current;
        self.current = self.next;
        self.next = value + self.next;
        Some(value)
    }
}

#[async_trait]
impl Lesson for Iterators {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "iterators",
            level: Level::Intermediate,
            summary: "implementing Iterator by hand, from_fn and successors",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "Counting up to 5:")?;
        for n in CountUpTo::new(5) {
            writeln!(out, "{}", n)?;
        }

        let fibs: Vec<u64> = Fibonacci::below(100).collect();
        writeln!(out, "Fibonacci numbers below 100: {:?}", fibs)?;

        // Lazy evaluation: nothing runs until the iterator is consumed.
        let squares = (0..10).map(|x| x * x);
        writeln!(out, "Squares (lazy, then collected): {:?}", squares.collect::<Vec<i32>>())?;

        // Manual iteration with next().
        let mut steps = ["First", "Second", "Third"].into_iter();
        writeln!(out, "Using next():")?;
        while let Some(step) = steps.next() {
            writeln!(out, "{}", step)?;
        }

        // iter::from_fn builds an iterator out of a closure over local state.
        let mut total = 0;
        let running_totals: Vec<i32> = std::iter::from_fn(|| {
            total += 10;
            if total <= 30 {
                Some(total)
            } else {
                None
            }
        })
        .collect();
        writeln!(out, "from_fn running totals: {:?}", running_totals)?;

        // successors: each element derived from the previous one.
        let powers: Vec<u32> = std::iter::successors(Some(1u32), |&p| {
            let next = p * 2;
            (next <= 64).then_some(next)
        })
        .collect();
        writeln!(out, "Powers of two via successors: {:?}", powers)?;

        Ok(())
    }
}
