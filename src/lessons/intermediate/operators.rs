use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Operator overloading through std::ops, plus Display/Debug, ordering and
/// hashing: the traits behind the syntax.
pub struct Operators;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Person {
    // Field order drives the derived ordering: age first.
    age: u32,
    name: &'static str,
}

struct Deck {
    cards: Vec<String>,
}

impl Deck {
    fn new() -> Self {
        let suits = ["Hearts", "Diamonds", "Clubs", "Spades"];
        let ranks = [
            "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
        ];
        let cards = suits
            .into_iter()
            .flat_map(|suit| ranks.into_iter().map(move |rank| format!("{} of {}", rank, suit)))
            .collect();
        Self { cards }
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn contains(&self, card: &str) -> bool {
        self.cards.iter().any(|c| c == card)
    }
}

impl Index<usize> for Deck {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.cards[index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
}

#[async_trait]
impl Lesson for Operators {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "operators",
            level: Level::Intermediate,
            summary: "std::ops overloading, Display, ordering and hashing",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Arithmetic via std::ops ===")?;
        let v1 = Vector2::new(3.0, 4.0);
        let v2 = Vector2::new(1.0, 2.0);
        writeln!(out, "v1 + v2 = {}", v1 + v2)?;
        writeln!(out, "v1 - v2 = {}", v1 - v2)?;
        writeln!(out, "v1 * 2 = {}", v1 * 2.0)?;
        writeln!(out, "-v1 = {}", -v1)?;
        writeln!(out, "|v1| = {}", v1.magnitude())?;

        writeln!(out, "=== Display vs Debug ===")?;
        writeln!(out, "Display: {}", v1)?;
        writeln!(out, "Debug: {:?}", v1)?;

        writeln!(out, "=== Ordering ===")?;
        let mut people = [
            Person {
                name: "Alice",
                age: 30,
            },
            Person {
                name: "Bob",
                age: 25,
            },
            Person {
                name: "Charlie",
                age: 30,
            },
        ];
        writeln!(out, "alice > bob: {}", people[0] > people[1])?;
        people.sort();
        writeln!(out, "Sorted by (age, name): {:?}", people)?;

        writeln!(out, "=== Index ===")?;
        let deck = Deck::new();
        writeln!(out, "Deck length: {}", deck.len())?;
        writeln!(out, "First card: {}", deck[0])?;
        writeln!(out, "'A of Spades' in deck: {}", deck.contains("A of Spades"))?;

        writeln!(out, "=== Hash + Eq in a set ===")?;
        let colors: HashSet<Color> = [
            Color { r: 255, g: 0, b: 0 },
            Color { r: 0, g: 255, b: 0 },
            Color { r: 255, g: 0, b: 0 },
        ]
        .into_iter()
        .collect();
        let mut colors: Vec<Color> = colors.into_iter().collect();
        colors.sort();
        writeln!(out, "Distinct colors: {:?}", colors)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let sum = Vector2::new(3.0, 4.0) + Vector2::new(1.0, 2.0);
        assert_eq!(sum, Vector2::new(4.0, 6.0));
        assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_deck_has_52_cards() {
        assert_eq!(Deck::new().len(), 52);
    }
}
