use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Private fields behind validating accessors and computed values: what
/// property getters and setters become in Rust.
pub struct Accessors;

struct CircleShape {
    radius: f64,
}

impl CircleShape {
    fn new(radius: f64) -> Option<Self> {
        (radius >= 0.0).then_some(Self { radius })
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn set_radius(&mut self, value: f64) -> std::result::Result<(), String> {
        if value < 0.0 {
            return Err(format!("radius cannot be negative, got {}", value));
        }
        self.radius = value;
        Ok(())
    }

    // Computed values are plain methods.
    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

struct Profile {
    name: String,
    age: u32,
}

impl Profile {
    fn new(name: &str, age: u32) -> std::result::Result<Self, String> {
        if name.trim().is_empty() {
            return Err("name cannot be empty".to_string());
        }
        if age > 150 {
            return Err(format!("age {} is out of range", age));
        }
        // Normalization happens once, at the boundary.
        let mut chars = name.trim().chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        Ok(Self { name, age })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

#[async_trait]
impl Lesson for Accessors {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "accessors",
            level: Level::Intermediate,
            summary: "validating getters/setters and computed values",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(out, "=== Accessors with validation ===")?;
        let mut circle = match CircleShape::new(5.0) {
            Some(c) => c,
            None => unreachable!("5.0 is a valid radius"),
        };
        writeln!(out, "Radius: {}", circle.radius())?;
        writeln!(out, "Diameter: {}", circle.diameter())?;
        writeln!(out, "Area: {:.2}", circle.area())?;

        match circle.set_radius(10.0) {
            Ok(()) => writeln!(out, "New radius: {}", circle.radius())?,
            Err(e) => writeln!(out, "Rejected: {}", e)?,
        }

        match circle.set_radius(-1.0) {
            Ok(()) => writeln!(out, "New radius: {}", circle.radius())?,
            Err(e) => writeln!(out, "Rejected: {}", e)?,
        }

        writeln!(out, "=== Normalizing constructor ===")?;
        match Profile::new("  alice  ", 25) {
            Ok(profile) => {
                writeln!(out, "Name: {}", profile.name())?;
                writeln!(out, "Is adult: {}", profile.is_adult())?;
            }
            Err(e) => writeln!(out, "Rejected: {}", e)?,
        }

        match Profile::new("", 25) {
            Ok(_) => writeln!(out, "Unexpectedly accepted")?,
            Err(e) => writeln!(out, "Rejected empty name: {}", e)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_radius_is_rejected() {
        assert!(CircleShape::new(-1.0).is_none());

        let mut circle = CircleShape::new(2.0).unwrap();
        assert!(circle.set_radius(-3.0).is_err());
        assert_eq!(circle.radius(), 2.0);
    }

    #[test]
    fn test_profile_normalizes_name() {
        let profile = Profile::new("  alice  ", 30).unwrap();
        assert_eq!(profile.name(), "Alice");
        assert!(profile.is_adult());
    }
}
