use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Traits with default methods and trait objects: how Rust does the work
/// inheritance hierarchies do elsewhere.
pub struct TraitsAndDispatch;

trait Pet {
    fn name(&self) -> &str;

    fn age(&self) -> u32;

    fn speak(&self) -> String;

    // Default method, shared by every implementor.
    fn describe(&self) -> String {
        format!("{} is {} years old", self.name(), self.age())
    }
}

struct Dog {
    name: String,
    age: u32,
    breed: String,
}

struct Cat {
    name: String,
    age: u32,
    indoor: bool,
}

impl Pet for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn speak(&self) -> String {
        format!("{} says Woof!", self.name)
    }
}

impl Pet for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn speak(&self) -> String {
        format!("{} says Meow!", self.name)
    }
}

trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

struct Rectangle {
    width: f64,
    height: f64,
}

struct Circle {
    radius: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

#[async_trait]
impl Lesson for TraitsAndDispatch {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "traits-and-dispatch",
            level: Level::Intermediate,
            summary: "traits, default methods and dynamic dispatch",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let dog = Dog {
            name: "Buddy".to_string(),
            age: 5,
            breed: "Golden Retriever".to_string(),
        };
        let cat = Cat {
            name: "Whiskers".to_string(),
            age: 3,
            indoor: true,
        };

        writeln!(out, "{}", dog.describe())?;
        writeln!(out, "{}", dog.speak())?;
        writeln!(out, "Breed: {}", dog.breed)?;
        writeln!(out, "{}", cat.describe())?;
        writeln!(out, "{}", cat.speak())?;
        writeln!(out, "Indoor cat: {}", cat.indoor)?;

        // Dynamic dispatch: one vec, many concrete types.
        writeln!(out, "Pet concert:")?;
        let pets: Vec<Box<dyn Pet>> = vec![
            Box::new(Dog {
                name: "Rex".to_string(),
                age: 4,
                breed: "German Shepherd".to_string(),
            }),
            Box::new(Cat {
                name: "Luna".to_string(),
                age: 2,
                indoor: false,
            }),
            Box::new(Dog {
                name: "Max".to_string(),
                age: 7,
                breed: "Beagle".to_string(),
            }),
        ];
        for pet in &pets {
            writeln!(out, "{}", pet.speak())?;
        }

        // Static dispatch over the same trait via generics.
        fn loudest<P: Pet>(pet: &P) -> String {
            pet.speak().to_uppercase()
        }
        writeln!(out, "Loudest: {}", loudest(&dog))?;

        writeln!(out, "Shapes:")?;
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle {
                width: 5.0,
                height: 3.0,
            }),
            Box::new(Circle { radius: 4.0 }),
        ];
        for shape in &shapes {
            writeln!(
                out,
                "  area = {:.2}, perimeter = {:.2}",
                shape.area(),
                shape.perimeter()
            )?;
        }

        Ok(())
    }
}
