use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use async_trait::async_trait;
use regex::Regex;
use std::io::Write;

/// Pattern matching over text with the regex crate.
pub struct TextPatterns;

fn is_valid_email(re: &Regex, email: &str) -> bool {
    re.is_match(email)
}

#[async_trait]
impl Lesson for TextPatterns {
    fn info(&self) -> LessonInfo {
        LessonInfo {
            name: "text-patterns",
            level: Level::Intermediate,
            summary: "the regex crate: find, captures, replace, split",
        }
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let text = "The quick brown fox jumps over the lazy dog";

        writeln!(out, "=== find ===")?;
        let re = Regex::new(r"fox")?;
        if let Some(m) = re.find(text) {
            writeln!(
                out,
                "Found '{}' at position {}-{}",
                m.as_str(),
                m.start(),
                m.end()
            )?;
        }

        writeln!(out, "=== find_iter ===")?;
        let emails_text = "Contact us at support@example.com or sales@company.org";
        let re = Regex::new(r"[\w.+-]+@[\w-]+\.[a-zA-Z]+")?;
        let emails: Vec<&str> = re.find_iter(emails_text).map(|m| m.as_str()).collect();
        writeln!(out, "Found emails: {:?}", emails)?;

        writeln!(out, "=== capture groups ===")?;
        let date_text = "Event date: 2024-03-15";
        let re = Regex::new(r"(\d{4})-(\d{2})-(\d{2})")?;
        if let Some(caps) = re.captures(date_text) {
            writeln!(out, "Full match: {}", &caps[0])?;
            writeln!(out, "Year: {}", &caps[1])?;
            writeln!(out, "Month: {}", &caps[2])?;
            writeln!(out, "Day: {}", &caps[3])?;
        }

        writeln!(out, "=== named groups ===")?;
        let re = Regex::new(r"(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})")?;
        if let Some(caps) = re.captures(date_text) {
            if let (Some(year), Some(day)) = (caps.name("year"), caps.name("day")) {
                writeln!(out, "Year (named): {}", year.as_str())?;
                writeln!(out, "Day (named): {}", day.as_str())?;
            }
        }

        writeln!(out, "=== replace ===")?;
        let text = "Hello World! Hello Rust!";
        let re = Regex::new(r"Hello")?;
        writeln!(out, "Original: {}", text)?;
        writeln!(out, "After replace_all: {}", re.replace_all(text, "Hi"))?;

        // Replacement can be computed from the match.
        let re = Regex::new(r"\b\w{3}\b")?;
        let text = "The cat sat on the mat";
        let shouted = re.replace_all(text, |caps: &regex::Captures| caps[0].to_uppercase());
        writeln!(out, "3-letter words uppercased: {}", shouted)?;

        writeln!(out, "=== split ===")?;
        let re = Regex::new(r"[,;:]")?;
        let parts: Vec<&str> = re.split("apple,banana;cherry:date").collect();
        writeln!(out, "Split result: {:?}", parts)?;

        writeln!(out, "=== case-insensitive flag ===")?;
        let re = Regex::new(r"(?i)rust")?;
        let text = "Rust\nrust\nRUST";
        let matches: Vec<&str> = re.find_iter(text).map(|m| m.as_str()).collect();
        writeln!(out, "Case-insensitive matches: {:?}", matches)?;

        writeln!(out, "=== validation ===")?;
        let re = Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$")?;
        for email in ["user@example.com", "invalid.email", "test@domain.org"] {
            let status = if is_valid_email(&re, email) {
                "Valid"
            } else {
                "Invalid"
            };
            writeln!(out, "  {}: {}", email, status)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation_pattern() {
        let re = Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap();
        assert!(is_valid_email(&re, "user@example.com"));
        assert!(!is_valid_email(&re, "invalid.email"));
    }
}
