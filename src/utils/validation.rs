use crate::utils::error::{JournalError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(JournalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(JournalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(JournalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();
    if !allowed_set.contains(value) {
        return Err(JournalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_lesson_names(field_name: &str, names: &[String]) -> Result<()> {
    for name in names {
        validate_non_empty_string(field_name, name)?;
        if name.chars().any(|c| c.is_whitespace()) {
            return Err(JournalError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Lesson names are kebab-case and contain no whitespace".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("format", "text").is_ok());
        assert!(validate_non_empty_string("format", "").is_err());
        assert!(validate_non_empty_string("format", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "playlist.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("format", "yaml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_lesson_names() {
        let names = vec!["greeting".to_string(), "iterator-adapters".to_string()];
        assert!(validate_lesson_names("lessons", &names).is_ok());

        let bad = vec!["iterator adapters".to_string()];
        assert!(validate_lesson_names("lessons", &bad).is_err());
    }
}
