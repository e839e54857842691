use crate::domain::model::{Level, LessonInfo};
use crate::domain::ports::Lesson;
use crate::lessons;
use crate::utils::error::{JournalError, Result};

/// The journal's catalog, in reading order: basics first, advanced last.
/// The order is a suggestion for humans; no lesson depends on another.
pub struct LessonRegistry {
    lessons: Vec<Box<dyn Lesson>>,
}

impl LessonRegistry {
    pub fn built_in() -> Self {
        Self {
            lessons: lessons::catalog(),
        }
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Lesson> {
        self.lessons.iter().map(|l| l.as_ref())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Lesson> {
        self.iter()
            .find(|l| l.info().name == name)
            .ok_or_else(|| JournalError::UnknownLessonError {
                name: name.to_string(),
            })
    }

    pub fn by_level(&self, level: Level) -> Vec<&dyn Lesson> {
        self.iter().filter(|l| l.info().level == level).collect()
    }

    pub fn infos(&self) -> Vec<LessonInfo> {
        self.iter().map(|l| l.info()).collect()
    }

    /// Closest catalog name for a typo, for error messages. Prefix and
    /// substring matches are close enough for a ~20-entry catalog.
    pub fn suggest(&self, misspelled: &str) -> Option<&'static str> {
        let needle = misspelled.to_ascii_lowercase();
        self.iter()
            .map(|l| l.info().name)
            .find(|name| name.starts_with(&needle) || name.contains(&needle))
    }
}

impl Default for LessonRegistry {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let registry = LessonRegistry::built_in();
        let names: HashSet<&str> = registry.iter().map(|l| l.info().name).collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_catalog_is_in_reading_order() {
        let registry = LessonRegistry::built_in();
        let levels: Vec<Level> = registry.iter().map(|l| l.info().level).collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
    }

    #[test]
    fn test_every_level_is_represented() {
        let registry = LessonRegistry::built_in();
        for level in Level::ALL {
            assert!(
                !registry.by_level(level).is_empty(),
                "no lessons at level {}",
                level
            );
        }
    }

    #[test]
    fn test_lookup_and_suggestion() {
        let registry = LessonRegistry::built_in();
        assert!(registry.get("greeting").is_ok());
        assert!(registry.get("decorators").is_err());
        assert_eq!(registry.suggest("iter"), Some("iterators"));
    }
}
