use std::collections::HashMap;
use crate::error::StorageError;
use crate::utils::{ PreferenceStore, PresentationScope, Theme };
use crate::utils::presentation::{ stale_theme_classes, theme_class_changes };

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that is present but refuses every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Mirrors a body class list. Starts with one unrelated class the theme
/// logic must leave alone.
#[derive(Clone, Debug)]
pub struct RecordingScope {
    pub classes: Vec<String>,
    pub applied: Vec<Theme>,
}

impl Default for RecordingScope {
    fn default() -> Self {
        Self {
            classes: vec!["menu-open".to_string()],
            applied: Vec::new(),
        }
    }
}

impl RecordingScope {
    pub fn theme_tags(&self) -> Vec<String> {
        stale_theme_classes(self.classes.iter().map(String::as_str))
    }
}

impl PresentationScope for RecordingScope {
    fn apply_theme(&mut self, theme: Theme) {
        let changes = theme_class_changes(self.classes.iter().map(String::as_str), theme);
        self.classes.retain(|c| !changes.remove.contains(c));
        self.classes.extend(changes.add);
        self.applied.push(theme);
    }

    fn current_theme_tag(&self) -> Option<String> {
        self.theme_tags().into_iter().next()
    }
}
