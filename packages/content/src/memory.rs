use std::sync::{Arc, Mutex};

use crate::theme::{Theme, ThemeStore};

/// In-memory ThemeStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, valid or not.
    pub fn with_value(token: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, theme: Theme) {
        if let Ok(mut value) = self.value.lock() {
            *value = Some(theme.as_str().to_string());
        }
    }
}

/// Stands in for storage that is disabled or throws: nothing is remembered.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledThemeStore;

#[cfg(test)]
impl ThemeStore for DisabledThemeStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _theme: Theme) {}
}
