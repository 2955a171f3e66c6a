//! Light/dark theme preference.
//!
//! The current theme is explicit state: callers pass it in and get the next
//! one back. Persistence goes through an injected [`ThemeStore`], so this
//! module never touches browser storage itself.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored token. Anything but `"light"` / `"dark"` is rejected.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Accessible label for the toggle button while this theme is active.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the chosen theme is remembered between visits.
///
/// Implementations swallow their own failures: an unavailable store reads as
/// empty and ignores writes.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

/// Theme at page load: a valid stored token wins, otherwise the system
/// color-scheme preference.
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Flip the theme and persist the result.
pub fn toggle_theme(current: Theme, store: &impl ThemeStore) -> Theme {
    let next = current.toggled();
    store.save(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{DisabledThemeStore, MemoryThemeStore};

    #[test]
    fn test_stored_token_wins() {
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_invalid_token_falls_back_to_system() {
        assert_eq!(initial_theme(Some("sepia"), true), Theme::Dark);
        assert_eq!(initial_theme(Some(""), false), Theme::Light);
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryThemeStore::new();
        let next = toggle_theme(Theme::Light, &store);
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.load().as_deref(), Some("dark"));

        let next = toggle_theme(next, &store);
        assert_eq!(next, Theme::Light);
        assert_eq!(initial_theme(store.load().as_deref(), true), Theme::Light);
    }

    #[test]
    fn test_disabled_storage_degrades() {
        let store = DisabledThemeStore;
        assert_eq!(toggle_theme(Theme::Dark, &store), Theme::Light);
        assert_eq!(store.load(), None);
        assert_eq!(initial_theme(store.load().as_deref(), true), Theme::Dark);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.to_string(), "light");
        assert!(Theme::Dark.is_dark());
    }
}
