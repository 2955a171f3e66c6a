//! # Site configuration — `site.toml`
//!
//! Controls where the content document lives, which page sections are
//! rendered, and how the scroll behaviors are tuned. The web binary embeds
//! the file at compile time and parses it once on start-up.
//!
//! ## Structure
//!
//! ```toml
//! [content]
//! path = "content/resume.json"
//!
//! [sections]
//! hero = true
//! experience = true
//! contact = true
//! footer = true
//!
//! [behavior]
//! exclusive_accordion = false
//! reveal_threshold = 0.08
//! reveal_root_margin = "0px 0px -10% 0px"
//! nav_root_margin = "-20% 0px -60% 0px"
//!
//! [theme]
//! storage_key = "theme"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top-level config with TOML parsing and the canonical filename. |
//! | [`ContentConfig`] | Relative path of the resume document. |
//! | [`SectionsConfig`] | Which sections are rendered. Site variants differ only here. |
//! | [`BehaviorConfig`] | Accordion mode and IntersectionObserver options. |
//! | [`ThemeConfig`] | Local storage key for the theme preference. |
//!
//! Every section is `#[serde(default)]`, so a missing or partial file is
//! equivalent to the defaults below.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Location of the content document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Path relative to the page the document is fetched from.
    #[serde(default = "default_content_path")]
    pub path: String,
}

fn default_content_path() -> String {
    "content/resume.json".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

/// Section toggles. Disabled sections are neither rendered nor listed in
/// the derived navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default = "enabled")]
    pub hero: bool,
    #[serde(default = "enabled")]
    pub experience: bool,
    #[serde(default = "enabled")]
    pub contact: bool,
    #[serde(default = "enabled")]
    pub footer: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            hero: true,
            experience: true,
            contact: true,
            footer: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Opening one role closes the others.
    #[serde(default)]
    pub exclusive_accordion: bool,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "default_reveal_root_margin")]
    pub reveal_root_margin: String,
    #[serde(default = "default_nav_root_margin")]
    pub nav_root_margin: String,
}

fn default_reveal_threshold() -> f64 {
    0.08
}

fn default_reveal_root_margin() -> String {
    "0px 0px -10% 0px".to_string()
}

fn default_nav_root_margin() -> String {
    "-20% 0px -60% 0px".to_string()
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            exclusive_accordion: false,
            reveal_threshold: default_reveal_threshold(),
            reveal_root_margin: default_reveal_root_margin(),
            nav_root_margin: default_nav_root_margin(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to defaults on malformed input.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {e}; using defaults", Self::filename());
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    #[cfg(test)]
    fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
