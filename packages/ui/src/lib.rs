//! This crate contains all UI for the resume site.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const RESUME_CSS: Asset = asset!("/assets/resume.css");

mod browser;
pub use browser::{location_fragment, prefers_dark, prefers_reduced_motion};

mod storage;
pub use storage::make_theme_store;

mod loader;
pub use loader::load_resume;

mod theme;
pub use theme::{apply_theme, use_theme_provider, ThemeSignal, ThemeToggle};

mod reveal;
pub use reveal::{use_reveal_class, use_reveal_observer, RevealSignal};

mod active_nav;
pub use active_nav::{use_active_nav_observer, ActiveNavSignal};

mod print;
pub use print::{use_print_bridge, PrintButton, PrintState};

mod actions;
pub use actions::{CopyEmailButton, LiveRegion, LiveRegionSignal};

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod experience;
pub use experience::{Experience, RoleCard};

mod contact;
pub use contact::Contact;

mod footer;
pub use footer::Footer;

mod page;
pub use page::{LoadError, ResumePage, ResumeView, SkipLink};

/// Encode `s` as a JavaScript string literal for inline scripts.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("content/resume.json"), "\"content/resume.json\"");
        assert_eq!(js_string("it's \"quoted\""), "\"it's \\\"quoted\\\"\"");
    }
}
