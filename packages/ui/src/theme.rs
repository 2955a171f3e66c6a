use content::theme::{initial_theme, toggle_theme};
use content::{Theme, ThemeStore};
use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

pub type ThemeSignal = Signal<Theme>;

/// Provide the theme context. Reads the stored preference once, falls back
/// to the system color scheme, and keeps `data-theme` on `<html>` in sync.
pub fn use_theme_provider(storage_key: &str) -> ThemeSignal {
    let store = crate::make_theme_store(storage_key);
    let theme: ThemeSignal = use_context_provider(move || {
        Signal::new(initial_theme(store.load().as_deref(), crate::prefers_dark()))
    });
    use_effect(move || {
        apply_theme(theme());
    });
    theme
}

/// Set `data-theme` on the root element and sync the toggle's ARIA state.
pub fn apply_theme(theme: Theme) {
    let js = format!(
        r#"(function() {{
            document.documentElement.setAttribute('data-theme', {theme_js});
            var toggle = document.querySelector('[data-action="theme-toggle"]');
            if (!toggle) return;
            toggle.setAttribute('aria-pressed', {pressed});
            toggle.setAttribute('aria-label', {label_js});
        }})();"#,
        theme_js = crate::js_string(theme.as_str()),
        pressed = crate::js_string(&theme.is_dark().to_string()),
        label_js = crate::js_string(theme.toggle_label()),
    );
    let _ = document::eval(&js);
}

#[component]
pub fn ThemeToggle(title: String, storage_key: String) -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let store = crate::make_theme_store(&storage_key);
    let current = theme();
    let pressed = current.is_dark().to_string();

    rsx! {
        button {
            class: "icon-button",
            r#type: "button",
            title: "{title}",
            "data-action": "theme-toggle",
            "aria-pressed": "{pressed}",
            "aria-label": current.toggle_label(),
            onclick: move |_| {
                let next = toggle_theme(theme(), &store);
                tracing::debug!("Theme switched to {next}");
                theme.set(next);
            },
            if current.is_dark() {
                Icon { icon: FaSun, width: 14, height: 14 }
            } else {
                Icon { icon: FaMoon, width: 14, height: 14 }
            }
        }
    }
}
