use content::view_model::{BrandView, Buttons, NavItem};
use dioxus::prelude::*;

use crate::{ActiveNavSignal, PrintButton, ThemeToggle};

#[component]
pub fn Navbar(
    brand: BrandView,
    entries: Vec<NavItem>,
    buttons: Buttons,
    storage_key: String,
) -> Element {
    let active = use_context::<ActiveNavSignal>();
    let sections = active.read();

    rsx! {
        header {
            class: "site-header",
            a {
                class: "brand",
                href: "#top",
                span { class: "brand-mark", "{brand.mark}" }
                span { class: "brand-name", "{brand.name}" }
            }
            nav {
                class: "site-nav",
                "aria-label": "Primary",
                for entry in entries {
                    a {
                        key: "{entry.id}",
                        class: if sections.is_current(&entry.id) { "nav-link is-current" } else { "nav-link" },
                        href: "#{entry.id}",
                        "aria-current": if sections.is_current(&entry.id) { Some("true") } else { None },
                        "{entry.label}"
                    }
                }
            }
            div {
                class: "site-actions",
                PrintButton { label: buttons.print.clone() }
                ThemeToggle { title: buttons.theme_toggle.clone(), storage_key }
            }
        }
    }
}
