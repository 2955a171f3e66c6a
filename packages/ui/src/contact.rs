use content::view_model::{Buttons, ContactView, Labels, SectionHeading};
use dioxus::prelude::*;

use crate::{use_reveal_class, CopyEmailButton};

#[component]
pub fn Contact(
    heading: SectionHeading,
    contact: ContactView,
    note: String,
    labels: Labels,
    buttons: Buttons,
) -> Element {
    let reveal = use_reveal_class("contact");

    rsx! {
        section {
            id: "contact",
            class: "section {reveal}",
            "data-reveal": "contact",
            header {
                class: "section-header",
                if !heading.kicker.is_empty() {
                    p { class: "section-kicker", "{heading.kicker}" }
                }
                h2 { "{heading.title}" }
            }
            if !note.is_empty() {
                p { class: "contact-note", "{note}" }
            }
            ul {
                class: "contact-links",
                if !contact.email.is_empty() {
                    li {
                        span { class: "contact-label", "{labels.email}" }
                        a { href: "{contact.email_href}", "{contact.email}" }
                        CopyEmailButton {
                            email: contact.email.clone(),
                            label: buttons.copy_email.clone(),
                            copied: labels.copied.clone(),
                            copy_failed: labels.copy_failed.clone(),
                        }
                    }
                }
                if !contact.linkedin.is_empty() {
                    li {
                        a { href: "{contact.linkedin}", rel: "me noopener", target: "_blank", "LinkedIn" }
                    }
                }
                if !contact.github.is_empty() {
                    li {
                        a { href: "{contact.github}", rel: "me noopener", target: "_blank", "GitHub" }
                    }
                }
            }
        }
    }
}
