use content::layout::{role_blocks, role_key, RoleBlock};
use content::view_model::{ExperienceSection, RoleHeadings, RoleView};
use dioxus::prelude::*;

use crate::{use_reveal_class, PrintState};

#[component]
pub fn Experience(section: ExperienceSection, roles: Vec<RoleView>) -> Element {
    let reveal = use_reveal_class("experience");
    let blocks = role_blocks(&roles);

    rsx! {
        section {
            id: "experience",
            class: "section {reveal}",
            "data-reveal": "experience",
            header {
                class: "section-header",
                if !section.kicker.is_empty() {
                    p { class: "section-kicker", "{section.kicker}" }
                }
                h2 { "{section.title}" }
            }
            div {
                class: "roles",
                for (index, (role, block)) in roles.into_iter().zip(blocks).enumerate() {
                    RoleCard {
                        key: "{index}",
                        index,
                        role,
                        block,
                        headings: section.headings.clone(),
                    }
                }
            }
        }
    }
}

#[component]
pub fn RoleCard(index: usize, role: RoleView, block: RoleBlock, headings: RoleHeadings) -> Element {
    let key = role_key(index);
    let reveal = use_reveal_class(&key);

    match block {
        RoleBlock::Static => rsx! {
            article {
                class: "role role--static {reveal}",
                "data-reveal": "{key}",
                RoleSummary { role }
            }
        },
        RoleBlock::Collapsible { .. } => rsx! {
            CollapsibleRole { index, role, headings, reveal_key: key, reveal_class: reveal }
        },
    }
}

#[component]
fn CollapsibleRole(
    index: usize,
    role: RoleView,
    headings: RoleHeadings,
    reveal_key: String,
    reveal_class: &'static str,
) -> Element {
    let state = use_context::<PrintState>();
    let mut disclosures = state.disclosures;
    let open = disclosures.read().is_open(index);

    rsx! {
        details {
            class: "role role--collapsible {reveal_class}",
            "data-reveal": "{reveal_key}",
            "data-role": "{index}",
            open: open,
            summary {
                onclick: move |evt| {
                    evt.prevent_default();
                    disclosures.write().toggle(index);
                },
                RoleSummary { role: role.clone() }
            }
            div {
                class: "role-body",
                if !role.scope.is_empty() {
                    h4 { "{headings.scope}" }
                    p { class: "role-scope", "{role.scope}" }
                }
                if !role.highlights.is_empty() {
                    h4 { "{headings.highlights}" }
                    ul {
                        class: "role-highlights",
                        for (i, item) in role.highlights.iter().enumerate() {
                            li { key: "{i}", "{item}" }
                        }
                    }
                }
                if !role.tech.is_empty() {
                    h4 { "{headings.tech}" }
                    p {
                        class: "role-tech",
                        for (i, tag) in tech_tags(&role.tech).into_iter().enumerate() {
                            span { key: "{i}", class: "tag", "{tag}" }
                        }
                    }
                }
                if !role.leadership.is_empty() {
                    h4 { "{headings.leadership}" }
                    ul {
                        class: "role-leadership",
                        for (i, item) in role.leadership.iter().enumerate() {
                            li { key: "{i}", "{item}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleSummary(role: RoleView) -> Element {
    rsx! {
        div {
            class: "role-summary",
            div {
                class: "role-heading",
                h3 { class: "role-company", "{role.company}" }
                p { class: "role-title", "{role.title}" }
                if !role.subtitle.is_empty() {
                    p { class: "role-subtitle", "{role.subtitle}" }
                }
            }
            if !role.dates_label.is_empty() {
                p { class: "role-dates", "{role.dates_label}" }
            }
        }
    }
}

/// Split a tech line like `"Rust, Postgres · Kafka"` into tags.
fn tech_tags(tech: &str) -> Vec<&str> {
    tech.split([',', '·', '|'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}
