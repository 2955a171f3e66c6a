//! Render-time projections of the view model.
//!
//! Components stay declarative; every decision about *what* appears (name
//! emphasis, collapsible vs. static roles, derived navigation, reveal keys)
//! is made here so it can be tested without a DOM.

use crate::config::SectionsConfig;
use crate::view_model::{NavItem, ResumeViewModel, RoleView};

/// Section element ids used as nav targets and observer hooks.
pub const HERO_ID: &str = "top";
pub const EXPERIENCE_ID: &str = "experience";
pub const CONTACT_ID: &str = "contact";

/// The person's name split for display: `lead` plain, `emphasis` styled,
/// `tail` plain again.
#[derive(Clone, Debug, PartialEq)]
pub struct NameParts {
    pub lead: String,
    pub emphasis: Option<String>,
    pub tail: String,
}

/// Emphasise the second word of the name when there is one.
pub fn split_name(name: &str) -> NameParts {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [first, second, rest @ ..] => NameParts {
            lead: first.to_string(),
            emphasis: Some(second.to_string()),
            tail: rest.join(" "),
        },
        _ => NameParts {
            lead: name.to_string(),
            emphasis: None,
            tail: String::new(),
        },
    }
}

/// How one experience entry is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleBlock {
    /// Summary only, cannot be expanded.
    Static,
    Collapsible { initially_open: bool },
}

impl RoleBlock {
    pub fn is_collapsible(&self) -> bool {
        matches!(self, RoleBlock::Collapsible { .. })
    }
}

/// One block per role. Only the first collapsible role starts open.
pub fn role_blocks(roles: &[RoleView]) -> Vec<RoleBlock> {
    let mut first = true;
    roles
        .iter()
        .map(|role| {
            if !role.has_body() {
                return RoleBlock::Static;
            }
            let initially_open = first;
            first = false;
            RoleBlock::Collapsible { initially_open }
        })
        .collect()
}

/// Stable key for a role's reveal hook and `data-role` attribute.
pub fn role_key(index: usize) -> String {
    format!("role-{index}")
}

/// Navigation links: the document's own list when it has one, otherwise one
/// link per enabled section.
pub fn nav_entries(vm: &ResumeViewModel, sections: &SectionsConfig) -> Vec<NavItem> {
    if !vm.nav.is_empty() {
        return vm.nav.clone();
    }
    let mut entries = Vec::new();
    if sections.experience {
        entries.push(NavItem {
            id: EXPERIENCE_ID.to_string(),
            label: vm.sections.experience.title.clone(),
        });
    }
    if sections.contact {
        entries.push(NavItem {
            id: CONTACT_ID.to_string(),
            label: vm.sections.contact.title.clone(),
        });
    }
    entries
}

/// Every element that fades in on scroll, in page order.
pub fn reveal_keys(vm: &ResumeViewModel, sections: &SectionsConfig) -> Vec<String> {
    let mut keys = Vec::new();
    if sections.hero {
        keys.push("hero".to_string());
    }
    if sections.experience {
        keys.push(EXPERIENCE_ID.to_string());
        keys.extend((0..vm.experience.len()).map(role_key));
    }
    if sections.contact {
        keys.push(CONTACT_ID.to_string());
    }
    keys
}
