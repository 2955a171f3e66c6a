//! Raw document → [`ResumeViewModel`].
//!
//! One fallback per field, applied here and nowhere else. A string counts
//! only when it is a JSON string that is non-empty after trimming; a list
//! counts only when it is a JSON array, and keeps its non-blank string
//! elements in order.

use serde_json::Value;

use crate::document::ResumeDocument;
use crate::view_model::{
    BrandView, Buttons, ContactView, ExperienceSection, FooterView, HeroView, Labels, MetaView,
    NavItem, ResumeViewModel, RoleHeadings, RoleView, SectionHeading, SectionsView, UiText,
};

/// Build the fully-defaulted view model. Never fails.
pub fn normalize(doc: &ResumeDocument) -> ResumeViewModel {
    let name = text_or(doc.get("/meta/name"), "Your Name");
    let role = text_or(doc.get("/meta/role"), "Role");
    let value_statement = text_or(doc.get("/meta/valueStatement"), "A short value statement.");
    let site_title =
        text(doc.get("/meta/siteTitle")).unwrap_or_else(|| format!("{name} — {role}"));
    let description =
        text(doc.get("/meta/description")).unwrap_or_else(|| value_statement.clone());

    let brand = BrandView {
        mark: text(doc.get("/brand/mark")).unwrap_or_else(|| default_mark(&name)),
        name: text(doc.get("/brand/name")).unwrap_or_else(|| role.to_uppercase()),
    };

    let meta = MetaView {
        location: text_or(doc.get("/meta/location"), ""),
        timezone: text_or(doc.get("/meta/timezone"), ""),
        name,
        role,
        value_statement,
        site_title,
        description,
    };

    let email = text_or(doc.get("/contact/email"), "");
    let contact = ContactView {
        email_href: format!("mailto:{email}"),
        email,
        linkedin: text_or(doc.get("/contact/linkedin"), ""),
        github: text_or(doc.get("/contact/github"), ""),
    };

    ResumeViewModel {
        meta,
        brand,
        ui: ui_text(doc),
        sections: sections(doc),
        contact,
        contact_note: text_or(doc.get("/contactSection/note"), ""),
        nav: nav(doc.get("/nav")),
        hero: HeroView {
            eyebrow: text_list(doc.get("/hero/eyebrow")),
            intro: text_list(doc.get("/hero/intro")),
            current: text_or(doc.get("/hero/current"), ""),
            previous: text_list(doc.get("/hero/previous")),
        },
        experience: experience(doc.get("/experience")),
        footer: FooterView {
            line1: text_or(doc.get("/footer/line1"), ""),
            line2: text_or(doc.get("/footer/line2"), ""),
        },
    }
}

/// Trimmed string if the value is a string with visible content.
fn text(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    text(value).unwrap_or_else(|| fallback.to_string())
}

fn text_list(value: Option<&Value>) -> Vec<String> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().filter_map(|item| text(Some(item))).collect(),
        None => Vec::new(),
    }
}

/// First word of the name, three characters, upper-cased.
fn default_mark(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

/// Human date range from optional `start` / `end`.
pub fn dates_label(start: Option<&Value>, end: Option<&Value>) -> String {
    match (text(start), text(end)) {
        (Some(s), Some(e)) => format!("{s}—{e}"),
        (Some(s), None) => format!("{s}—"),
        (None, Some(e)) => e,
        (None, None) => String::new(),
    }
}

fn ui_text(doc: &ResumeDocument) -> UiText {
    UiText {
        skip_to_content: text_or(doc.get("/ui/a11y/skipToContent"), "Skip to content"),
        buttons: Buttons {
            print: text_or(doc.get("/ui/buttons/print"), "Print"),
            copy_email: text_or(doc.get("/ui/buttons/copyEmail"), "Copy email"),
            theme_toggle: text_or(doc.get("/ui/buttons/themeToggle"), "Toggle theme"),
        },
        labels: Labels {
            current: text_or(doc.get("/ui/labels/current"), "Now"),
            previous: text_or(doc.get("/ui/labels/previous"), "Previously"),
            email: text_or(doc.get("/ui/labels/email"), "Email"),
            location: text_or(doc.get("/ui/labels/location"), "Based in"),
            copied: text_or(doc.get("/ui/labels/copied"), "Email copied."),
            copy_failed: text_or(doc.get("/ui/labels/copyFailed"), "Could not copy email."),
        },
    }
}

fn sections(doc: &ResumeDocument) -> SectionsView {
    SectionsView {
        experience: ExperienceSection {
            title: text_or(doc.get("/sections/experience/title"), "Experience"),
            kicker: text_or(doc.get("/sections/experience/kicker"), ""),
            headings: RoleHeadings {
                scope: text_or(doc.get("/sections/experience/headings/scope"), "Scope"),
                highlights: text_or(
                    doc.get("/sections/experience/headings/highlights"),
                    "Highlights",
                ),
                tech: text_or(doc.get("/sections/experience/headings/tech"), "Tech"),
                leadership: text_or(
                    doc.get("/sections/experience/headings/leadership"),
                    "Leadership",
                ),
            },
        },
        contact: SectionHeading {
            title: text_or(doc.get("/sections/contact/title"), "Contact"),
            kicker: text_or(doc.get("/sections/contact/kicker"), ""),
        },
    }
}

fn nav(value: Option<&Value>) -> Vec<NavItem> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            Some(NavItem {
                id: text(item.get("id"))?,
                label: text(item.get("label"))?,
            })
        })
        .collect()
}

fn experience(value: Option<&Value>) -> Vec<RoleView> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let view = role(entry);
            if view.is_none() {
                tracing::debug!("Dropping experience entry {index}: missing company or title");
            }
            view
        })
        .collect()
}

fn role(entry: &Value) -> Option<RoleView> {
    let company = text(entry.get("company"))?;
    let title = text(entry.get("title"))?;
    let dates = entry.get("dates");
    Some(RoleView {
        company,
        title,
        subtitle: text_or(entry.get("subtitle"), ""),
        dates_label: dates_label(
            dates.and_then(|d| d.get("start")),
            dates.and_then(|d| d.get("end")),
        ),
        scope: text_or(entry.get("scope"), ""),
        highlights: text_list(entry.get("highlights")),
        tech: text_or(entry.get("tech"), ""),
        leadership: text_list(entry.get("leadership")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from(value: Value) -> ResumeViewModel {
        normalize(&ResumeDocument::from_value(value))
    }

    #[test]
    fn test_empty_document_gets_every_fallback() {
        let vm = from(json!({}));
        assert_eq!(vm.meta.name, "Your Name");
        assert_eq!(vm.meta.role, "Role");
        assert_eq!(vm.meta.value_statement, "A short value statement.");
        assert_eq!(vm.meta.site_title, "Your Name — Role");
        assert_eq!(vm.meta.description, "A short value statement.");
        assert_eq!(vm.brand.mark, "YOU");
        assert_eq!(vm.brand.name, "ROLE");
        assert_eq!(vm.ui.skip_to_content, "Skip to content");
        assert_eq!(vm.sections.experience.title, "Experience");
        assert_eq!(vm.sections.contact.title, "Contact");
        assert_eq!(vm.contact.email, "");
        assert_eq!(vm.contact.email_href, "mailto:");
        assert!(vm.nav.is_empty());
        assert!(vm.hero.eyebrow.is_empty());
        assert!(vm.hero.intro.is_empty());
        assert!(vm.hero.previous.is_empty());
        assert!(vm.experience.is_empty());
    }

    #[test]
    fn test_non_object_document() {
        assert_eq!(from(json!(null)), ResumeViewModel::default());
        assert_eq!(from(json!([1, 2, 3])), ResumeViewModel::default());
        assert_eq!(from(json!("resume")), ResumeViewModel::default());
    }

    #[test]
    fn test_wrong_types_are_treated_as_absent() {
        let vm = from(json!({
            "meta": { "name": 42, "role": ["Engineer"], "valueStatement": "   " },
            "hero": { "eyebrow": "not a list", "intro": { "0": "x" } },
            "experience": { "company": "Acme" },
            "contact": { "email": false },
        }));
        assert_eq!(vm.meta.name, "Your Name");
        assert_eq!(vm.meta.role, "Role");
        assert_eq!(vm.meta.value_statement, "A short value statement.");
        assert!(vm.hero.eyebrow.is_empty());
        assert!(vm.hero.intro.is_empty());
        assert!(vm.experience.is_empty());
        assert_eq!(vm.contact.email_href, "mailto:");
    }

    #[test]
    fn test_strings_are_trimmed_and_derived_fields_follow() {
        let vm = from(json!({
            "meta": { "name": "  andrew watkins ", "role": " Staff Engineer" },
            "contact": { "email": " a@example.com " },
        }));
        assert_eq!(vm.meta.name, "andrew watkins");
        assert_eq!(vm.meta.site_title, "andrew watkins — Staff Engineer");
        assert_eq!(vm.brand.mark, "AND");
        assert_eq!(vm.brand.name, "STAFF ENGINEER");
        assert_eq!(vm.contact.email_href, "mailto:a@example.com");
    }

    #[test]
    fn test_explicit_values_win_over_fallbacks() {
        let vm = from(json!({
            "meta": { "name": "Jo", "siteTitle": "Jo's site", "description": "About Jo" },
            "brand": { "mark": "J", "name": "Studio" },
        }));
        assert_eq!(vm.meta.site_title, "Jo's site");
        assert_eq!(vm.meta.description, "About Jo");
        assert_eq!(vm.brand.mark, "J");
        assert_eq!(vm.brand.name, "Studio");
    }

    #[test]
    fn test_short_name_mark() {
        let vm = from(json!({ "meta": { "name": "Al Smith" } }));
        assert_eq!(vm.brand.mark, "AL");
    }

    #[test]
    fn test_lists_drop_blank_and_non_string_elements() {
        let vm = from(json!({
            "hero": { "intro": ["first", "", 3, "  ", null, "second"] },
        }));
        assert_eq!(vm.hero.intro, vec!["first", "second"]);
    }

    #[test]
    fn test_dates_label_cases() {
        let s = json!("2019");
        let e = json!("2023");
        let blank = json!("  ");
        assert_eq!(dates_label(Some(&s), Some(&e)), "2019—2023");
        assert_eq!(dates_label(Some(&s), None), "2019—");
        assert!(dates_label(Some(&s), Some(&blank)).ends_with('—'));
        assert_eq!(dates_label(None, Some(&e)), "2023");
        assert_eq!(dates_label(None, None), "");
        assert_eq!(dates_label(Some(&blank), Some(&blank)), "");
    }

    #[test]
    fn test_experience_requires_company_and_title() {
        let input = json!([
            { "company": "Acme", "title": "Engineer", "dates": { "start": "2020" } },
            { "company": "NoTitle" },
            { "title": "NoCompany" },
            { "company": "  ", "title": "Blank" },
            "garbage",
            { "company": "Beta", "title": "Lead", "highlights": ["Shipped", ""], "dates": { "end": "2019" } },
        ]);
        let count = input.as_array().unwrap().len();
        let vm = from(json!({ "experience": input }));
        assert!(vm.experience.len() <= count);
        assert_eq!(vm.experience.len(), 2);
        assert_eq!(vm.experience[0].company, "Acme");
        assert_eq!(vm.experience[0].dates_label, "2020—");
        assert_eq!(vm.experience[1].highlights, vec!["Shipped"]);
        assert_eq!(vm.experience[1].dates_label, "2019");
        assert!(!vm.experience[0].has_body());
        assert!(vm.experience[1].has_body());
    }

    #[test]
    fn test_nav_requires_id_and_label() {
        let vm = from(json!({
            "nav": [
                { "id": "experience", "label": "Work" },
                { "id": "contact" },
                { "label": "Orphan" },
                { "id": "contact", "label": "Say hi" },
            ],
        }));
        let ids: Vec<&str> = vm.nav.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["experience", "contact"]);
        assert_eq!(vm.nav[1].label, "Say hi");
    }

    #[test]
    fn test_sample_document() {
        let body = include_str!("../../web/public/content/resume.json");
        let doc = ResumeDocument::from_json("content/resume.json", body).unwrap();
        let vm = normalize(&doc);
        assert_eq!(vm.meta.name, "Andrew Watkins");
        assert_eq!(vm.brand.mark, "AND");
        assert_eq!(vm.experience.len(), 3);
        assert_eq!(vm.experience[0].dates_label, "2021—");
        assert_eq!(vm.experience[1].dates_label, "2017—2021");
        assert_eq!(vm.experience[2].dates_label, "2017");
        assert!(!vm.experience[2].has_body());
    }

    #[test]
    fn test_ui_text_overrides() {
        let vm = from(json!({
            "ui": {
                "a11y": { "skipToContent": "Jump" },
                "buttons": { "print": "Print CV" },
                "labels": { "copied": "Copied!" },
            },
            "sections": { "experience": { "headings": { "tech": "Stack" } } },
            "contactSection": { "note": "Open to work." },
        }));
        assert_eq!(vm.ui.skip_to_content, "Jump");
        assert_eq!(vm.ui.buttons.print, "Print CV");
        assert_eq!(vm.ui.buttons.copy_email, "Copy email");
        assert_eq!(vm.ui.labels.copied, "Copied!");
        assert_eq!(vm.sections.experience.headings.tech, "Stack");
        assert_eq!(vm.sections.experience.headings.scope, "Scope");
        assert_eq!(vm.contact_note, "Open to work.");
    }
}
