//! # Render-ready view model
//!
//! Output of [`crate::normalize`]. Every field is present and type-correct,
//! so components never branch on missing data, only on empty strings and
//! empty lists.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ResumeViewModel`] | The whole page. `Default` is the normalized empty document. |
//! | [`MetaView`] | Name, role, value statement, location and `<head>` metadata. |
//! | [`BrandView`] | The short mark and wordmark shown in the header. |
//! | [`UiText`] | Accessibility strings, button captions and labels. |
//! | [`SectionsView`] | Section titles, kickers and role sub-headings. |
//! | [`ContactView`] | Email (with precomputed `mailto:` link) and social links. |
//! | [`NavItem`] | One navigation link: target section id and label. |
//! | [`HeroView`] | Eyebrow lines, intro paragraphs, current and previous roles. |
//! | [`RoleView`] | One experience entry with its derived `dates_label`. |
//! | [`FooterView`] | Two footer lines. |

use serde::{Deserialize, Serialize};

use crate::document::ResumeDocument;
use crate::normalize::normalize;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeViewModel {
    pub meta: MetaView,
    pub brand: BrandView,
    pub ui: UiText,
    pub sections: SectionsView,
    pub contact: ContactView,
    /// Note shown under the contact links; empty when absent.
    pub contact_note: String,
    pub nav: Vec<NavItem>,
    pub hero: HeroView,
    pub experience: Vec<RoleView>,
    pub footer: FooterView,
}

impl Default for ResumeViewModel {
    fn default() -> Self {
        normalize(&ResumeDocument::empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetaView {
    pub name: String,
    pub role: String,
    pub value_statement: String,
    pub location: String,
    pub timezone: String,
    /// `<title>` text
    pub site_title: String,
    /// `<meta name="description">` content
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandView {
    /// Short monogram, at most three characters when derived.
    pub mark: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiText {
    pub skip_to_content: String,
    pub buttons: Buttons,
    pub labels: Labels,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Buttons {
    pub print: String,
    pub copy_email: String,
    pub theme_toggle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub current: String,
    pub previous: String,
    pub email: String,
    pub location: String,
    /// Live-region announcement after a successful copy.
    pub copied: String,
    pub copy_failed: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionsView {
    pub experience: ExperienceSection,
    pub contact: SectionHeading,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    pub kicker: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSection {
    pub title: String,
    pub kicker: String,
    pub headings: RoleHeadings,
}

/// Sub-headings used inside an expanded role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleHeadings {
    pub scope: String,
    pub highlights: String,
    pub tech: String,
    pub leadership: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactView {
    pub email: String,
    /// Always `mailto:` followed by `email`, even when `email` is empty.
    pub email_href: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Id of the section element the link targets.
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroView {
    pub eyebrow: Vec<String>,
    pub intro: Vec<String>,
    pub current: String,
    pub previous: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleView {
    pub company: String,
    pub title: String,
    pub subtitle: String,
    /// `"start—end"`, `"start—"`, `"end"` or empty.
    pub dates_label: String,
    pub scope: String,
    pub highlights: Vec<String>,
    pub tech: String,
    pub leadership: Vec<String>,
}

impl RoleView {
    /// Whether the role has anything to show beyond its summary line.
    pub fn has_body(&self) -> bool {
        !self.scope.is_empty()
            || !self.tech.is_empty()
            || !self.highlights.is_empty()
            || !self.leadership.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterView {
    pub line1: String,
    pub line2: String,
}
