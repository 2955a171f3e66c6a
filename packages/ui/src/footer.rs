use content::view_model::FooterView;
use dioxus::prelude::*;

#[component]
pub fn Footer(footer: FooterView) -> Element {
    rsx! {
        footer {
            class: "site-footer",
            if !footer.line1.is_empty() {
                p { "{footer.line1}" }
            }
            if !footer.line2.is_empty() {
                p { class: "site-footer-muted", "{footer.line2}" }
            }
        }
    }
}
