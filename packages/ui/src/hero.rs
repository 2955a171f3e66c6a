use content::layout::split_name;
use content::view_model::{HeroView, Labels, MetaView};
use dioxus::prelude::*;

use crate::use_reveal_class;

#[component]
pub fn Hero(meta: MetaView, hero: HeroView, labels: Labels) -> Element {
    let reveal = use_reveal_class("hero");
    let name = split_name(&meta.name);

    rsx! {
        section {
            id: "top",
            class: "hero {reveal}",
            "data-reveal": "hero",

            if !hero.eyebrow.is_empty() {
                p {
                    class: "hero-eyebrow",
                    for (i, line) in hero.eyebrow.iter().enumerate() {
                        span { key: "{i}", "{line}" }
                    }
                }
            }

            h1 {
                class: "hero-name",
                "{name.lead}"
                if let Some(emphasis) = name.emphasis {
                    " "
                    em { "{emphasis}" }
                }
                if !name.tail.is_empty() {
                    " {name.tail}"
                }
            }
            p { class: "hero-role", "{meta.role}" }
            p { class: "hero-value", "{meta.value_statement}" }

            for (i, paragraph) in hero.intro.iter().enumerate() {
                p { key: "{i}", class: "hero-intro", "{paragraph}" }
            }

            if !hero.current.is_empty() || !hero.previous.is_empty() {
                dl {
                    class: "hero-roles",
                    if !hero.current.is_empty() {
                        dt { "{labels.current}" }
                        dd { "{hero.current}" }
                    }
                    if !hero.previous.is_empty() {
                        dt { "{labels.previous}" }
                        dd {
                            ul {
                                for (i, role) in hero.previous.iter().enumerate() {
                                    li { key: "{i}", "{role}" }
                                }
                            }
                        }
                    }
                }
            }

            if !meta.location.is_empty() {
                p {
                    class: "hero-location",
                    "{labels.location} {meta.location}"
                    if !meta.timezone.is_empty() {
                        span { class: "hero-timezone", " · {meta.timezone}" }
                    }
                }
            }
        }
    }
}
