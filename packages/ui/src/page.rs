use content::layout::{nav_entries, reveal_keys, role_blocks};
use content::{
    ActiveSection, DisclosureState, PrintCoordinator, ResumeViewModel, RevealTracker, SiteConfig,
};
use dioxus::prelude::*;

use crate::{
    use_active_nav_observer, use_print_bridge, use_reveal_observer, Contact, Experience, Footer,
    Hero, LiveRegion, LiveRegionSignal, Navbar, PrintState,
};

/// Load the content document once, then render the page or a static error.
/// A failed load is final for this page view.
#[component]
pub fn ResumePage(config: SiteConfig) -> Element {
    let path = config.content.path.clone();
    let resume = use_resource(move || {
        let path = path.clone();
        async move { crate::load_resume(&path).await }
    });

    match &*resume.read_unchecked() {
        Some(Ok(vm)) => rsx! {
            ResumeView { vm: vm.clone(), config: config.clone() }
        },
        Some(Err(e)) => rsx! {
            LoadError { path: e.path().to_string() }
        },
        None => rsx! {
            main {
                id: "main",
                class: "loading",
                "aria-busy": "true",
            }
        },
    }
}

#[component]
pub fn LoadError(path: String) -> Element {
    rsx! {
        main {
            id: "main",
            class: "load-error",
            p { "Could not load {path}." }
        }
    }
}

#[component]
pub fn SkipLink(label: String) -> Element {
    rsx! {
        a { class: "skip-link", href: "#main", "{label}" }
    }
}

/// The rendered page plus its scroll, nav and print behaviors.
#[component]
pub fn ResumeView(vm: ResumeViewModel, config: SiteConfig) -> Element {
    let sections = config.sections.clone();
    let nav = nav_entries(&vm, &sections);

    use_context_provider(|| LiveRegionSignal::new(String::new()));

    let reveal = use_context_provider(|| {
        Signal::new(RevealTracker::new(
            reveal_keys(&vm, &sections),
            crate::prefers_reduced_motion(),
        ))
    });
    let active = use_context_provider(|| {
        Signal::new(ActiveSection::new(
            nav.iter().map(|entry| entry.id.clone()),
            crate::location_fragment().as_deref(),
        ))
    });
    let print = use_context_provider(|| PrintState {
        disclosures: Signal::new(DisclosureState::from_blocks(
            &role_blocks(&vm.experience),
            config.behavior.exclusive_accordion,
        )),
        coordinator: Signal::new(PrintCoordinator::new()),
    });

    use_reveal_observer(reveal, config.behavior.clone());
    use_active_nav_observer(active, config.behavior.clone());
    use_print_bridge(print);

    rsx! {
        document::Title { "{vm.meta.site_title}" }
        document::Meta { name: "description", content: "{vm.meta.description}" }

        SkipLink { label: vm.ui.skip_to_content.clone() }
        Navbar {
            brand: vm.brand.clone(),
            entries: nav,
            buttons: vm.ui.buttons.clone(),
            storage_key: config.theme.storage_key.clone(),
        }
        main {
            id: "main",
            if sections.hero {
                Hero { meta: vm.meta.clone(), hero: vm.hero.clone(), labels: vm.ui.labels.clone() }
            }
            if sections.experience {
                Experience {
                    section: vm.sections.experience.clone(),
                    roles: vm.experience.clone(),
                }
            }
            if sections.contact {
                Contact {
                    heading: vm.sections.contact.clone(),
                    contact: vm.contact.clone(),
                    note: vm.contact_note.clone(),
                    labels: vm.ui.labels.clone(),
                    buttons: vm.ui.buttons.clone(),
                }
            }
        }
        if sections.footer {
            Footer { footer: vm.footer.clone() }
        }
        LiveRegion {}
    }
}
