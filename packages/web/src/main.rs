use content::SiteConfig;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = SiteConfig::from_toml_or_default(SITE_TOML);
        tracing::info!("Content document: {}", config.content.path);
        config
    });

    // Theme context: stored preference, else the system color scheme
    ui::use_theme_provider(&config.theme.storage_key);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::RESUME_CSS }

        ui::ResumePage { config }
    }
}
