//! Print wiring: every role is expanded for the printout and the reader's
//! own open/closed choices come back afterwards.

use content::{DisclosureState, PrintCoordinator};
use dioxus::prelude::*;

use crate::icons::FaPrint;
use crate::Icon;

/// Role disclosure state plus the coordinator that forces it open for print.
#[derive(Clone, Copy, PartialEq)]
pub struct PrintState {
    pub disclosures: Signal<DisclosureState>,
    pub coordinator: Signal<PrintCoordinator>,
}

impl PrintState {
    pub fn begin(mut self) {
        let mut disclosures = self.disclosures.write();
        self.coordinator.write().begin(&mut disclosures);
    }

    /// Restore the reader's open set and push it straight to the DOM.
    /// `beforeprint` opens the `<details>` itself, and when `begin` and `end`
    /// land in the same task poll the rendered `open` attribute never
    /// changes, so no patch would close them again.
    pub fn end(mut self) {
        let script = {
            let mut disclosures = self.disclosures.write();
            self.coordinator.write().end(&mut disclosures);
            sync_details_script(&disclosures)
        };
        let _ = document::eval(&script);
    }
}

/// Script setting every `details[data-role]` to match `state`.
fn sync_details_script(state: &DisclosureState) -> String {
    let open: Vec<usize> = state.open_set().iter().copied().collect();
    let open_js = serde_json::to_string(&open).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"(function() {{
            var open = {open_js};
            document.querySelectorAll('details[data-role]').forEach(function(d) {{
                d.open = open.indexOf(Number(d.getAttribute('data-role'))) !== -1;
            }});
        }})();"#
    )
}

/// Listen for the browser's own print events (menu, Ctrl+P). `<details>`
/// are opened synchronously in `beforeprint` so the printout never sees the
/// collapsed layout; Rust state follows right after.
pub fn use_print_bridge(state: PrintState) {
    use_effect(move || {
        let js = r#"(function() {
            window.addEventListener('beforeprint', function() {
                document.querySelectorAll('details[data-role]').forEach(function(d) { d.open = true; });
                dioxus.send('begin');
            });
            window.addEventListener('afterprint', function() {
                dioxus.send('end');
            });
        })();"#;
        spawn(async move {
            let mut eval = document::eval(js);
            loop {
                match eval.recv::<String>().await {
                    Ok(event) if event == "begin" => state.begin(),
                    Ok(event) if event == "end" => state.end(),
                    Ok(event) => tracing::warn!("Unknown print event: {event}"),
                    Err(_) => break,
                }
            }
        });
    });
}

#[component]
pub fn PrintButton(label: String) -> Element {
    let state = use_context::<PrintState>();

    rsx! {
        button {
            class: "icon-button",
            r#type: "button",
            title: "{label}",
            "aria-label": "{label}",
            "data-action": "print",
            onclick: move |_| {
                state.begin();
                let _ = document::eval("window.print();");
            },
            Icon { icon: FaPrint, width: 14, height: 14 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::RoleBlock;

    #[test]
    fn test_details_follow_restored_state_after_print() {
        let mut disclosures = DisclosureState::from_blocks(
            &[
                RoleBlock::Collapsible { initially_open: true },
                RoleBlock::Static,
                RoleBlock::Collapsible { initially_open: false },
            ],
            false,
        );
        let mut coordinator = PrintCoordinator::new();

        // Browser-initiated print: both events handled back to back.
        coordinator.begin(&mut disclosures);
        assert!(sync_details_script(&disclosures).contains("var open = [0,2];"));
        coordinator.end(&mut disclosures);

        let script = sync_details_script(&disclosures);
        assert!(script.contains("var open = [0];"));
        assert!(script.contains("details[data-role]"));
    }

    #[test]
    fn test_details_all_closed() {
        let disclosures = DisclosureState::from_blocks(
            &[RoleBlock::Collapsible { initially_open: false }],
            false,
        );
        assert!(sync_details_script(&disclosures).contains("var open = [];"));
    }
}
