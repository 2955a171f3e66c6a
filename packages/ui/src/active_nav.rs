//! Active-section bridge: observes every navigable section and marks the
//! one nearest the viewport top as current.

use content::config::BehaviorConfig;
use content::{ActiveSection, Intersection};
use dioxus::prelude::*;

pub type ActiveNavSignal = Signal<ActiveSection>;

pub fn use_active_nav_observer(mut active: ActiveNavSignal, behavior: BehaviorConfig) {
    use_effect(move || {
        let ids = active.peek().ids().to_vec();
        if ids.is_empty() {
            return;
        }
        let ids_js = serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string());
        let js = format!(
            r#"(function() {{
                if (!('IntersectionObserver' in window)) return;
                var sections = {ids_js}
                    .map(function(id) {{ return document.getElementById(id); }})
                    .filter(function(el) {{ return el !== null; }});
                if (sections.length === 0) return;
                var observer = new IntersectionObserver(function(entries) {{
                    dioxus.send(entries.map(function(entry) {{
                        return {{
                            key: entry.target.id,
                            isIntersecting: entry.isIntersecting,
                            top: entry.boundingClientRect.top
                        }};
                    }}));
                }}, {{ root: null, rootMargin: {margin_js}, threshold: 0 }});
                sections.forEach(function(el) {{ observer.observe(el); }});
            }})();"#,
            margin_js = crate::js_string(&behavior.nav_root_margin),
        );

        spawn(async move {
            let mut eval = document::eval(&js);
            loop {
                match eval.recv::<Vec<Intersection>>().await {
                    Ok(batch) => {
                        let mut next = active.peek().clone();
                        if next.observe(&batch) {
                            tracing::trace!("Current section: {:?}", next.current());
                            active.set(next);
                        }
                    }
                    Err(_) => break,
                }
            }
        });
    });
}
