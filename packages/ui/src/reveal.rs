//! Scroll reveal bridge.
//!
//! A long-lived eval installs one IntersectionObserver over every
//! `[data-reveal]` element and pushes each batch to Rust. The
//! [`RevealTracker`] decides what becomes visible and the keys it reveals are
//! sent back so the script stops observing them.

use content::config::BehaviorConfig;
use content::{Intersection, RevealTracker};
use dioxus::prelude::*;

pub type RevealSignal = Signal<RevealTracker>;

/// Class list for a reveal hook: `power-on`, plus `powered` once revealed.
pub fn use_reveal_class(key: &str) -> &'static str {
    let tracker = use_context::<RevealSignal>();
    if tracker.read().is_revealed(key) {
        "power-on powered"
    } else {
        "power-on"
    }
}

/// Start observing once the page is mounted. Does nothing when the tracker
/// has no pending keys (reduced motion).
pub fn use_reveal_observer(mut tracker: RevealSignal, behavior: BehaviorConfig) {
    use_effect(move || {
        if !tracker.peek().needs_observer() {
            return;
        }
        let js = format!(
            r#"(async function() {{
                var nodes = Array.prototype.slice.call(document.querySelectorAll('[data-reveal]'));
                if (nodes.length === 0) return;
                if (!('IntersectionObserver' in window)) {{
                    dioxus.send(nodes.map(function(el) {{
                        return {{ key: el.getAttribute('data-reveal'), isIntersecting: true, top: 0 }};
                    }}));
                    return;
                }}
                var observer = new IntersectionObserver(function(entries) {{
                    dioxus.send(entries.map(function(entry) {{
                        return {{
                            key: entry.target.getAttribute('data-reveal'),
                            isIntersecting: entry.isIntersecting,
                            top: entry.boundingClientRect.top
                        }};
                    }}));
                }}, {{ root: null, rootMargin: {margin_js}, threshold: {threshold} }});
                nodes.forEach(function(el) {{ observer.observe(el); }});
                while (true) {{
                    var keys = await dioxus.recv();
                    keys.forEach(function(key) {{
                        nodes.forEach(function(el) {{
                            if (el.getAttribute('data-reveal') === key) observer.unobserve(el);
                        }});
                    }});
                }}
            }})();"#,
            margin_js = crate::js_string(&behavior.reveal_root_margin),
            threshold = behavior.reveal_threshold,
        );

        spawn(async move {
            let mut eval = document::eval(&js);
            loop {
                match eval.recv::<Vec<Intersection>>().await {
                    Ok(batch) => {
                        let mut next = tracker.peek().clone();
                        let revealed = next.on_intersect(&batch);
                        if !revealed.is_empty() {
                            tracker.set(next);
                            if let Err(e) = eval.send(revealed) {
                                tracing::debug!("Could not unobserve revealed keys: {e}");
                            }
                        }
                    }
                    Err(_) => break,
                }
            }
        });
    });
}
