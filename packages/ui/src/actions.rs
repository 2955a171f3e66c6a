//! Copy-email action and the polite live region that reports it.

use dioxus::prelude::*;

use crate::icons::FaCopy;
use crate::Icon;

pub type LiveRegionSignal = Signal<String>;

/// Screen-reader announcements. Renders nothing visible.
#[component]
pub fn LiveRegion() -> Element {
    let message = use_context::<LiveRegionSignal>();

    rsx! {
        div {
            id: "live-region",
            class: "sr-only",
            role: "status",
            "aria-live": "polite",
            "{message}"
        }
    }
}

/// Clear then set the message so repeating the same text still announces.
async fn announce(mut live: LiveRegionSignal, text: String) {
    live.set(String::new());
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(20)).await;
    live.set(text);
}

/// Copy with the async clipboard API when available, otherwise through a
/// hidden textarea and `execCommand`.
async fn copy_text(text: &str) -> bool {
    let js = format!(
        r#"(async function() {{
            var text = {text_js};
            try {{
                if (navigator.clipboard && window.isSecureContext) {{
                    await navigator.clipboard.writeText(text);
                    dioxus.send(true);
                    return;
                }}
                var ta = document.createElement('textarea');
                ta.value = text;
                ta.setAttribute('readonly', '');
                ta.style.position = 'fixed';
                ta.style.left = '-9999px';
                ta.style.top = '0';
                document.body.appendChild(ta);
                ta.select();
                var ok = document.execCommand('copy');
                document.body.removeChild(ta);
                dioxus.send(ok);
            }} catch (e) {{
                dioxus.send(false);
            }}
        }})();"#,
        text_js = crate::js_string(text),
    );
    let mut eval = document::eval(&js);
    eval.recv::<bool>().await.unwrap_or(false)
}

#[component]
pub fn CopyEmailButton(
    email: String,
    label: String,
    copied: String,
    copy_failed: String,
) -> Element {
    let live = use_context::<LiveRegionSignal>();

    if email.is_empty() {
        return rsx! {};
    }

    let onclick = move |_: MouseEvent| {
        let email = email.clone();
        let copied = copied.clone();
        let copy_failed = copy_failed.clone();
        async move {
            if copy_text(&email).await {
                announce(live, copied).await;
            } else {
                tracing::warn!("Clipboard copy failed");
                announce(live, copy_failed).await;
            }
        }
    };

    rsx! {
        button {
            class: "button button--ghost",
            r#type: "button",
            "data-action": "copy-email",
            onclick: onclick,
            Icon { icon: FaCopy, width: 12, height: 12 }
            span { "{label}" }
        }
    }
}
