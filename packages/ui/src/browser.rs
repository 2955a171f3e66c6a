//! Read-once browser signals: media queries and the URL fragment.
//!
//! Outside the browser every query answers "no preference".

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn media_matches(_query: &str) -> bool {
    false
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

/// The current URL hash without `#`, if any.
pub fn location_fragment() -> Option<String> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        let hash = hash.trim_start_matches('#');
        (!hash.is_empty()).then(|| hash.to_string())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        None
    }
}
