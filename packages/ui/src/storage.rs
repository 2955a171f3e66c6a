//! Platform theme store.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage`, one key
//! - **Native**: in-memory, nothing survives a restart

use content::ThemeStore;

/// Create the platform-appropriate theme store for `key`.
pub fn make_theme_store(key: &str) -> impl ThemeStore + Clone + 'static {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        LocalThemeStore::new(key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = key;
        content::MemoryThemeStore::new()
    }
}

/// `localStorage`-backed store. Storage that is disabled or throws reads as
/// empty and drops writes.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone)]
pub struct LocalThemeStore {
    key: String,
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalThemeStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, theme: content::Theme) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&self.key, theme.as_str());
        }
    }
}
