//! Theme Store
//!
//! Light/dark preference persisted in a client-side key-value store.
//! The store is the only writer of the persisted value.

use crate::logging;

/// Class put on `<body>` in dark mode
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than "dark" (including nothing stored) is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// Toggle button icon: moon offers dark mode, sun offers light mode
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "bi bi-moon-fill",
            Theme::Dark => "bi bi-sun-fill",
        }
    }
}

/// Durable string key-value store for preferences
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage write failed: {:?}", e))
    }
}

pub struct ThemeStore<S: PreferenceStorage> {
    storage: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            current: Theme::Light,
        }
    }

    /// Read the persisted preference and make it current
    pub fn load(&mut self) -> Theme {
        self.current = Theme::from_stored(self.storage.get(&self.key).as_deref());
        logging::log(&format!("[THEME] Loaded {}", self.current.as_str()));
        self.current
    }

    /// Flip the current theme and persist it. A failed write is logged and
    /// the new theme still applies for this page.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.storage.set(&self.key, self.current.as_str()) {
            logging::error(&format!("[THEME] Preference not saved: {}", e));
        }
        self.current
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Apply `theme` to the page by toggling the body class
pub fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(body) = document.body() {
        if let Err(e) = body.class_list().toggle_with_force(DARK_MODE_CLASS, theme.is_dark()) {
            logging::error(&format!("[THEME] Could not apply {}: {:?}", theme.as_str(), e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory storage, optionally refusing writes
    #[derive(Debug, Default)]
    struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn read_only() -> Self {
            Self { read_only: true, ..Self::default() }
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if self.read_only {
                return Err("storage is read-only".to_string());
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_absent_preference_is_light() {
        let mut store = ThemeStore::new(MemoryStorage::new(), "theme");
        assert_eq!(store.load(), Theme::Light);
        assert_eq!(store.current().icon_class(), "bi bi-moon-fill");
        assert_eq!(store.storage().get("theme"), None);
    }

    #[test]
    fn test_stored_dark_is_loaded() {
        let storage = MemoryStorage::new();
        storage.set("theme", "dark").unwrap();
        let mut store = ThemeStore::new(storage, "theme");
        assert_eq!(store.load(), Theme::Dark);
        assert_eq!(store.current().icon_class(), "bi bi-sun-fill");
    }

    #[test]
    fn test_unknown_value_is_light() {
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = ThemeStore::new(MemoryStorage::new(), "theme");
        store.load();
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.storage().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let storage = MemoryStorage::new();
        storage.set("theme", "light").unwrap();
        let mut store = ThemeStore::new(storage, "theme");
        let original = store.load();

        store.toggle();
        store.toggle();

        assert_eq!(store.current(), original);
        assert_eq!(store.storage().get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_unavailable_storage_is_not_fatal() {
        let mut store = ThemeStore::new(MemoryStorage::read_only(), "theme");
        store.load();
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(store.storage().get("theme"), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_is_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|b| b.class_list().contains(DARK_MODE_CLASS))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn apply_theme_sets_and_clears_body_class() {
        apply_theme(Theme::Dark);
        assert!(body_is_dark());
        apply_theme(Theme::Light);
        assert!(!body_is_dark());
    }
}
