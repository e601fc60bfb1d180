//! Theme Toggle Component
//!
//! Button flipping light/dark. The icon follows the applied theme.

use leptos::prelude::*;

use crate::theme::{apply_theme, BrowserStorage, PreferenceStorage, Theme, ThemeStore};

/// Toggle a store held by the reactive owner. `None` once it has been disposed.
fn toggle_stored<S>(store: StoredValue<ThemeStore<S>>) -> Option<Theme>
where
    S: PreferenceStorage + Send + Sync + 'static,
{
    store.try_update_value(|s| s.toggle())
}

#[component]
pub fn ThemeToggle(theme_store: StoredValue<ThemeStore<BrowserStorage>>) -> impl IntoView {
    let (theme, set_theme) = signal(theme_store.with_value(|s| s.current()));

    let toggle = move |_| {
        let Some(next) = toggle_stored(theme_store) else {
            return;
        };
        apply_theme(next);
        set_theme.set(next);
    };

    view! {
        <button id="themeToggle" class="btn btn-outline-secondary" title="Toggle theme" on:click=toggle>
            <i id="themeIcon" class=move || theme.get().icon_class()></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts every write, remembers nothing
    struct DiscardStorage;

    impl PreferenceStorage for DiscardStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_toggle_stored_flips_theme() {
        let store = StoredValue::new(ThemeStore::new(DiscardStorage, "theme"));
        assert_eq!(toggle_stored(store), Some(Theme::Dark));
        assert_eq!(toggle_stored(store), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_disposed_store_is_skipped() {
        let store = StoredValue::new(ThemeStore::new(DiscardStorage, "theme"));
        store.dispose();
        assert_eq!(toggle_stored(store), None);
    }
}
