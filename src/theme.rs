use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;
#[cfg(feature = "hydrate")]
use leptos_use::use_preferred_dark;

/// localStorage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme-dark";

/// Resolve the theme to start with: explicit stored preference wins, then
/// the OS color-scheme signal, then light.
pub fn initial_theme(stored: Option<bool>, system_dark: bool) -> bool {
    stored.unwrap_or(system_dark)
}

/// Page-wide theme state, provided once at the composition root and read by
/// any component below it via [`use_theme`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    is_dark: RwSignal<bool>,
    // mirror of the value last handed to durable storage
    stored: RwSignal<Option<bool>>,
}

impl ThemeContext {
    fn new() -> Self {
        Self {
            is_dark: RwSignal::new(false),
            stored: RwSignal::new(None),
        }
    }

    /// Current theme flag. Reactive when called inside a tracking context.
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    /// Flip the theme and queue the new value for persistence.
    pub fn toggle(&self) {
        let next = !self.is_dark.get_untracked();
        log::debug!("theme toggled, dark = {next}");
        self.is_dark.set(next);
        self.stored.set(Some(next));
    }

    /// Value queued for durable storage, if the user has expressed a
    /// preference this session.
    pub fn stored(&self) -> Option<bool> {
        self.stored.get()
    }

    fn set_initial(&self, dark: bool) {
        self.is_dark.set(dark);
    }
}

/// Install the theme context at the composition root. On the client the
/// initial value is resolved from storage and the OS signal once, and every
/// toggle afterwards is written back under [`THEME_STORAGE_KEY`]. Storage
/// failures are swallowed; the in-memory signal stays authoritative.
pub fn provide_theme() -> ThemeContext {
    let theme = ThemeContext::new();

    #[cfg(feature = "hydrate")]
    {
        let (persisted, set_persisted, _) =
            use_local_storage::<Option<bool>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        let prefers_dark = use_preferred_dark();

        Effect::watch(
            || (),
            move |_, _, _| {
                let dark = initial_theme(
                    persisted.get_untracked(),
                    prefers_dark.get_untracked(),
                );
                log::debug!("theme initialized, dark = {dark}");
                theme.set_initial(dark);
            },
            true,
        );

        Effect::watch(
            move || theme.stored.get(),
            move |queued, _, _| {
                if let Some(dark) = *queued {
                    set_persisted.set(Some(dark));
                }
            },
            false,
        );
    }

    provide_context(theme);
    theme
}

/// Access the theme context from anywhere below the root.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_theme_prefers_stored_value() {
        assert!(initial_theme(Some(true), false));
        assert!(!initial_theme(Some(false), true));
    }

    #[test]
    fn initial_theme_falls_back_to_system_then_light() {
        assert!(initial_theme(None, true));
        assert!(!initial_theme(None, false));
    }

    #[test]
    fn toggle_parity_matches_toggle_count() {
        let theme = ThemeContext::new();
        let initial = theme.is_dark.get_untracked();
        for n in 1..=8 {
            theme.toggle();
            let expected = if n % 2 == 0 { initial } else { !initial };
            assert_eq!(theme.is_dark.get_untracked(), expected);
        }
    }

    #[test]
    fn toggle_queues_new_value_for_storage() {
        let theme = ThemeContext::new();
        assert_eq!(theme.stored.get_untracked(), None);
        theme.toggle();
        assert_eq!(theme.stored.get_untracked(), Some(true));
        assert_eq!(theme.stored.get_untracked(), Some(theme.is_dark.get_untracked()));
        theme.toggle();
        assert_eq!(theme.stored.get_untracked(), Some(false));
        assert_eq!(theme.stored.get_untracked(), Some(theme.is_dark.get_untracked()));
    }

    #[test]
    fn initialization_does_not_queue_a_write() {
        let theme = ThemeContext::new();
        theme.set_initial(true);
        assert_eq!(theme.stored.get_untracked(), None);
    }
}
