/// Local storage key holding the saved theme.
pub const THEME_KEY: &str = "theme";

/// Class put on the document element while the dark theme is on.
pub const DARK_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// A saved choice wins; otherwise follow the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

/// Name/value storage for the theme choice.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

pub fn initial_theme(store: &impl ThemeStore, prefers_dark: bool) -> Theme {
    Theme::resolve(store.load().as_deref(), prefers_dark)
}

/// Flips the theme and persists the new value.
pub fn toggle_theme(store: &impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.values.borrow().get(THEME_KEY).cloned()
        }

        fn save(&self, theme: Theme) {
            self.values
                .borrow_mut()
                .insert(THEME_KEY.to_string(), theme.as_str().to_string());
        }
    }

    #[test]
    fn saved_value_beats_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn missing_or_garbage_value_falls_back_to_system() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn toggle_persists_under_theme_key() {
        let store = MemoryStore::default();
        let start = initial_theme(&store, false);
        assert_eq!(start, Theme::Light);

        let next = toggle_theme(&store, start);
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.load().as_deref(), Some("dark"));
        assert_eq!(initial_theme(&store, false), Theme::Dark);

        toggle_theme(&store, next);
        assert_eq!(store.load().as_deref(), Some("light"));
    }
}
