//! Light/dark theme preference.
//!
//! The preference lives in `localStorage` under [`STORAGE_KEY`] and is applied
//! as a `data-theme` attribute on the `<html>` element. Without a stored value
//! the system `prefers-color-scheme` query decides.

use std::fmt;

pub const STORAGE_KEY: &str = "tnload.theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything other than `light`/`dark` is ignored.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label for the toggle button, naming the theme it switches to.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the effective theme from a stored value and the system preference.
#[must_use]
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    stored.and_then(Theme::parse).unwrap_or(if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

/// Read the saved theme, falling back to the system preference.
#[must_use]
pub fn saved_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let prefers_dark = crate::dom::window()
            .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        resolve(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::default()
    }
}

/// Set `data-theme` on the document root.
pub fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = crate::dom::root_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Apply the theme and persist it for the next visit.
pub fn persist(theme: Theme) {
    apply(theme);
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn toggling_flips_between_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn stored_preference_beats_system_preference() {
        assert_eq!(resolve(Some("light"), true), Theme::Light);
        assert_eq!(resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve(None, true), Theme::Dark);
        assert_eq!(resolve(Some("bogus"), false), Theme::Light);
    }

    #[test]
    fn saved_theme_defaults_off_browser() {
        assert_eq!(saved_theme(), Theme::Light);
    }
}
