//! Light/dark theme preference.
//!
//! The stored choice in `localStorage` wins; without one the system
//! `prefers-color-scheme` decides. The theme is applied as a `data-theme`
//! attribute on `<html>` so the stylesheet can switch palettes.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR always renders the
//! light theme and hydration corrects it on mount.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "vetcare_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

/// Combine the stored value (if any) with the system preference.
#[must_use]
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some("light") => Theme::Light,
        _ => Theme::from_dark(system_prefers_dark),
    }
}

/// Read the preferred theme. Always `Light` on the server.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        resolve(stored.as_deref(), system_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
