//! Light/dark theme: mode, palettes, and the floating toggle.
//!
//! The stylesheet consumes two things: the `data-theme` attribute on `<html>`
//! and six custom properties set inline on `<html>`. Both are written together
//! at every mode change so they cannot drift apart. The chosen mode is
//! persisted as `"light"` / `"dark"` through a [`PreferenceStore`].
//!
//! TRADE-OFFS
//! ==========
//! Switching reads the live `data-theme` attribute rather than the cached
//! mode, so an inline pre-load script that set the attribute is respected.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{THEME_ATTRIBUTE, THEME_TOGGLE_CLASS};
use crate::dom::{ButtonSpec, Dom, Glyph};
use crate::storage::PreferenceStore;

const BUTTON_CSS: &str = "position: fixed; top: 100px; right: 20px; width: 50px; height: 50px; \
    border: none; border-radius: 50%; background-color: var(--bg-secondary); color: var(--text-primary); \
    font-size: 20px; cursor: pointer; transition: all 0.3s ease; z-index: 999; \
    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);";

/// Error returned when parsing a [`ThemeMode`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0:?}")]
pub struct ParseThemeModeError(pub String);

/// Page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle while this mode is active.
    #[must_use]
    pub fn glyph(self) -> Glyph {
        match self {
            Self::Light => Glyph::Moon,
            Self::Dark => Glyph::Sun,
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeModeError(other.to_owned())),
        }
    }
}

/// Values for the six theme custom properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border_color: &'static str,
}

impl Palette {
    /// `(custom property, value)` pairs in a fixed order.
    #[must_use]
    pub fn properties(&self) -> [(&'static str, &'static str); 6] {
        [
            ("--bg-primary", self.bg_primary),
            ("--bg-secondary", self.bg_secondary),
            ("--bg-tertiary", self.bg_tertiary),
            ("--text-primary", self.text_primary),
            ("--text-secondary", self.text_secondary),
            ("--border-color", self.border_color),
        ]
    }
}

pub const LIGHT: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f9fafb",
    bg_tertiary: "#f3f4f6",
    text_primary: "#1f2937",
    text_secondary: "#6b7280",
    border_color: "#e5e7eb",
};

pub const DARK: Palette = Palette {
    bg_primary: "#111827",
    bg_secondary: "#1f2937",
    bg_tertiary: "#374151",
    text_primary: "#f9fafb",
    text_secondary: "#d1d5db",
    border_color: "#374151",
};

/// Mode currently attributed on `<html>`. Anything but `"dark"` is light.
pub fn attributed_mode<D: Dom>(dom: &D) -> ThemeMode {
    match dom.root_attribute(THEME_ATTRIBUTE).as_deref() {
        Some("dark") => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// Write the palette for `mode` into `<html>`'s custom properties.
pub fn apply_variables<D: Dom>(dom: &mut D, mode: ThemeMode) {
    for (name, value) in mode.palette().properties() {
        dom.set_root_style_property(name, value);
    }
}

/// Persisted mode, if a valid one is stored.
pub fn read_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<ThemeMode> {
    let raw = store.get(key)?;
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            log::warn!("theme: ignoring stored preference: {err}");
            None
        }
    }
}

/// The injected theme switch.
#[derive(Debug, Clone)]
pub struct ThemeToggle<N> {
    button: N,
    storage_key: String,
    mode: ThemeMode,
}

impl<N: Clone + PartialEq> ThemeToggle<N> {
    /// Restore the persisted mode onto the document, then create the switch.
    ///
    /// Only `"light"` and `"dark"` are restored; any other stored string is
    /// logged and skipped, leaving the document unattributed, as it is when
    /// nothing is stored. The restore happens even when the button cannot be
    /// created, in which case `None` is returned.
    pub fn install<D, S>(dom: &mut D, store: &S, storage_key: &str) -> Option<Self>
    where
        D: Dom<Node = N>,
        S: PreferenceStore + ?Sized,
    {
        let saved = read_preference(store, storage_key);
        if let Some(mode) = saved {
            dom.set_root_attribute(THEME_ATTRIBUTE, mode.as_str());
            log::debug!("theme: restored {mode}");
        }

        let mode = saved.unwrap_or_default();
        let spec = ButtonSpec { class: THEME_TOGGLE_CLASS, glyph: mode.glyph(), css: BUTTON_CSS.to_owned() };
        let Some(button) = dom.create_button(&spec) else {
            log::warn!("theme: switch could not be created");
            return None;
        };
        Some(Self { button, storage_key: storage_key.to_owned(), mode })
    }

    #[must_use]
    pub fn button(&self) -> &N {
        &self.button
    }

    /// Mode after the last restore or switch.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switch to the other mode and persist it. Returns the new mode.
    pub fn toggle<D, S>(&mut self, dom: &mut D, store: &mut S) -> ThemeMode
    where
        D: Dom<Node = N>,
        S: PreferenceStore + ?Sized,
    {
        let next = attributed_mode(&*dom).toggled();

        dom.set_glyph(&self.button, next.glyph());
        dom.set_root_attribute(THEME_ATTRIBUTE, next.as_str());
        if let Err(err) = store.set(&self.storage_key, next.as_str()) {
            log::warn!("theme: could not persist {next}: {err}");
        }
        apply_variables(dom, next);

        self.mode = next;
        log::debug!("theme: switched to {next}");
        next
    }
}
