//! Visitor preferences: interface language and colour theme.
//!
//! Layered so everything below the Dioxus bindings runs without a live
//! document or renderer:
//! - [`store`] persists raw key/value pairs (localStorage, a config file, or
//!   plain memory),
//! - [`cell`] holds one value and notifies subscribers synchronously,
//! - [`reflect`] pushes a value into the document root,
//! - [`service`] ties the three together and owns restore/migration,
//! - [`context`] mirrors the services into Dioxus signals.

pub mod cell;
pub mod context;
pub mod reflect;
pub mod service;
pub mod store;

pub use cell::PreferenceCell;
pub use context::{use_prefs, use_prefs_provider, PrefsContext};
pub use reflect::{DocumentReflector, HeadlessDocument, ReflectError};
pub use service::{I18nService, Prefs, ThemeService};
pub use store::{MemoryStore, PreferenceStore, StoreError};

#[cfg(target_arch = "wasm32")]
pub use reflect::BrowserDocument;
#[cfg(not(target_arch = "wasm32"))]
pub use reflect::WebviewDocument;
#[cfg(target_arch = "wasm32")]
pub use store::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;

/// Preference values a toggle control can step through. For two-valued
/// preferences `next` is the complement, so two toggles land back where they
/// started; a future three-valued preference defines its own cycle order.
pub trait Cycle: Copy {
    fn next(self) -> Self;
}

/// Interface language. English is the fallback for every lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Canonical stored/attribute form.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Document text direction. Arabic is the only RTL locale we ship.
    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// Parses a stored code; anything unrecognised is `None`, never a guess.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

impl Cycle for Language {
    fn next(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Colour theme. The brand palette is fixed per theme: the Haram green in
/// light mode, the gilded gold in dark mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// `--primary` custom property value.
    pub fn primary_hex(self) -> &'static str {
        match self {
            Theme::Light => "#0e7c3b",
            Theme::Dark => "#d4af37",
        }
    }

    /// `--primary-rgb` custom property value (for `rgba(var(--primary-rgb), a)`).
    pub fn primary_rgb(self) -> &'static str {
        match self {
            Theme::Light => "14,124,59",
            Theme::Dark => "212,175,55",
        }
    }
}

impl Cycle for Theme {
    fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::En, Language::Ar] {
            assert_eq!(Language::parse(lang.code()), Some(lang));
        }
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse("EN"), None);
    }

    #[test]
    fn theme_codes_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.code()), Some(theme));
        }
        assert_eq!(Theme::parse("auto"), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Language::En.next().next(), Language::En);
        assert_eq!(Language::Ar.next().next(), Language::Ar);
        assert_eq!(Theme::Light.next().next(), Theme::Light);
        assert_eq!(Theme::Dark.next().next(), Theme::Dark);
    }

    #[test]
    fn arabic_is_the_only_rtl_locale() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
    }

    #[test]
    fn palette_is_fixed_per_theme() {
        assert_eq!(Theme::Light.primary_hex(), "#0e7c3b");
        assert_eq!(Theme::Light.primary_rgb(), "14,124,59");
        assert_eq!(Theme::Dark.primary_hex(), "#d4af37");
        assert_eq!(Theme::Dark.primary_rgb(), "212,175,55");
    }
}
