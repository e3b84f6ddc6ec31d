//! Dioxus bindings for the preference services.
//!
//! The services themselves know nothing about rendering; a third subscriber
//! mirrors each cell into a `Signal`, so every component reading through
//! [`PrefsContext`] re-renders when a preference changes. No keyed remounts,
//! no hidden marker nodes.

use std::rc::Rc;

use dioxus::prelude::*;

use super::reflect::DocumentReflector;
use super::service::Prefs;
use super::store::PreferenceStore;
use super::{Language, Theme};
use crate::i18n;

#[derive(Clone)]
pub struct PrefsContext {
    prefs: Rc<Prefs>,
    language: Signal<Language>,
    theme: Signal<Theme>,
}

impl PrefsContext {
    /// Current language; reading it subscribes the component.
    pub fn language(&self) -> Language {
        (self.language)()
    }

    /// Current theme; reading it subscribes the component.
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    /// Localized text for `key` in the current language. Reactive: a language
    /// toggle re-renders every component that called this.
    pub fn tr(&self, key: &str) -> String {
        i18n::resolve(key, (self.language)())
    }

    pub fn dir(&self) -> &'static str {
        (self.language)().dir()
    }

    pub fn set_language(&self, language: Language) {
        self.prefs.i18n.set_language(language);
    }

    pub fn toggle_language(&self) {
        self.prefs.i18n.toggle_language();
    }

    pub fn set_theme(&self, theme: Theme) {
        self.prefs.theme.set_theme(theme);
    }

    pub fn toggle_theme(&self) {
        self.prefs.theme.toggle_theme();
    }
}

/// Bootstraps the preference services and provides them to the subtree.
/// Call once at each platform's app root with that platform's store and
/// reflector.
pub fn use_prefs_provider(
    store: Rc<dyn PreferenceStore>,
    document: Rc<dyn DocumentReflector>,
) -> PrefsContext {
    let context = use_hook(move || {
        let prefs = Prefs::bootstrap(store, document);

        let language = Signal::new(prefs.i18n.language());
        let theme = Signal::new(prefs.theme.theme());

        {
            let signal = language;
            prefs.i18n.subscribe(move |value| {
                let mut signal = signal;
                signal.set(value);
            });
        }
        {
            let signal = theme;
            prefs.theme.subscribe(move |value| {
                let mut signal = signal;
                signal.set(value);
            });
        }

        PrefsContext {
            prefs,
            language,
            theme,
        }
    });

    use_context_provider(|| context.clone())
}

/// The context installed by [`use_prefs_provider`].
pub fn use_prefs() -> PrefsContext {
    use_context::<PrefsContext>()
}
