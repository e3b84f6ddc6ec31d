//! Preference services: restore on boot, then reflect, persist, and notify on
//! every change.
//!
//! Construction happens once at each platform's app root; the services travel
//! through context from there. Store and reflector failures are logged and
//! swallowed here, and only here: the in-memory value stays authoritative for
//! the session either way.

use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};

use super::cell::PreferenceCell;
use super::reflect::DocumentReflector;
use super::store::{PreferenceStore, LANGUAGE_KEY, LEGACY_DARK_KEY, THEME_KEY};
use super::{Language, Theme};
use crate::i18n;

/// Language service: one cell, the translation table, and the `lang`/`dir`
/// reflection.
pub struct I18nService {
    cell: PreferenceCell<Language>,
}

impl I18nService {
    fn bootstrap(store: Rc<dyn PreferenceStore>, document: Rc<dyn DocumentReflector>) -> Self {
        let cell = PreferenceCell::new(initial_language(store.as_ref()));

        {
            let document = Rc::clone(&document);
            cell.subscribe(move |language: Language| {
                if let Err(err) = document.apply_language(language) {
                    warn!(%err, "language not reflected into the document");
                }
            });
        }
        {
            let store = Rc::clone(&store);
            cell.subscribe(move |language: Language| {
                if let Err(err) = store.write(LANGUAGE_KEY, language.code()) {
                    warn!(%err, "language not persisted");
                }
            });
        }

        Self { cell }
    }

    pub fn language(&self) -> Language {
        self.cell.get()
    }

    pub fn set_language(&self, language: Language) {
        self.cell.set(language);
    }

    pub fn toggle_language(&self) -> Language {
        self.cell.toggle()
    }

    pub fn translate(&self, key: &str) -> String {
        i18n::resolve(key, self.cell.get())
    }

    pub fn is_rtl(&self) -> bool {
        self.cell.get() == Language::Ar
    }

    pub fn dir(&self) -> &'static str {
        self.cell.get().dir()
    }

    pub fn subscribe(&self, subscriber: impl Fn(Language) + 'static) {
        self.cell.subscribe(subscriber);
    }

    fn replay(&self) {
        self.cell.replay();
    }
}

/// Theme service: one cell plus the `dark` class / palette reflection.
pub struct ThemeService {
    cell: PreferenceCell<Theme>,
}

impl ThemeService {
    fn bootstrap(store: Rc<dyn PreferenceStore>, document: Rc<dyn DocumentReflector>) -> Self {
        Self::bootstrap_with(store, document, system_theme)
    }

    /// Like `bootstrap` with the system probe injected, so tests control what
    /// "the system prefers dark" means.
    pub fn bootstrap_with(
        store: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentReflector>,
        probe: fn() -> Theme,
    ) -> Self {
        let cell = PreferenceCell::new(initial_theme(store.as_ref(), probe));

        {
            let document = Rc::clone(&document);
            cell.subscribe(move |theme: Theme| {
                if let Err(err) = document.apply_theme(theme) {
                    warn!(%err, "theme not reflected into the document");
                }
            });
        }
        {
            let store = Rc::clone(&store);
            cell.subscribe(move |theme: Theme| {
                if let Err(err) = store.write(THEME_KEY, theme.code()) {
                    warn!(%err, "theme not persisted");
                }
            });
        }

        Self { cell }
    }

    pub fn theme(&self) -> Theme {
        self.cell.get()
    }

    pub fn is_dark(&self) -> bool {
        self.cell.get().is_dark()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.cell.set(theme);
    }

    pub fn toggle_theme(&self) -> Theme {
        self.cell.toggle()
    }

    pub fn subscribe(&self, subscriber: impl Fn(Theme) + 'static) {
        self.cell.subscribe(subscriber);
    }

    fn replay(&self) {
        self.cell.replay();
    }
}

/// Both services behind one handle, sharing a store and a reflector.
pub struct Prefs {
    pub i18n: I18nService,
    pub theme: ThemeService,
}

impl Prefs {
    /// Builds and replays both services. Call once at the app root; every
    /// consumer gets the same instance through context.
    pub fn bootstrap(
        store: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentReflector>,
    ) -> Rc<Self> {
        Self::bootstrap_with(store, document, system_theme)
    }

    pub fn bootstrap_with(
        store: Rc<dyn PreferenceStore>,
        document: Rc<dyn DocumentReflector>,
        probe: fn() -> Theme,
    ) -> Rc<Self> {
        let prefs = Rc::new(Self {
            i18n: I18nService::bootstrap(Rc::clone(&store), Rc::clone(&document)),
            theme: ThemeService::bootstrap_with(store, document, probe),
        });

        // One replay each: the restored values get applied to the document
        // and written back in canonical form.
        prefs.i18n.replay();
        prefs.theme.replay();
        prefs
    }
}

fn initial_language(store: &dyn PreferenceStore) -> Language {
    match store.read(LANGUAGE_KEY) {
        Ok(Some(raw)) => Language::parse(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "ignoring unrecognised stored language");
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(err) => {
            warn!(%err, "stored language unavailable");
            Language::default()
        }
    }
}

fn initial_theme(store: &dyn PreferenceStore, probe: fn() -> Theme) -> Theme {
    match store.read(THEME_KEY) {
        Ok(Some(raw)) => match Theme::parse(&raw) {
            Some(theme) => return theme,
            None => warn!(value = %raw, "ignoring unrecognised stored theme"),
        },
        Ok(None) => {}
        Err(err) => warn!(%err, "stored theme unavailable"),
    }

    if let Some(theme) = migrate_legacy_dark(store) {
        return theme;
    }

    probe()
}

/// One-shot migration of the pre-rebrand `app_dark` flag ("1"/"0"). The value
/// wins over the system probe; the key is removed so this runs once.
fn migrate_legacy_dark(store: &dyn PreferenceStore) -> Option<Theme> {
    let raw = store.read(LEGACY_DARK_KEY).ok().flatten()?;
    let theme = match raw.as_str() {
        "1" => Theme::Dark,
        "0" => Theme::Light,
        _ => return None,
    };
    debug!(theme = theme.code(), "migrated legacy dark-mode flag");
    if store.remove(LEGACY_DARK_KEY).is_err() {
        warn!("legacy dark-mode flag could not be removed");
    }
    Some(theme)
}

/// What the host system prefers when no theme has been stored yet. Light is
/// the answer whenever the platform cannot tell us otherwise.
#[cfg(target_arch = "wasm32")]
fn system_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn system_theme() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Theme::Dark,
        _ => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::reflect::HeadlessDocument;
    use crate::prefs::store::{MemoryStore, StoreError};
    use std::cell::RefCell;

    fn light_probe() -> Theme {
        Theme::Light
    }

    fn dark_probe() -> Theme {
        Theme::Dark
    }

    fn boot(
        store: Rc<MemoryStore>,
        probe: fn() -> Theme,
    ) -> (Rc<Prefs>, Rc<HeadlessDocument>) {
        let document = Rc::new(HeadlessDocument::new());
        let prefs = Prefs::bootstrap_with(
            Rc::clone(&store) as Rc<dyn PreferenceStore>,
            Rc::clone(&document) as Rc<dyn DocumentReflector>,
            probe,
        );
        (prefs, document)
    }

    #[test]
    fn fresh_boot_defaults_to_english_light() {
        let store = Rc::new(MemoryStore::new());
        let (prefs, document) = boot(Rc::clone(&store), light_probe);

        assert_eq!(prefs.i18n.language(), Language::En);
        assert_eq!(prefs.theme.theme(), Theme::Light);

        // Replay applied the defaults and wrote them back canonically.
        let state = document.snapshot();
        assert_eq!(state.lang.as_deref(), Some("en"));
        assert_eq!(state.dir.as_deref(), Some("ltr"));
        assert!(!state.dark_class);
        assert_eq!(state.primary.as_deref(), Some("#0e7c3b"));
        assert_eq!(store.read(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn stored_preferences_win_over_probe() {
        let store = Rc::new(MemoryStore::seeded(&[
            (LANGUAGE_KEY, "ar"),
            (THEME_KEY, "dark"),
        ]));
        let (prefs, document) = boot(store, light_probe);

        assert_eq!(prefs.i18n.language(), Language::Ar);
        assert_eq!(prefs.theme.theme(), Theme::Dark);

        let state = document.snapshot();
        assert_eq!(state.lang.as_deref(), Some("ar"));
        assert_eq!(state.dir.as_deref(), Some("rtl"));
        assert!(state.dark_class);
        assert_eq!(state.primary.as_deref(), Some("#d4af37"));
        assert_eq!(state.primary_rgb.as_deref(), Some("212,175,55"));
    }

    #[test]
    fn dark_system_preference_seeds_dark_theme() {
        let store = Rc::new(MemoryStore::new());
        let (prefs, _) = boot(Rc::clone(&store), dark_probe);

        assert_eq!(prefs.theme.theme(), Theme::Dark);
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn unrecognised_stored_values_fall_back() {
        let store = Rc::new(MemoryStore::seeded(&[
            (LANGUAGE_KEY, "fr"),
            (THEME_KEY, "sepia"),
        ]));
        let (prefs, _) = boot(store, light_probe);

        assert_eq!(prefs.i18n.language(), Language::En);
        assert_eq!(prefs.theme.theme(), Theme::Light);
    }

    #[test]
    fn legacy_dark_flag_migrates_and_disappears() {
        let store = Rc::new(MemoryStore::seeded(&[(LEGACY_DARK_KEY, "1")]));
        let (prefs, _) = boot(Rc::clone(&store), light_probe);

        assert_eq!(prefs.theme.theme(), Theme::Dark);
        assert_eq!(store.read(LEGACY_DARK_KEY).unwrap(), None);
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn legacy_light_flag_migrates_too() {
        let store = Rc::new(MemoryStore::seeded(&[(LEGACY_DARK_KEY, "0")]));
        let (prefs, _) = boot(Rc::clone(&store), dark_probe);

        // "0" beats the dark probe: an explicit choice is still a choice.
        assert_eq!(prefs.theme.theme(), Theme::Light);
        assert_eq!(store.read(LEGACY_DARK_KEY).unwrap(), None);
    }

    #[test]
    fn canonical_theme_key_wins_over_legacy_flag() {
        let store = Rc::new(MemoryStore::seeded(&[
            (THEME_KEY, "light"),
            (LEGACY_DARK_KEY, "1"),
        ]));
        let (prefs, _) = boot(store, light_probe);

        assert_eq!(prefs.theme.theme(), Theme::Light);
    }

    #[test]
    fn garbage_legacy_flag_is_ignored() {
        let store = Rc::new(MemoryStore::seeded(&[(LEGACY_DARK_KEY, "yes")]));
        let (prefs, _) = boot(Rc::clone(&store), light_probe);

        assert_eq!(prefs.theme.theme(), Theme::Light);
        // Unparseable flag stays put; we do not destroy data we cannot read.
        assert_eq!(
            store.read(LEGACY_DARK_KEY).unwrap().as_deref(),
            Some("yes")
        );
    }

    #[test]
    fn toggles_reflect_persist_and_round_trip() {
        let store = Rc::new(MemoryStore::new());
        let (prefs, document) = boot(Rc::clone(&store), light_probe);

        assert_eq!(prefs.theme.toggle_theme(), Theme::Dark);
        assert!(document.snapshot().dark_class);
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(prefs.theme.toggle_theme(), Theme::Light);
        assert!(!document.snapshot().dark_class);
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("light"));

        assert_eq!(prefs.i18n.toggle_language(), Language::Ar);
        assert_eq!(document.snapshot().dir.as_deref(), Some("rtl"));
        assert_eq!(store.read(LANGUAGE_KEY).unwrap().as_deref(), Some("ar"));
        assert!(prefs.i18n.is_rtl());
    }

    #[test]
    fn preferences_survive_a_rebuild_over_the_same_store() {
        let store = Rc::new(MemoryStore::new());
        {
            let (prefs, _) = boot(Rc::clone(&store), light_probe);
            prefs.i18n.set_language(Language::Ar);
            prefs.theme.set_theme(Theme::Dark);
        }

        // Simulated reload: new services, same backing store.
        let (prefs, document) = boot(Rc::clone(&store), light_probe);
        assert_eq!(prefs.i18n.language(), Language::Ar);
        assert_eq!(prefs.theme.theme(), Theme::Dark);
        assert_eq!(document.snapshot().dir.as_deref(), Some("rtl"));
        assert!(document.snapshot().dark_class);
    }

    #[test]
    fn translate_follows_the_current_language() {
        let store = Rc::new(MemoryStore::new());
        let (prefs, _) = boot(store, light_probe);

        assert_eq!(prefs.i18n.translate("nav.hotels"), "Hotels");
        prefs.i18n.set_language(Language::Ar);
        assert_eq!(prefs.i18n.translate("nav.hotels"), "الفنادق");

        let unknown = "no.such.key";
        assert_eq!(prefs.i18n.translate(unknown), unknown);
    }

    #[test]
    fn reflection_runs_before_persistence() {
        struct LedgerStore(Rc<RefCell<Vec<&'static str>>>);
        impl PreferenceStore for LedgerStore {
            fn read(&self, _: &str) -> Result<Option<String>, StoreError> {
                Ok(None)
            }
            fn write(&self, _: &str, _: &str) -> Result<(), StoreError> {
                self.0.borrow_mut().push("persist");
                Ok(())
            }
            fn remove(&self, _: &str) -> Result<(), StoreError> {
                Ok(())
            }
        }

        struct LedgerDoc(Rc<RefCell<Vec<&'static str>>>);
        impl DocumentReflector for LedgerDoc {
            fn apply_language(&self, _: Language) -> Result<(), crate::prefs::ReflectError> {
                self.0.borrow_mut().push("reflect");
                Ok(())
            }
            fn apply_theme(&self, _: Theme) -> Result<(), crate::prefs::ReflectError> {
                self.0.borrow_mut().push("reflect");
                Ok(())
            }
        }

        let ledger = Rc::new(RefCell::new(Vec::new()));
        let prefs = Prefs::bootstrap_with(
            Rc::new(LedgerStore(Rc::clone(&ledger))),
            Rc::new(LedgerDoc(Rc::clone(&ledger))),
            light_probe,
        );
        ledger.borrow_mut().clear();

        prefs.theme.set_theme(Theme::Dark);
        assert_eq!(*ledger.borrow(), vec!["reflect", "persist"]);
    }

    #[test]
    fn failing_store_does_not_block_the_session() {
        struct RejectingStore;
        impl PreferenceStore for RejectingStore {
            fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
                Err(StoreError::Read {
                    key: key.to_string(),
                })
            }
            fn write(&self, key: &str, _: &str) -> Result<(), StoreError> {
                Err(StoreError::Write {
                    key: key.to_string(),
                    reason: "storage disabled".to_string(),
                })
            }
            fn remove(&self, key: &str) -> Result<(), StoreError> {
                Err(StoreError::Write {
                    key: key.to_string(),
                    reason: "storage disabled".to_string(),
                })
            }
        }

        let document = Rc::new(HeadlessDocument::new());
        let prefs = Prefs::bootstrap_with(
            Rc::new(RejectingStore),
            Rc::clone(&document) as Rc<dyn DocumentReflector>,
            light_probe,
        );

        prefs.theme.set_theme(Theme::Dark);
        prefs.i18n.set_language(Language::Ar);

        // Value and reflection stay authoritative despite every write failing.
        assert_eq!(prefs.theme.theme(), Theme::Dark);
        assert_eq!(prefs.i18n.language(), Language::Ar);
        let state = document.snapshot();
        assert!(state.dark_class);
        assert_eq!(state.dir.as_deref(), Some("rtl"));
    }
}
