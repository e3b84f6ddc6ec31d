//! Internationalization for `manasik-ui`.
//!
//! All UI strings live in one embedded JSON table, keyed by dotted ids with
//! both locales required per entry:
//! ```text
//! i18n/translations.json
//!   { "nav.home": { "en": "Home", "ar": "الرئيسية" }, ... }
//! ```
//! Lookup never fails: exact locale first, then English, then the key itself.
//! A key rendering verbatim in the UI is the visible symptom of a missing
//! entry; the completeness tests catch that before it ships.
//!
//! Adding a string:
//! 1. Add the entry to `i18n/translations.json` with *both* locales filled.
//! 2. Reference it through `PrefsContext::tr` (components) or
//!    `I18nService::translate` (services).
//! 3. `cargo test -p manasik-ui` re-audits the table.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::prefs::Language;

const TABLE_JSON: &str = include_str!("../i18n/translations.json");

/// One translation record. Both locales are non-optional, so a partial entry
/// is a parse error rather than a runtime surprise.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub en: String,
    pub ar: String,
}

impl Entry {
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

pub type TranslationTable = BTreeMap<String, Entry>;

/// Parsed translation table, built once from the embedded asset.
pub static TRANSLATIONS: Lazy<TranslationTable> =
    Lazy::new(|| serde_json::from_str(TABLE_JSON).expect("valid embedded translation table"));

/// Resolves `key` for `language`: exact locale, then English, then the key
/// itself.
pub fn resolve(key: &str, language: Language) -> String {
    resolve_in(&TRANSLATIONS, key, language)
}

fn resolve_in(table: &TranslationTable, key: &str, language: Language) -> String {
    if let Some(entry) = table.get(key) {
        let exact = entry.text(language);
        if !exact.is_empty() {
            return exact.to_string();
        }
        if !entry.en.is_empty() {
            return entry.en.clone();
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_parses_and_is_not_empty() {
        assert!(TRANSLATIONS.len() >= 24, "table lost its baseline entries");
    }

    #[test]
    fn resolves_each_locale() {
        assert_eq!(resolve("nav.home", Language::En), "Home");
        assert_eq!(resolve("nav.home", Language::Ar), "الرئيسية");
        assert_eq!(resolve("common.loading", Language::Ar), "جاري التحميل...");
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        assert_eq!(resolve("nav.nonexistent", Language::En), "nav.nonexistent");
        assert_eq!(resolve("nav.nonexistent", Language::Ar), "nav.nonexistent");
    }

    #[test]
    fn empty_locale_falls_back_to_english() {
        let mut table = TranslationTable::new();
        table.insert(
            "greeting".to_string(),
            Entry {
                en: "Hello".to_string(),
                ar: String::new(),
            },
        );
        assert_eq!(resolve_in(&table, "greeting", Language::Ar), "Hello");

        table.insert(
            "blank".to_string(),
            Entry {
                en: String::new(),
                ar: String::new(),
            },
        );
        assert_eq!(resolve_in(&table, "blank", Language::Ar), "blank");
    }

    #[test]
    fn every_entry_carries_both_locales() {
        for (key, entry) in TRANSLATIONS.iter() {
            assert!(!entry.en.trim().is_empty(), "{key} has an empty en text");
            assert!(!entry.ar.trim().is_empty(), "{key} has an empty ar text");
        }
    }
}
