use std::collections::BTreeMap;

/// Translation table audit.
/// The UI embeds `ui/i18n/translations.json` at compile time; a malformed or
/// half-translated table only surfaces at runtime as English fallbacks, so we
/// lint the raw file here instead.
///
/// Checks:
/// - the table parses and is not trivially small
/// - every entry carries a non-empty `en` AND `ar` column (no partial rows)
/// - no stray locale columns sneak in
/// - key spelling stays in the dotted camelCase namespace
/// - no duplicate key definitions (serde would silently keep the last one)
///
/// If you add a locale, widen `LOCALES` and translate every existing key in
/// the same change; the second test will list what you missed.
const TABLE_JSON: &str = include_str!("../i18n/translations.json");

const LOCALES: &[&str] = &["en", "ar"];

fn parse_table() -> BTreeMap<String, BTreeMap<String, String>> {
    serde_json::from_str(TABLE_JSON).expect("translations.json failed to parse")
}

#[test]
fn table_parses_and_has_substance() {
    let table = parse_table();
    assert!(
        table.len() >= 24,
        "Translation table suspiciously small ({} keys) – was it truncated?",
        table.len()
    );
}

#[test]
fn every_key_has_every_locale() {
    let table = parse_table();
    let mut failures = Vec::new();

    for (key, entry) in &table {
        for locale in LOCALES {
            match entry.get(*locale) {
                Some(text) if !text.trim().is_empty() => {}
                Some(_) => failures.push(format!("{key}: empty `{locale}` column")),
                None => failures.push(format!("{key}: missing `{locale}` column")),
            }
        }
        for locale in entry.keys() {
            if !LOCALES.contains(&locale.as_str()) {
                failures.push(format!("{key}: unexpected locale column `{locale}`"));
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation table incomplete ({} problem(s)):\n  {}",
            failures.len(),
            failures.join("\n  ")
        );
    }
}

#[test]
fn keys_stay_in_the_dotted_namespace() {
    let table = parse_table();
    let offenders: Vec<_> = table
        .keys()
        .filter(|key| {
            key.is_empty()
                || key.starts_with('.')
                || key.ends_with('.')
                || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '.')
        })
        .cloned()
        .collect();

    assert!(
        offenders.is_empty(),
        "Keys outside the `section.name` convention:\n  {}",
        offenders.join("\n  ")
    );
}

#[test]
fn no_duplicate_key_definitions() {
    // serde_json keeps the last duplicate silently, so scan the raw text.
    let table = parse_table();
    let mut dups = Vec::new();

    for key in table.keys() {
        let needle = format!("\"{key}\":");
        let count = TABLE_JSON.matches(&needle).count();
        if count > 1 {
            dups.push(format!("{key} (defined {count} times)"));
        }
    }

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in translations.json:\n  {}",
        dups.join("\n  ")
    );
}

#[test]
fn embedded_loader_sees_the_same_table() {
    let table = parse_table();
    assert_eq!(
        ui::i18n::TRANSLATIONS.len(),
        table.len(),
        "ui::i18n embeds a different table than this test reads"
    );
}
