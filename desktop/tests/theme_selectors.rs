#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (hero slider,
  listing cards, the preference-driven theme tokens) remain present in the
  unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for cards, search bars, status lines, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__title",
    ".page__status",
    ".page__status--error",
    // Theme switching hooks (set on <html> by the preference layer)
    ".dark {",
    "[dir=\"rtl\"]",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Search bars
    ".search-bar {",
    ".search-bar__field",
    ".search-bar__input",
    // Hero slider
    ".hero {",
    ".hero__slide",
    ".hero__copy",
    ".hero__cta",
    ".hero__arrow--prev",
    ".hero__arrow--next",
    ".hero__dot--active",
    // Listing cards
    ".card-grid",
    ".hotel-card",
    ".hotel-card__amenity",
    ".hotel-card__link",
    ".hotel-card__price",
    // Hotel detail & rooms
    ".hotel-detail__header",
    ".room-card",
    ".room-card__availability--out",
    ".package-card",
    ".package-card__price--strike",
    ".flight-card",
    ".flight-card__seats",
    ".ground-card",
    // Login
    ".login-card",
    ".login-card__status--error",
    // Home & footer
    ".home__section",
    ".footer",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn palette_tokens_stay_paired() {
    // The runtime reflector sets --primary / --primary-rgb inline; the
    // stylesheet must declare the same pairs so unhydrated markup matches.
    let pairs = [
        ("#0e7c3b", "14, 124, 59"),
        ("#d4af37", "212, 175, 55"),
    ];
    for (hex, rgb) in pairs {
        assert!(
            THEME_CSS.contains(hex) && THEME_CSS.contains(rgb),
            "Palette pair out of sync in theme (hex: {hex}, rgb: {rgb})"
        );
    }
    assert!(
        THEME_CSS.contains(".dark {"),
        "Dark token block missing from theme"
    );
}
