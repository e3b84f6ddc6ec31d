//! Shared UI crate for Manasik. Most cross-platform logic and views live here.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod prefs;
pub mod session;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod footer;
    pub use footer::AppFooter;

    pub mod hero;
    pub use hero::HeroSlider;
}

/// Unified shared theme. Web links it from the document head; desktop embeds
/// the same file with `include_str!` so packaged builds carry no loose assets.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
