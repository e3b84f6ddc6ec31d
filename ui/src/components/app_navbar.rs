use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::prefs::{use_prefs, Language};
use crate::session::SessionContext;

// Navbar stylesheet (kept separate from the main theme so the header styles
// travel with this component)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` never needs to know each platform's `Route` enum.
/// Each closure receives the localized label and returns a link that already
/// contains it.
///
/// Registration happens once at the platform root, before the first render:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     ...
/// });
/// ```
///
/// If no builder is registered the navbar falls back to any raw `children`
/// passed, so headless hosts still render something sensible.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub hotels: fn(label: &str) -> Element,
    pub transport: fn(label: &str) -> Element,
    pub packages: fn(label: &str) -> Element,
    pub login: fn(label: &str) -> Element,
    /// Sign-up link shown under the login form.
    pub register: fn(label: &str) -> Element,
    /// Per-hotel details link; receives the hotel id and the display label.
    pub hotel: fn(id: &str, label: &str) -> Element,
    /// Call-to-action link used by the hero slider (styled as a button).
    pub cta: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub(crate) fn nav_builder() -> Option<&'static NavBuilder> {
    NAV_BUILDER.get()
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let prefs = use_prefs();
    let session: Option<SessionContext> = try_use_context::<SessionContext>();
    let mut menu_open = use_signal(|| false);

    let language = prefs.language();
    let theme = prefs.theme();

    // Localized labels are rebuilt every render; the language signal read
    // above makes that reactive.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)(&prefs.tr("nav.home"));
        let hotels = (builder.hotels)(&prefs.tr("nav.hotels"));
        let transport = (builder.transport)(&prefs.tr("nav.transport"));
        let packages = (builder.packages)(&prefs.tr("nav.packages"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {hotels}
                {transport}
                {packages}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    // Collapsed-width copy of the same links. Any click inside the panel
    // (including on a link) closes it, so navigation puts the menu away.
    let mobile_nav: Option<VNode> = NAV_BUILDER.get().filter(|_| menu_open()).map(|builder| {
        let home = (builder.home)(&prefs.tr("nav.home"));
        let hotels = (builder.hotels)(&prefs.tr("nav.hotels"));
        let transport = (builder.transport)(&prefs.tr("nav.transport"));
        let packages = (builder.packages)(&prefs.tr("nav.packages"));

        rsx! {
            nav {
                class: "navbar__mobile",
                onclick: move |_| menu_open.set(false),
                {home}
                {hotels}
                {transport}
                {packages}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    // The language control shows the locale you would switch to.
    let language_label = match language {
        Language::En => "العربية",
        Language::Ar => "English",
    };
    let theme_glyph = if theme.is_dark() { "☀" } else { "🌙" };

    let brand_subtitle = prefs.tr("app.name");
    let language_title = prefs.tr("language.toggle");
    let theme_title = prefs.tr("theme.toggle");
    let menu_title = prefs.tr("nav.menu");
    let logout_label = prefs.tr("nav.logout");
    let login_label = prefs.tr("nav.login");

    let authenticated = session
        .as_ref()
        .map(|session| session.is_authenticated())
        .unwrap_or(false);

    let prefs_for_language = prefs.clone();
    let prefs_for_theme = prefs.clone();
    let session_for_logout = session.clone();

    rsx! {
        // Include the navbar stylesheet (and inline it in release native builds)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Manasik" }
                    }
                    span { class: "navbar__brand-subtitle", "{brand_subtitle}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__controls",
                    button {
                        r#type: "button",
                        class: "navbar__control navbar__control--language",
                        title: "{language_title}",
                        onclick: move |_| prefs_for_language.toggle_language(),
                        "{language_label}"
                    }
                    button {
                        r#type: "button",
                        class: "navbar__control navbar__control--theme",
                        aria_label: "{theme_title}",
                        onclick: move |_| prefs_for_theme.toggle_theme(),
                        "{theme_glyph}"
                    }
                    if authenticated {
                        button {
                            r#type: "button",
                            class: "navbar__control navbar__control--logout",
                            onclick: move |_| {
                                if let Some(session) = &session_for_logout {
                                    session.logout();
                                }
                            },
                            "{logout_label}"
                        }
                    } else if let Some(builder) = NAV_BUILDER.get() {
                        {(builder.login)(&login_label)}
                    }
                    button {
                        r#type: "button",
                        class: "navbar__control navbar__control--menu",
                        aria_label: "{menu_title}",
                        aria_expanded: menu_open(),
                        onclick: move |_| menu_open.toggle(),
                        "☰"
                    }
                }
            }

            if let Some(nav) = mobile_nav {
                {nav}
            }
        }
    }
}
