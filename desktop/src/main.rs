#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::rc::Rc;

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use api::ApiClient;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppFooter, AppNavbar};
use ui::prefs::{use_prefs_provider, FileStore, MemoryStore, PreferenceStore, WebviewDocument};
use ui::session::{use_session_provider, use_session_refresh};
use ui::views::{Home, HotelDetail, Hotels, Login, Packages, Register, Transport};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/hotels")]
    Hotels {},
    #[route("/hotels/:id")]
    HotelDetail { id: String },
    #[route("/transport")]
    Transport {},
    #[route("/packages")]
    Packages {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Manasik – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_hotels(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Hotels {}, "{label}" })
}
fn nav_transport(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Transport {}, "{label}" })
}
fn nav_packages(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Packages {}, "{label}" })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Login {}, "{label}" })
}
fn nav_register(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Register {}, "{label}" })
}
fn nav_hotel(id: &str, label: &str) -> Element {
    let id = id.to_string();
    rsx!(Link { class: "hotel-card__link", to: Route::HotelDetail { id }, "{label}" })
}
fn nav_cta(label: &str) -> Element {
    rsx!(Link {
        class: "button button--primary hero__cta",
        to: Route::Packages {},
        "{label}"
    })
}

#[component]
fn App() -> Element {
    // Register localized navigation builder (desktop)
    register_nav(NavBuilder {
        home: nav_home,
        hotels: nav_hotels,
        transport: nav_transport,
        packages: nav_packages,
        login: nav_login,
        register: nav_register,
        hotel: nav_hotel,
        cta: nav_cta,
    });

    // Preferences and the auth session live in a JSON file under the OS
    // config directory. A read-only or misconfigured home still gets a
    // working app, just one that forgets its settings on exit.
    let store: Rc<dyn PreferenceStore> = use_hook(|| match FileStore::open_default() {
        Ok(file) => Rc::new(file) as Rc<dyn PreferenceStore>,
        Err(err) => {
            warn!(%err, "preferences file unavailable; settings will not persist");
            Rc::new(MemoryStore::new())
        }
    });

    use_prefs_provider(store.clone(), Rc::new(WebviewDocument::new()));
    use_session_provider(store);
    let client = use_context_provider(|| Rc::new(ApiClient::from_env()));
    use_session_refresh(client);

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Global app resources
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}

        AppFooter { }
    }
}
