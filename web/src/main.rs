use std::rc::Rc;

use dioxus::prelude::*;

use api::ApiClient;
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppFooter, AppNavbar};
use ui::prefs::{use_prefs_provider, DocumentReflector, PreferenceStore};
use ui::session::use_session_provider;
use ui::session::use_session_refresh;
use ui::views::{Home, HotelDetail, Hotels, Login, Packages, Register, Transport};

#[cfg(target_arch = "wasm32")]
use ui::prefs::{BrowserDocument, BrowserStorage};
#[cfg(not(target_arch = "wasm32"))]
use ui::prefs::{HeadlessDocument, MemoryStore};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

const FAVICON: Asset = asset!("/assets/favicon.ico");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_hotels(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Hotels {},
        "{label}"
    })
}
fn nav_transport(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Transport {},
        "{label}"
    })
}
fn nav_packages(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Packages {},
        "{label}"
    })
}
fn nav_login(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Login {},
        "{label}"
    })
}
fn nav_register(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Register {},
        "{label}"
    })
}
fn nav_hotel(id: &str, label: &str) -> Element {
    let id = id.to_string();
    rsx!(Link {
        class: "hotel-card__link",
        to: Route::HotelDetail { id },
        "{label}"
    })
}
fn nav_cta(label: &str) -> Element {
    rsx!(Link {
        class: "button button--primary hero__cta",
        to: Route::Packages {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        // Register localized navigation builder (Option A)
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
    }

    // localStorage backs both the preference layer and the auth session. The
    // non-wasm arms only exist so `--features server` builds type-check; SSR
    // output is re-hydrated with the browser-backed stores on the client.
    #[cfg(target_arch = "wasm32")]
    let store: Rc<dyn PreferenceStore> = Rc::new(BrowserStorage::new());
    #[cfg(not(target_arch = "wasm32"))]
    let store: Rc<dyn PreferenceStore> = Rc::new(MemoryStore::new());

    #[cfg(target_arch = "wasm32")]
    let reflector: Rc<dyn DocumentReflector> = Rc::new(BrowserDocument::new());
    #[cfg(not(target_arch = "wasm32"))]
    let reflector: Rc<dyn DocumentReflector> = Rc::new(HeadlessDocument::new());

    use_prefs_provider(store.clone(), reflector);
    use_session_provider(store);
    let client = use_context_provider(|| Rc::new(ApiClient::from_env()));
    use_session_refresh(client);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}

        AppFooter { }
    }
}
