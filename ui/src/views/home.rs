use std::rc::Rc;

use api::{ApiClient, HotelSearchParams};
use dioxus::prelude::*;

use crate::components::app_navbar::nav_builder;
use crate::components::HeroSlider;
use crate::core::format::{format_price, format_rating};
use crate::prefs::use_prefs;

/// Landing page: rotating hero, a strip of featured hotels, and the most
/// popular packages.
#[component]
pub fn Home() -> Element {
    let prefs = use_prefs();
    let client = use_context::<Rc<ApiClient>>();

    let hotels_client = Rc::clone(&client);
    let hotels = use_resource(move || {
        let client = Rc::clone(&hotels_client);
        async move { client.hotels(&HotelSearchParams::default()).await }
    });

    let packages_client = Rc::clone(&client);
    let packages = use_resource(move || {
        let client = Rc::clone(&packages_client);
        async move { client.packages().await }
    });

    let loading = prefs.tr("common.loading");
    let error_text = prefs.tr("common.error");

    let hotels_body = match &*hotels.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(list)) => rsx! {
            div { class: "card-grid",
                { list.iter().take(3).map(|hotel| {
                    let name = hotel.name.clone();
                    let city = hotel.city.clone();
                    let image = hotel.image_url.clone();
                    let rating = format_rating(hotel.rating);
                    let price = format_price(hotel.price_per_night);
                    let per_night = prefs.tr("hotels.perNight");
                    rsx! {
                        article { key: "{hotel.id}", class: "hotel-card",
                            img { class: "hotel-card__media", src: "{image}", alt: "{name}" }
                            div { class: "hotel-card__body",
                                h3 { class: "hotel-card__name", "{name}" }
                                p { class: "hotel-card__meta", "{city} · {rating}" }
                                p { class: "hotel-card__price", strong { "{price}" } " {per_night}" }
                            }
                        }
                    }
                })}
            }
        },
    };

    let packages_body = match &*packages.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(list)) => rsx! {
            div { class: "card-grid",
                { list.iter().filter(|package| package.available).take(3).map(|package| {
                    let name = package.name.clone();
                    let image = package.image_url.clone();
                    let days = prefs.tr("packages.days");
                    let price = format_price(package.total_price);
                    rsx! {
                        article { key: "{package.id}", class: "package-card",
                            img { class: "package-card__media", src: "{image}", alt: "{name}" }
                            div { class: "package-card__body",
                                h3 { class: "package-card__name", "{name}" }
                                p { class: "package-card__duration", "{package.duration} {days}" }
                                p { class: "package-card__price", "{price}" }
                            }
                        }
                    }
                })}
            }
        },
    };

    let featured_title = prefs.tr("home.featuredHotels");
    let packages_title = prefs.tr("home.popularPackages");
    let view_all = prefs.tr("home.viewAll");
    let hotels_link = nav_builder().map(|builder| (builder.hotels)(&view_all));
    let packages_link = nav_builder().map(|builder| (builder.packages)(&view_all));

    rsx! {
        HeroSlider {}

        section { class: "page page-home",
            div { class: "home__section",
                header { class: "home__section-header",
                    h2 { class: "home__section-title", "{featured_title}" }
                    if let Some(link) = hotels_link {
                        span { class: "home__viewall", {link} }
                    }
                }
                {hotels_body}
            }

            div { class: "home__section",
                header { class: "home__section-header",
                    h2 { class: "home__section-title", "{packages_title}" }
                    if let Some(link) = packages_link {
                        span { class: "home__viewall", {link} }
                    }
                }
                {packages_body}
            }
        }
    }
}
