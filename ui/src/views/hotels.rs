use std::rc::Rc;

use api::{ApiClient, HotelSearchParams};
use dioxus::prelude::*;

use crate::components::app_navbar::nav_builder;
use crate::core::format::{format_distance_km, format_price, format_rating};
use crate::prefs::use_prefs;

#[component]
pub fn Hotels() -> Element {
    let prefs = use_prefs();
    let client = use_context::<Rc<ApiClient>>();

    let mut city = use_signal(String::new);
    let mut guests = use_signal(String::new);
    let filters = use_signal(HotelSearchParams::default);

    let hotels = use_resource(move || {
        let client = Rc::clone(&client);
        let params = filters();
        async move { client.hotels(&params).await }
    });

    let mut filters_out = filters;
    let on_search = move |_| {
        let city_value = city().trim().to_string();
        let params = HotelSearchParams {
            city: (!city_value.is_empty()).then_some(city_value),
            guests: guests().trim().parse().ok(),
            ..Default::default()
        };
        filters_out.set(params);
    };

    let title = prefs.tr("nav.hotels");
    let city_label = prefs.tr("hotels.city");
    let guests_label = prefs.tr("hotels.guests");
    let search_label = prefs.tr("common.search");
    let loading = prefs.tr("common.loading");
    let error_text = prefs.tr("common.error");
    let empty = prefs.tr("common.empty");

    let body = match &*hotels.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "page__status", "{empty}" } },
        Some(Ok(list)) => rsx! {
            div { class: "card-grid",
                { list.iter().map(|hotel| {
                    let name = hotel.name.clone();
                    let location = format!("{}, {}", hotel.city, hotel.country);
                    let image = hotel.image_url.clone();
                    let rating = format_rating(hotel.rating);
                    let price = format_price(hotel.price_per_night);
                    let per_night = prefs.tr("hotels.perNight");
                    let distance = hotel.distance_from_haram.map(|km| {
                        format!("{} {}", format_distance_km(km), prefs.tr("hotels.kmFromHaram"))
                    });
                    let amenities = hotel.amenities.iter().take(4).cloned().collect::<Vec<_>>();
                    // Platform-built link into the details route; headless
                    // hosts fall back to the plain name.
                    let title_link = nav_builder().map(|builder| (builder.hotel)(&hotel.id, &name));
                    rsx! {
                        article { key: "{hotel.id}", class: "hotel-card",
                            img { class: "hotel-card__media", src: "{image}", alt: "{name}" }
                            div { class: "hotel-card__body",
                                if let Some(link) = title_link {
                                    h3 { class: "hotel-card__name", {link} }
                                } else {
                                    h3 { class: "hotel-card__name", "{name}" }
                                }
                                p { class: "hotel-card__meta", "{location} · {rating}" }
                                if let Some(distance) = distance {
                                    p { class: "hotel-card__distance", "{distance}" }
                                }
                                if !amenities.is_empty() {
                                    ul { class: "hotel-card__amenities",
                                        { amenities.iter().map(|amenity| rsx! {
                                            li { key: "{amenity}", class: "hotel-card__amenity", "{amenity}" }
                                        })}
                                    }
                                }
                                p { class: "hotel-card__price", strong { "{price}" } " {per_night}" }
                            }
                        }
                    }
                })}
            }
        },
    };

    rsx! {
        section { class: "page page-hotels",
            h1 { class: "page__title", "{title}" }

            div { class: "search-bar",
                div { class: "search-bar__field",
                    label { class: "search-bar__label", r#for: "hotel-city", "{city_label}" }
                    input {
                        id: "hotel-city",
                        class: "search-bar__input",
                        r#type: "text",
                        value: "{city}",
                        oninput: move |evt| city.set(evt.value()),
                    }
                }
                div { class: "search-bar__field",
                    label { class: "search-bar__label", r#for: "hotel-guests", "{guests_label}" }
                    input {
                        id: "hotel-guests",
                        class: "search-bar__input",
                        r#type: "number",
                        min: "1",
                        value: "{guests}",
                        oninput: move |evt| guests.set(evt.value()),
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: on_search,
                    "{search_label}"
                }
            }

            {body}
        }
    }
}
