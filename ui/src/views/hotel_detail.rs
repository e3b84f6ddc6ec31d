use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;

use crate::core::format::{format_distance_km, format_price, format_rating};
use crate::prefs::use_prefs;

/// One hotel with its room inventory. Reached from the hotel cards; the id
/// comes from the platform route.
#[component]
pub fn HotelDetail(id: String) -> Element {
    let prefs = use_prefs();
    let client = use_context::<Rc<ApiClient>>();

    let hotel_client = Rc::clone(&client);
    let hotel_id = id.clone();
    let hotel = use_resource(move || {
        let client = Rc::clone(&hotel_client);
        let id = hotel_id.clone();
        async move { client.hotel(&id).await }
    });

    let rooms_client = Rc::clone(&client);
    let rooms_id = id.clone();
    let rooms = use_resource(move || {
        let client = Rc::clone(&rooms_client);
        let id = rooms_id.clone();
        async move { client.rooms(&id).await }
    });

    let loading = prefs.tr("common.loading");
    let error_text = prefs.tr("common.error");
    let empty = prefs.tr("common.empty");
    let rooms_title = prefs.tr("hotels.rooms");
    let per_night = prefs.tr("hotels.perNight");

    let header = match &*hotel.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(hotel)) => {
            let name = hotel.name.clone();
            let location = format!("{}, {}", hotel.city, hotel.country);
            let image = hotel.image_url.clone();
            let description = hotel.description.clone();
            let rating = format_rating(hotel.rating);
            let price = format_price(hotel.price_per_night);
            let distance = hotel.distance_from_haram.map(|km| {
                format!("{} {}", format_distance_km(km), prefs.tr("hotels.kmFromHaram"))
            });
            let amenities = hotel.amenities.clone();
            rsx! {
                header { class: "hotel-detail__header",
                    img { class: "hotel-detail__media", src: "{image}", alt: "{name}" }
                    div { class: "hotel-detail__summary",
                        h1 { class: "page__title", "{name}" }
                        p { class: "hotel-detail__meta", "{location} · {rating}" }
                        if let Some(distance) = distance {
                            p { class: "hotel-card__distance", "{distance}" }
                        }
                        p { class: "hotel-detail__description", "{description}" }
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
        }
    };

    let rooms_body = match &*rooms.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "page__status", "{empty}" } },
        Some(Ok(list)) => rsx! {
            ul { class: "room-list",
                { list.iter().map(|room| {
                    let name = room.name.clone();
                    let description = room.description.clone();
                    let price = format_price(room.price_per_night);
                    let sleeps = format!("{} {}", prefs.tr("hotels.sleeps"), room.max_occupancy);
                    let availability = if room.available {
                        prefs.tr("hotels.available")
                    } else {
                        prefs.tr("hotels.soldOut")
                    };
                    let availability_class = if room.available {
                        "room-card__availability"
                    } else {
                        "room-card__availability room-card__availability--out"
                    };
                    rsx! {
                        li { key: "{room.id}", class: "room-card",
                            div { class: "room-card__body",
                                strong { class: "room-card__name", "{name}" }
                                p { class: "room-card__description", "{description}" }
                                span { class: "room-card__sleeps", "{sleeps}" }
                            }
                            div { class: "room-card__side",
                                span { class: "{availability_class}", "{availability}" }
                                span { class: "room-card__price",
                                    strong { "{price}" }
                                    " {per_night}"
                                }
                            }
                        }
                    }
                })}
            }
        },
    };

    rsx! {
        section { class: "page page-hotel-detail",
            {header}

            div { class: "hotel-detail__rooms",
                h2 { class: "transport-section__title", "{rooms_title}" }
                {rooms_body}
            }
        }
    }
}
