use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;

use crate::core::format::{format_departure, format_price};
use crate::prefs::use_prefs;

/// Ground categories the backend recognises, paired with their label keys.
const GROUND_TYPES: &[(&str, &str)] = &[
    ("bus", "transport.type.bus"),
    ("car", "transport.type.car"),
    ("train", "transport.type.train"),
];

/// What the flight list is currently narrowed by. The two search bars write
/// here; blank submissions fall back to the full listing.
#[derive(Debug, Clone, PartialEq)]
enum FlightQuery {
    All,
    Route { from: String, to: String },
    Dates { start: String, back: String },
}

/// Route search needs both airports; IATA codes are stored upper-case.
fn route_query(from: &str, to: &str) -> FlightQuery {
    let from = from.trim().to_uppercase();
    let to = to.trim().to_uppercase();
    if from.is_empty() || to.is_empty() {
        FlightQuery::All
    } else {
        FlightQuery::Route { from, to }
    }
}

/// Date search needs both ends of the range.
fn date_query(start: &str, back: &str) -> FlightQuery {
    let start = start.trim().to_string();
    let back = back.trim().to_string();
    if start.is_empty() || back.is_empty() {
        FlightQuery::All
    } else {
        FlightQuery::Dates { start, back }
    }
}

#[component]
pub fn Transport() -> Element {
    let prefs = use_prefs();
    let client = use_context::<Rc<ApiClient>>();

    let mut departure = use_signal(String::new);
    let mut arrival = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut return_date = use_signal(String::new);
    let query = use_signal(|| FlightQuery::All);
    let ground_type = use_signal(|| GROUND_TYPES[0].0.to_string());

    let flights_client = Rc::clone(&client);
    let flights = use_resource(move || {
        let client = Rc::clone(&flights_client);
        let query = query();
        async move {
            match query {
                FlightQuery::All => client.transports().await,
                FlightQuery::Route { from, to } => client.search_by_route(&from, &to).await,
                FlightQuery::Dates { start, back } => {
                    client.search_by_date_range(&start, &back).await
                }
            }
        }
    });

    let ground_client = Rc::clone(&client);
    let ground = use_resource(move || {
        let client = Rc::clone(&ground_client);
        let kind = ground_type();
        async move { client.ground_transports(&kind).await }
    });

    let mut route_out = query;
    let on_route_search = move |_| route_out.set(route_query(&departure(), &arrival()));
    let mut dates_out = query;
    let on_date_search = move |_| dates_out.set(date_query(&start_date(), &return_date()));

    let title = prefs.tr("nav.transport");
    let flights_title = prefs.tr("transport.flights");
    let ground_title = prefs.tr("transport.ground");
    let departure_label = prefs.tr("transport.departure");
    let arrival_label = prefs.tr("transport.arrival");
    let start_label = prefs.tr("transport.departureDate");
    let return_label = prefs.tr("transport.returnDate");
    let type_label = prefs.tr("transport.type");
    let search_label = prefs.tr("common.search");
    let seats_label = prefs.tr("transport.seats");
    let loading = prefs.tr("common.loading");
    let error_text = prefs.tr("common.error");
    let empty = prefs.tr("common.empty");

    let flights_body = match &*flights.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "page__status", "{empty}" } },
        Some(Ok(list)) => rsx! {
            ul { class: "flight-list",
                { list.iter().map(|flight| {
                    let airline = flight.airline.clone();
                    let flight_number = flight.flight_number.clone().unwrap_or_default();
                    let legs = format!("{} → {}", flight.departure_airport, flight.arrival_airport);
                    let departs = format_departure(&flight.departure_date);
                    let price = format_price(flight.price);
                    rsx! {
                        li { key: "{flight.id}", class: "flight-card",
                            div { class: "flight-card__route",
                                strong { "{legs}" }
                                span { class: "flight-card__airline", "{airline} {flight_number}" }
                            }
                            div { class: "flight-card__times", "{departs}" }
                            div { class: "flight-card__price",
                                strong { "{price}" }
                                span { class: "flight-card__seats", "{flight.seats_available} {seats_label}" }
                            }
                        }
                    }
                })}
            }
        },
    };

    let ground_body = match &*ground.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "page__status", "{empty}" } },
        Some(Ok(list)) => rsx! {
            ul { class: "ground-list",
                { list.iter().map(|option| {
                    let name = option.name.clone();
                    let route_text = option.route.clone();
                    let price = format_price(option.price);
                    rsx! {
                        li { key: "{option.id}", class: "ground-card",
                            strong { class: "ground-card__name", "{name}" }
                            span { class: "ground-card__route", "{route_text}" }
                            span { class: "ground-card__price", "{price}" }
                        }
                    }
                })}
            }
        },
    };

    let mut ground_type_out = ground_type;

    rsx! {
        section { class: "page page-transport",
            h1 { class: "page__title", "{title}" }

            div { class: "transport-section",
                h2 { class: "transport-section__title", "{flights_title}" }

                div { class: "search-bar",
                    div { class: "search-bar__field",
                        label { class: "search-bar__label", r#for: "route-from", "{departure_label}" }
                        input {
                            id: "route-from",
                            class: "search-bar__input",
                            r#type: "text",
                            placeholder: "JED",
                            value: "{departure}",
                            oninput: move |evt| departure.set(evt.value()),
                        }
                    }
                    div { class: "search-bar__field",
                        label { class: "search-bar__label", r#for: "route-to", "{arrival_label}" }
                        input {
                            id: "route-to",
                            class: "search-bar__input",
                            r#type: "text",
                            placeholder: "MED",
                            value: "{arrival}",
                            oninput: move |evt| arrival.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: on_route_search,
                        "{search_label}"
                    }
                }

                div { class: "search-bar",
                    div { class: "search-bar__field",
                        label { class: "search-bar__label", r#for: "date-start", "{start_label}" }
                        input {
                            id: "date-start",
                            class: "search-bar__input",
                            r#type: "date",
                            value: "{start_date}",
                            oninput: move |evt| start_date.set(evt.value()),
                        }
                    }
                    div { class: "search-bar__field",
                        label { class: "search-bar__label", r#for: "date-return", "{return_label}" }
                        input {
                            id: "date-return",
                            class: "search-bar__input",
                            r#type: "date",
                            value: "{return_date}",
                            oninput: move |evt| return_date.set(evt.value()),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: on_date_search,
                        "{search_label}"
                    }
                }

                {flights_body}
            }

            div { class: "transport-section",
                h2 { class: "transport-section__title", "{ground_title}" }

                div { class: "search-bar",
                    div { class: "search-bar__field",
                        label { class: "search-bar__label", r#for: "ground-type", "{type_label}" }
                        select {
                            id: "ground-type",
                            class: "search-bar__input",
                            value: "{ground_type}",
                            oninput: move |evt| ground_type_out.set(evt.value()),
                            { GROUND_TYPES.iter().map(|(kind, label_key)| {
                                let label = prefs.tr(label_key);
                                rsx! {
                                    option { key: "{kind}", value: "{kind}", "{label}" }
                                }
                            })}
                        }
                    }
                }

                {ground_body}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_search_requires_both_airports() {
        assert_eq!(
            route_query(" jed ", "med"),
            FlightQuery::Route {
                from: "JED".into(),
                to: "MED".into()
            }
        );
        assert_eq!(route_query("JED", "  "), FlightQuery::All);
        assert_eq!(route_query("", ""), FlightQuery::All);
    }

    #[test]
    fn date_search_requires_the_full_range() {
        assert_eq!(
            date_query("2025-03-01", " 2025-03-14 "),
            FlightQuery::Dates {
                start: "2025-03-01".into(),
                back: "2025-03-14".into()
            }
        );
        assert_eq!(date_query("2025-03-01", ""), FlightQuery::All);
        assert_eq!(date_query("", "2025-03-14"), FlightQuery::All);
    }

    #[test]
    fn ground_type_labels_come_from_the_table() {
        use crate::i18n::TRANSLATIONS;
        for (kind, label_key) in GROUND_TYPES {
            assert!(
                TRANSLATIONS.contains_key(*label_key),
                "{kind} option has no {label_key} entry"
            );
        }
    }
}
