use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;

use crate::core::format::{discounted_price, format_price};
use crate::prefs::use_prefs;

#[component]
pub fn Packages() -> Element {
    let prefs = use_prefs();
    let client = use_context::<Rc<ApiClient>>();

    let packages = use_resource(move || {
        let client = Rc::clone(&client);
        async move { client.packages().await }
    });

    let title = prefs.tr("nav.packages");
    let days_label = prefs.tr("packages.days");
    let includes_label = prefs.tr("packages.includes");
    let loading = prefs.tr("common.loading");
    let error_text = prefs.tr("common.error");
    let empty = prefs.tr("common.empty");

    let body = match &*packages.read() {
        None => rsx! { p { class: "page__status", "{loading}" } },
        Some(Err(_)) => rsx! { p { class: "page__status page__status--error", "{error_text}" } },
        Some(Ok(list)) if list.iter().all(|p| !p.available) => {
            rsx! { p { class: "page__status", "{empty}" } }
        }
        Some(Ok(list)) => rsx! {
            div { class: "card-grid",
                { list.iter().filter(|p| p.available).map(|package| {
                    let name = package.name.clone();
                    let description = package.description.clone();
                    let image = package.image_url.clone();
                    let full_price = format_price(package.total_price);
                    let deal = discounted_price(package.total_price, package.discount)
                        .map(format_price);
                    let price = match &deal {
                        Some(discounted) => rsx! {
                            span { class: "package-card__price--strike", "{full_price}" }
                            strong { "{discounted}" }
                        },
                        None => rsx! { strong { "{full_price}" } },
                    };
                    rsx! {
                        article { key: "{package.id}", class: "package-card",
                            img { class: "package-card__image", src: "{image}", alt: "{name}" }
                            div { class: "package-card__body",
                                h2 { class: "package-card__name", "{name}" }
                                p { class: "package-card__description", "{description}" }
                                span { class: "package-card__duration",
                                    "{package.duration} {days_label}"
                                }
                                if !package.inclusions.is_empty() {
                                    div { class: "package-card__inclusions",
                                        span { class: "package-card__inclusions-label",
                                            "{includes_label}"
                                        }
                                        ul {
                                            { package.inclusions.iter().take(3).map(|item| rsx! {
                                                li { key: "{item}", "{item}" }
                                            })}
                                        }
                                    }
                                }
                                div { class: "package-card__price", {price} }
                            }
                        }
                    }
                })}
            }
        },
    };

    rsx! {
        section { class: "page page-packages",
            h1 { class: "page__title", "{title}" }
            {body}
        }
    }
}
