//! Rotating hero banner for the landing page.

use dioxus::prelude::*;

use crate::components::app_navbar::nav_builder;
use crate::core::platform::sleep_ms;
use crate::prefs::use_prefs;

/// Time each slide stays up before the rotation advances.
const ROTATE_MS: u64 = 6_000;

struct Slide {
    image: &'static str,
    title_key: &'static str,
    subtitle_key: &'static str,
    description_key: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        image: "https://images.unsplash.com/photo-1571909552531-1601eaec8f79?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        title_key: "hero.slide1.title",
        subtitle_key: "hero.slide1.subtitle",
        description_key: "hero.slide1.description",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1733895422653-cf8a2370f87f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        title_key: "hero.slide2.title",
        subtitle_key: "hero.slide2.subtitle",
        description_key: "hero.slide2.description",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1629971138860-4ff46dfb714f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
        title_key: "hero.slide3.title",
        subtitle_key: "hero.slide3.subtitle",
        description_key: "hero.slide3.description",
    },
];

pub(crate) fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

pub(crate) fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

#[component]
pub fn HeroSlider() -> Element {
    let prefs = use_prefs();
    let index = use_signal(|| 0usize);

    // Auto-advance; manual navigation does not reset the clock, matching the
    // fixed-interval rotation users expect from the landing page.
    let mut auto_index = index;
    use_future(move || async move {
        loop {
            sleep_ms(ROTATE_MS).await;
            auto_index.set(next_index(auto_index(), SLIDES.len()));
        }
    });

    let current = index();
    let slide = &SLIDES[current];
    let title = prefs.tr(slide.title_key);
    let subtitle = prefs.tr(slide.subtitle_key);
    let description = prefs.tr(slide.description_key);
    let cta_label = prefs.tr("hero.cta");
    let background = format!("background-image: url('{}')", slide.image);

    let cta = nav_builder().map(|builder| (builder.cta)(&cta_label));

    let mut prev_signal = index;
    let mut next_signal = index;

    rsx! {
        section { class: "hero",
            div { class: "hero__slide", style: "{background}",
                div { class: "hero__scrim" }
                div { class: "hero__copy",
                    h1 { class: "hero__title", "{title}" }
                    p { class: "hero__subtitle", "{subtitle}" }
                    p { class: "hero__description", "{description}" }
                    if let Some(cta) = cta {
                        {cta}
                    }
                }
            }

            button {
                r#type: "button",
                class: "hero__arrow hero__arrow--prev",
                aria_label: "Previous slide",
                onclick: move |_| prev_signal.set(prev_index(prev_signal(), SLIDES.len())),
                "‹"
            }
            button {
                r#type: "button",
                class: "hero__arrow hero__arrow--next",
                aria_label: "Next slide",
                onclick: move |_| next_signal.set(next_index(next_signal(), SLIDES.len())),
                "›"
            }

            div { class: "hero__dots",
                { SLIDES.iter().enumerate().map(|(i, _)| {
                    let mut dot_signal = index;
                    let slide_number = i + 1;
                    let dot_class = if i == current {
                        "hero__dot hero__dot--active"
                    } else {
                        "hero__dot"
                    };
                    rsx! {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: "{dot_class}",
                            aria_label: "Slide {slide_number}",
                            onclick: move |_| dot_signal.set(i),
                        }
                    }
                })}
            }
        }
    }
}
