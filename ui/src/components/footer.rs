use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::prefs::use_prefs;

#[component]
pub fn AppFooter() -> Element {
    let prefs = use_prefs();
    let year = OffsetDateTime::now_utc().year();
    let tagline = prefs.tr("footer.tagline");
    let rights = prefs.tr("footer.rights");

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                span { class: "footer__brand", "Manasik" }
                p { class: "footer__tagline", "{tagline}" }
                p { class: "footer__legal", "© {year} Manasik · {rights}" }
            }
        }
    }
}
