//! Formatting helpers for presenting listings.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Nightly and package prices come from the backend in SAR.
pub fn format_price(value: f64) -> String {
    format!("{value:.0} SAR")
}

pub fn format_rating(value: f32) -> String {
    format!("{value:.1} ★")
}

/// Discounted package price; `None` when there is no discount to show.
pub fn discounted_price(total: f64, discount: Option<f64>) -> Option<f64> {
    let discount = discount?;
    if discount <= 0.0 {
        return None;
    }
    Some((total - discount).max(0.0))
}

/// Short badge for a flight departure, e.g. `Mar 4, 09:30`. Falls back to the
/// raw string when the backend sends something that is not RFC 3339.
pub fn format_departure(iso: &str) -> String {
    match OffsetDateTime::parse(iso, &Rfc3339) {
        Ok(stamp) => stamp
            .format(&format_description!(
                "[month repr:short] [day padding:none], [hour]:[minute]"
            ))
            .unwrap_or_else(|_| iso.to_string()),
        Err(_) => iso.to_string(),
    }
}

/// Distance badge for hotels near the Haram, e.g. `0.2`.
pub fn format_distance_km(value: f64) -> String {
    format!("{value:.1}")
}
