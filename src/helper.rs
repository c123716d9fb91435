use chrono::{DateTime, Utc};

/// Star rating as the width percentage of the filled stars, rounded to
/// whole stars
pub fn rating_width(rating: f32) -> u8 {
    let stars = rating.round().clamp(0.0, 5.0) as u8;
    stars * 20
}

/// `2019-05-08T14:13:56Z` becomes `May 2019`
pub fn review_date(date: &DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

/// `apartment` becomes `Apartment`
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `1 Bedroom`, `3 Bedrooms`
pub fn pluralize(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
