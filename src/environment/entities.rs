use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type OfferId = String;

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub location: Location,
}

/// A rental listing as returned by the list endpoints
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u32,
    pub city: City,
    pub location: Location,
    pub is_favorite: bool,
    pub is_premium: bool,
    pub rating: f32,
    #[serde(default)]
    pub preview_image: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
}

/// The detail view of an offer
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferFull {
    #[serde(flatten)]
    pub offer: Offer,
    pub description: String,
    pub bedrooms: u32,
    pub goods: Vec<String>,
    pub host: Host,
    pub max_adults: u32,
}

impl std::ops::Deref for OfferFull {
    type Target = Offer;

    fn deref(&self) -> &Self::Target {
        &self.offer
    }
}

impl std::ops::DerefMut for OfferFull {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.offer
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "user")]
    pub author: Host,
    pub comment: String,
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
    pub email: String,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub email: String,
    pub password: String,
}

/// Request to add (`status == 1`) or remove (`status == 0`) a favorite
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteData {
    pub id: OfferId,
    pub status: u8,
}

impl FavoriteData {
    pub fn new(id: impl Into<OfferId>, favorite: bool) -> Self {
        Self {
            id: id.into(),
            status: u8::from(favorite),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewData {
    pub comment: String,
    pub rating: u8,
}

impl ReviewData {
    pub const COMMENT_MIN_LENGTH: usize = 50;
    pub const COMMENT_MAX_LENGTH: usize = 300;
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    /// Whether the form may be submitted
    pub fn is_valid(&self) -> bool {
        let length = self.comment.trim().chars().count();
        (Self::COMMENT_MIN_LENGTH..=Self::COMMENT_MAX_LENGTH).contains(&length)
            && (Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewPost {
    pub offer_id: OfferId,
    pub review: ReviewData,
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::TimeZone;

    pub fn make_location() -> Location {
        Location {
            latitude: 48.85661,
            longitude: 2.351499,
            zoom: 13,
        }
    }

    pub fn make_offer(id: &str) -> Offer {
        Offer {
            id: id.to_string(),
            title: format!("Beautiful & luxurious studio {id}"),
            kind: "apartment".to_string(),
            price: 120,
            city: City {
                name: "Paris".to_string(),
                location: make_location(),
            },
            location: make_location(),
            is_favorite: false,
            is_premium: false,
            rating: 4.0,
            preview_image: "https://url-to-image/image.png".to_string(),
            images: Vec::new(),
        }
    }

    pub fn make_offer_in(id: &str, city: &str, price: u32, rating: f32) -> Offer {
        let mut offer = make_offer(id);
        offer.city.name = city.to_string();
        offer.price = price;
        offer.rating = rating;
        offer
    }

    pub fn make_offer_full(id: &str) -> OfferFull {
        OfferFull {
            offer: Offer {
                images: vec!["https://url-to-image/image.png".to_string()],
                ..make_offer(id)
            },
            description: "A quiet cozy and picturesque place.".to_string(),
            bedrooms: 3,
            goods: vec!["Heating".to_string(), "Kitchen".to_string()],
            host: make_host(),
            max_adults: 4,
        }
    }

    pub fn make_host() -> Host {
        Host {
            name: "Oliver Conner".to_string(),
            avatar_url: "https://url-to-image/image.png".to_string(),
            is_pro: false,
        }
    }

    pub fn make_review(id: &str, day: u32) -> Review {
        Review {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2019, 5, day, 14, 13, 56).unwrap(),
            author: make_host(),
            comment: "A quiet cozy and picturesque place that hides behind a river.".to_string(),
            rating: 4,
        }
    }

    pub fn make_user() -> User {
        User {
            id: None,
            name: "Oliver.conner".to_string(),
            avatar_url: "https://url-to-image/image.png".to_string(),
            is_pro: false,
            email: "Oliver.conner@gmail.com".to_string(),
            token: "T2xpdmVyLmNvbm5lckBnbWFpbC5jb20=".to_string(),
        }
    }
}
