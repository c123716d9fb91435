use super::State;
use crate::environment::entities::{Offer, Review};
use crate::environment::types::Sorting;
use itertools::Itertools;
use std::cmp::Ordering;

pub const MAX_REVIEWS: usize = 10;
pub const MAX_NEAR_PLACES: usize = 3;

/// Offers in the active city, ordered by the active sorting
pub fn city_offers(state: &State) -> Vec<&Offer> {
    let city: &'static str = state.app.city.into();
    let offers = state.offers.offers.iter().filter(|o| o.city.name == city);
    match state.app.sorting {
        Sorting::Popular => offers.collect(),
        Sorting::LowToHigh => offers.sorted_by_key(|o| o.price).collect(),
        Sorting::HighToLow => offers.sorted_by_key(|o| std::cmp::Reverse(o.price)).collect(),
        Sorting::TopRated => offers
            .sorted_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
            .collect(),
    }
}

/// Newest reviews first, at most `MAX_REVIEWS`
pub fn latest_reviews(state: &State) -> Vec<&Review> {
    state
        .reviews
        .reviews
        .iter()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .take(MAX_REVIEWS)
        .collect()
}

pub fn near_places(state: &State) -> &[Offer] {
    let places = &state.offer.near_places;
    &places[..places.len().min(MAX_NEAR_PLACES)]
}

/// Favorites grouped by city name, cities in alphabetical order
pub fn favorites_by_city(state: &State) -> Vec<(String, Vec<&Offer>)> {
    state
        .favorites
        .favorite_offers
        .iter()
        .into_group_map_by(|o| o.city.name.clone())
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect()
}

pub fn is_favorite(state: &State, id: &str) -> bool {
    state.favorites.contains(id)
}
