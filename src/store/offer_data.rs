use super::action::{Action, Lifecycle};
use crate::environment::entities::{Offer, OfferFull};
use crate::environment::types::RequestStatus;

/// The offer on the detail page and its neighbourhood
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OfferData {
    pub offer: Option<OfferFull>,
    pub fetch_offer_status: RequestStatus,
    pub near_places: Vec<Offer>,
    pub fetch_near_places_status: RequestStatus,
}

pub fn reduce(state: &mut OfferData, action: &Action) {
    match action {
        Action::FetchOffer(_, event) => {
            state.fetch_offer_status.apply(event);
            state.offer = match event {
                Lifecycle::Fulfilled(offer) => Some(offer.clone()),
                // never show the previous offer while loading another one
                Lifecycle::Pending | Lifecycle::Rejected(_) => None,
            };
        }
        Action::FetchNearPlaces(_, event) => {
            state.fetch_near_places_status.apply(event);
            match event {
                Lifecycle::Pending => (),
                Lifecycle::Fulfilled(offers) => state.near_places = offers.clone(),
                Lifecycle::Rejected(_) => state.near_places.clear(),
            }
        }
        Action::ChangeFavorite(_, Lifecycle::Fulfilled(Some(changed))) => {
            if let Some(offer) = state.offer.as_mut().filter(|o| o.id == changed.id) {
                offer.is_favorite = changed.is_favorite;
            }
            for offer in state.near_places.iter_mut().filter(|o| o.id == changed.id) {
                offer.is_favorite = changed.is_favorite;
            }
        }
        Action::LogOut(Lifecycle::Fulfilled(_)) => {
            if let Some(offer) = state.offer.as_mut() {
                offer.is_favorite = false;
            }
            for offer in state.near_places.iter_mut() {
                offer.is_favorite = false;
            }
        }
        _ => (),
    }
}
