use super::action::{Action, Lifecycle};
use crate::environment::entities::Offer;
use crate::environment::types::RequestStatus;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct OffersData {
    pub offers: Vec<Offer>,
    pub fetch_offers_status: RequestStatus,
}

pub fn reduce(state: &mut OffersData, action: &Action) {
    match action {
        Action::FetchOffers(event) => {
            state.fetch_offers_status.apply(event);
            match event {
                Lifecycle::Pending => (),
                Lifecycle::Fulfilled(offers) => state.offers = offers.clone(),
                Lifecycle::Rejected(_) => state.offers.clear(),
            }
        }
        Action::ChangeFavorite(_, Lifecycle::Fulfilled(Some(changed))) => {
            for offer in state.offers.iter_mut().filter(|o| o.id == changed.id) {
                offer.is_favorite = changed.is_favorite;
            }
        }
        // the server forgets our favorites with the token
        Action::LogOut(Lifecycle::Fulfilled(_)) => {
            for offer in state.offers.iter_mut() {
                offer.is_favorite = false;
            }
        }
        _ => (),
    }
}
