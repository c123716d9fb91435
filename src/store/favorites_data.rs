use super::action::{Action, Lifecycle};
use crate::environment::entities::Offer;
use crate::environment::types::RequestStatus;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FavoritesData {
    pub favorite_offers: Vec<Offer>,
    pub fetch_favorite_offers_status: RequestStatus,
}

impl FavoritesData {
    pub fn contains(&self, id: &str) -> bool {
        self.favorite_offers.iter().any(|o| o.id == id)
    }

    /// Follow the flag the server returned. Keeps the ids unique.
    fn update(&mut self, offer: &Offer) {
        let position = self.favorite_offers.iter().position(|o| o.id == offer.id);
        match (offer.is_favorite, position) {
            (true, Some(index)) => self.favorite_offers[index] = offer.clone(),
            (true, None) => self.favorite_offers.push(offer.clone()),
            (false, Some(index)) => {
                self.favorite_offers.remove(index);
            }
            (false, None) => (),
        }
    }
}

pub fn reduce(state: &mut FavoritesData, action: &Action) {
    match action {
        Action::FetchFavorites(event) => {
            state.fetch_favorite_offers_status.apply(event);
            match event {
                Lifecycle::Pending => (),
                Lifecycle::Fulfilled(offers) => {
                    state.favorite_offers.clear();
                    for offer in offers {
                        if !state.contains(&offer.id) {
                            state.favorite_offers.push(offer.clone());
                        }
                    }
                }
                Lifecycle::Rejected(_) => state.favorite_offers.clear(),
            }
        }
        Action::ChangeFavorite(_, Lifecycle::Fulfilled(Some(offer))) => state.update(offer),
        Action::LogOut(Lifecycle::Fulfilled(_)) => state.favorite_offers.clear(),
        _ => (),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::entities::mock::make_offer;
    use crate::environment::entities::FavoriteData;
    use crate::environment::ApiError;

    fn reduced(mut state: FavoritesData, action: Action) -> FavoritesData {
        reduce(&mut state, &action);
        state
    }

    fn with(offers: Vec<Offer>) -> FavoritesData {
        FavoritesData {
            favorite_offers: offers,
            fetch_favorite_offers_status: RequestStatus::Success,
        }
    }

    fn favorite(id: &str, is_favorite: bool) -> Offer {
        Offer {
            is_favorite,
            ..make_offer(id)
        }
    }

    fn changed(offer: &Offer) -> Action {
        Action::ChangeFavorite(
            FavoriteData::new(offer.id.clone(), offer.is_favorite),
            Lifecycle::Fulfilled(Some(offer.clone())),
        )
    }

    #[test]
    fn unrelated_action_keeps_state() {
        let state = FavoritesData {
            favorite_offers: vec![make_offer("1")],
            fetch_favorite_offers_status: RequestStatus::Pending,
        };
        assert_eq!(reduced(state.clone(), Action::FetchOffers(Lifecycle::Pending)), state);
    }

    #[test]
    fn fetch_lifecycle() {
        let state = reduced(FavoritesData::default(), Action::FetchFavorites(Lifecycle::Pending));
        assert_eq!(
            state,
            FavoritesData {
                favorite_offers: vec![],
                fetch_favorite_offers_status: RequestStatus::Pending
            }
        );

        let offer = make_offer("1");
        let state = reduced(
            FavoritesData::default(),
            Action::FetchFavorites(Lifecycle::Fulfilled(vec![offer.clone()])),
        );
        assert_eq!(state, with(vec![offer]));

        let state = reduced(
            state,
            Action::FetchFavorites(Lifecycle::Rejected(ApiError::Status {
                code: 401,
                message: "Unauthorized".to_string(),
            })),
        );
        assert!(state.favorite_offers.is_empty());
        assert_eq!(state.fetch_favorite_offers_status, RequestStatus::Rejected);
    }

    #[test]
    fn fetched_duplicates_are_dropped() {
        let offer = make_offer("1");
        let state = reduced(
            FavoritesData::default(),
            Action::FetchFavorites(Lifecycle::Fulfilled(vec![offer.clone(), offer.clone()])),
        );
        assert_eq!(state.favorite_offers, vec![offer]);
    }

    #[test]
    fn adding_appends_unknown_offer() {
        let offer = favorite("1", true);
        let state = reduced(with(vec![]), changed(&offer));
        assert_eq!(state, with(vec![offer]));
    }

    #[test]
    fn adding_twice_keeps_the_offer() {
        let offer = favorite("7", true);
        let state = reduced(with(vec![offer.clone()]), changed(&offer));
        assert_eq!(state, with(vec![offer.clone()]));
        let renamed = Offer {
            title: "Renamed".to_string(),
            ..offer
        };
        let state = reduced(state, changed(&renamed));
        assert_eq!(state, with(vec![renamed]));
    }

    #[test]
    fn removing_drops_known_offer() {
        let (a, b) = (favorite("a", true), favorite("b", true));
        let state = reduced(with(vec![a, b.clone()]), changed(&favorite("a", false)));
        assert_eq!(state, with(vec![b]));
    }

    #[test]
    fn removing_from_unloaded_list_adds_nothing() {
        let state = reduced(FavoritesData::default(), changed(&favorite("42", false)));
        assert!(state.favorite_offers.is_empty());
    }

    #[test]
    fn redirected_toggle_changes_nothing() {
        let state = with(vec![make_offer("a")]);
        let action = Action::ChangeFavorite(FavoriteData::new("b", true), Lifecycle::Fulfilled(None));
        assert_eq!(reduced(state.clone(), action), state);
    }

    #[test]
    fn logout_forgets_favorites() {
        let state = reduced(with(vec![make_offer("a")]), Action::LogOut(Lifecycle::Fulfilled(())));
        assert!(state.favorite_offers.is_empty());
    }
}
