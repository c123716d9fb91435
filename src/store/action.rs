use crate::environment::entities::{
    AuthData, FavoriteData, Offer, OfferFull, OfferId, Review, ReviewPost, User,
};
use crate::environment::types::{CityName, RequestStatus, Sorting};
use crate::environment::ApiError;
use crate::routing::AppRoute;

/// The phases of one asynchronous operation
#[derive(Clone, Debug, PartialEq)]
pub enum Lifecycle<T> {
    Pending,
    Fulfilled(T),
    Rejected(ApiError),
}

impl<T> Lifecycle<T> {
    pub fn phase(&self) -> &'static str {
        match self {
            Lifecycle::Pending => "pending",
            Lifecycle::Fulfilled(_) => "fulfilled",
            Lifecycle::Rejected(_) => "rejected",
        }
    }
}

impl RequestStatus {
    /// Track a lifecycle event
    pub fn apply<T>(&mut self, event: &Lifecycle<T>) {
        *self = match event {
            Lifecycle::Pending => RequestStatus::Pending,
            Lifecycle::Fulfilled(_) => RequestStatus::Success,
            Lifecycle::Rejected(_) => RequestStatus::Rejected,
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    FetchOffers(Lifecycle<Vec<Offer>>),
    FetchOffer(OfferId, Lifecycle<OfferFull>),
    FetchNearPlaces(OfferId, Lifecycle<Vec<Offer>>),
    FetchFavorites(Lifecycle<Vec<Offer>>),
    /// Fulfils without an offer when the user had to log in first
    ChangeFavorite(FavoriteData, Lifecycle<Option<Offer>>),
    FetchReviews(OfferId, Lifecycle<Vec<Review>>),
    PostReview(ReviewPost, Lifecycle<Review>),
    CheckAuth(Lifecycle<User>),
    LogIn(AuthData, Lifecycle<User>),
    LogOut(Lifecycle<()>),
    ClearError(Lifecycle<()>),

    RedirectToRoute(AppRoute),
    ChangeCity(CityName),
    ChangeSorting(Sorting),
    SetError(String),
}

impl Action {
    /// A `namespace/name[/phase]` identifier, used for tracing
    pub fn action_type(&self) -> String {
        let (name, phase) = match self {
            Action::FetchOffers(l) => ("data/fetchOffers", Some(l.phase())),
            Action::FetchOffer(_, l) => ("data/fetchOffer", Some(l.phase())),
            Action::FetchNearPlaces(_, l) => ("data/fetchNearPlaces", Some(l.phase())),
            Action::FetchFavorites(l) => ("data/fetchFavorites", Some(l.phase())),
            Action::ChangeFavorite(_, l) => ("data/changeFavorite", Some(l.phase())),
            Action::FetchReviews(_, l) => ("data/fetchReviews", Some(l.phase())),
            Action::PostReview(_, l) => ("data/postReview", Some(l.phase())),
            Action::CheckAuth(l) => ("user/checkAuth", Some(l.phase())),
            Action::LogIn(_, l) => ("user/login", Some(l.phase())),
            Action::LogOut(l) => ("user/logout", Some(l.phase())),
            Action::ClearError(l) => ("main/clearError", Some(l.phase())),
            Action::RedirectToRoute(_) => ("app/redirectToRoute", None),
            Action::ChangeCity(_) => ("main/changeCity", None),
            Action::ChangeSorting(_) => ("main/changeSorting", None),
            Action::SetError(_) => ("main/setError", None),
        };
        match phase {
            Some(phase) => format!("{name}/{phase}"),
            None => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_lifecycle() {
        let mut status = RequestStatus::default();
        status.apply(&Lifecycle::<()>::Pending);
        assert_eq!(status, RequestStatus::Pending);
        status.apply(&Lifecycle::Fulfilled(()));
        assert_eq!(status, RequestStatus::Success);
        status.apply(&Lifecycle::<()>::Pending);
        status.apply(&Lifecycle::<()>::Rejected(ApiError::Network("offline".to_string())));
        assert_eq!(status, RequestStatus::Rejected);
    }

    #[test]
    fn action_types() {
        assert_eq!(
            Action::FetchOffers(Lifecycle::Pending).action_type(),
            "data/fetchOffers/pending"
        );
        assert_eq!(
            Action::LogOut(Lifecycle::Fulfilled(())).action_type(),
            "user/logout/fulfilled"
        );
        assert_eq!(
            Action::RedirectToRoute(AppRoute::Login).action_type(),
            "app/redirectToRoute"
        );
    }
}
