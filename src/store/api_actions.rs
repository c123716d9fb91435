use super::action::{Action, Lifecycle};
use super::Store;
use crate::environment::entities::{
    AuthData, FavoriteData, Offer, OfferFull, OfferId, Review, ReviewPost, User,
};
use crate::environment::ApiError;
use crate::routing::AppRoute;

/// Whether a failure is shown to the user through `SetError`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Report {
    Show,
    Silent,
}

// Every thunk dispatches its pending event before the request starts and
// exactly one fulfilled or rejected event once it settled.
impl Store {
    pub async fn fetch_offers(&mut self) -> Result<Vec<Offer>, ApiError> {
        self.dispatch(Action::FetchOffers(Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.offers().await;
        self.settle(result, Action::FetchOffers, Report::Show)
    }

    pub async fn fetch_offer(&mut self, id: OfferId) -> Result<OfferFull, ApiError> {
        self.dispatch(Action::FetchOffer(id.clone(), Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.offer(id.clone()).await;
        self.settle(result, |l| Action::FetchOffer(id.clone(), l), Report::Show)
    }

    pub async fn fetch_near_places(&mut self, id: OfferId) -> Result<Vec<Offer>, ApiError> {
        self.dispatch(Action::FetchNearPlaces(id.clone(), Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.near_places(id.clone()).await;
        self.settle(result, |l| Action::FetchNearPlaces(id.clone(), l), Report::Show)
    }

    pub async fn fetch_favorites(&mut self) -> Result<Vec<Offer>, ApiError> {
        self.dispatch(Action::FetchFavorites(Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.favorites().await;
        self.settle(result, Action::FetchFavorites, Report::Show)
    }

    /// Without an authenticated user this only navigates to the login
    /// page and resolves to `None`.
    pub async fn change_favorite(&mut self, data: FavoriteData) -> Result<Option<Offer>, ApiError> {
        self.dispatch(Action::ChangeFavorite(data.clone(), Lifecycle::Pending));
        if !self.state().user.authorization_status.is_auth() {
            log::debug!("change_favorite without login, redirecting");
            self.dispatch(Action::RedirectToRoute(AppRoute::Login));
            self.dispatch(Action::ChangeFavorite(data, Lifecycle::Fulfilled(None)));
            return Ok(None);
        }
        let model = self.environment.model.clone();
        let result = model.change_favorite(data.clone()).await.map(Some);
        self.settle(result, |l| Action::ChangeFavorite(data.clone(), l), Report::Show)
    }

    pub async fn fetch_reviews(&mut self, id: OfferId) -> Result<Vec<Review>, ApiError> {
        self.dispatch(Action::FetchReviews(id.clone(), Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.reviews(id.clone()).await;
        self.settle(result, |l| Action::FetchReviews(id.clone(), l), Report::Show)
    }

    pub async fn post_review(&mut self, post: ReviewPost) -> Result<Review, ApiError> {
        self.dispatch(Action::PostReview(post.clone(), Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.post_review(post.clone()).await;
        self.settle(result, |l| Action::PostReview(post.clone(), l), Report::Show)
    }

    /// A rejection here just means nobody is logged in
    pub async fn check_auth(&mut self) -> Result<User, ApiError> {
        self.dispatch(Action::CheckAuth(Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.check_auth().await;
        self.settle(result, Action::CheckAuth, Report::Silent)
    }

    pub async fn log_in(&mut self, data: AuthData) -> Result<User, ApiError> {
        self.dispatch(Action::LogIn(data.clone(), Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.login(data.clone()).await;
        if let Ok(ref user) = result {
            self.environment.repository.save_token(&user.token);
            self.dispatch(Action::RedirectToRoute(AppRoute::Root));
        }
        self.settle(result, |l| Action::LogIn(data.clone(), l), Report::Show)
    }

    pub async fn log_out(&mut self) -> Result<(), ApiError> {
        self.dispatch(Action::LogOut(Lifecycle::Pending));
        let model = self.environment.model.clone();
        let result = model.logout().await;
        if result.is_ok() {
            self.environment.repository.drop_token();
        }
        self.settle(result, Action::LogOut, Report::Show)
    }

    /// Hide the current error after the configured display time
    pub async fn clear_error(&mut self) -> Result<(), ApiError> {
        self.dispatch(Action::ClearError(Lifecycle::Pending));
        tokio::time::sleep(self.environment.config.error_timeout()).await;
        self.dispatch(Action::ClearError(Lifecycle::Fulfilled(())));
        Ok(())
    }

    /// Everything the offer page shows. Fails with the first failed request.
    pub async fn load_offer_page(&mut self, id: OfferId) -> Result<OfferFull, ApiError> {
        let offer = self.fetch_offer(id.clone()).await?;
        self.fetch_near_places(id.clone()).await?;
        self.fetch_reviews(id).await?;
        Ok(offer)
    }

    fn settle<T: Clone>(
        &mut self,
        result: Result<T, ApiError>,
        action: impl Fn(Lifecycle<T>) -> Action,
        report: Report,
    ) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                self.dispatch(action(Lifecycle::Fulfilled(value.clone())));
                Ok(value)
            }
            Err(error) => {
                self.dispatch(action(Lifecycle::Rejected(error.clone())));
                if report == Report::Show {
                    self.dispatch(Action::SetError(error.to_string()));
                }
                Err(error)
            }
        }
    }
}
