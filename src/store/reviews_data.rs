use super::action::{Action, Lifecycle};
use crate::environment::entities::Review;
use crate::environment::types::RequestStatus;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ReviewsData {
    pub reviews: Vec<Review>,
    pub fetch_reviews_status: RequestStatus,
    pub post_review_status: RequestStatus,
}

pub fn reduce(state: &mut ReviewsData, action: &Action) {
    match action {
        Action::FetchReviews(_, event) => {
            state.fetch_reviews_status.apply(event);
            if let Lifecycle::Fulfilled(reviews) = event {
                state.reviews = reviews.clone();
            }
        }
        Action::PostReview(_, event) => {
            state.post_review_status.apply(event);
            if let Lifecycle::Fulfilled(review) = event {
                state.reviews.push(review.clone());
            }
        }
        _ => (),
    }
}
