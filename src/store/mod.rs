pub mod action;
pub mod api_actions;
pub mod app_data;
pub mod favorites_data;
pub mod offer_data;
pub mod offers_data;
pub mod redirect;
pub mod reviews_data;
pub mod selectors;
pub mod user_data;

use std::rc::Rc;

use crate::environment::Environment;
pub use action::{Action, Lifecycle};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct State {
    pub app: app_data::AppData,
    pub offers: offers_data::OffersData,
    pub offer: offer_data::OfferData,
    pub favorites: favorites_data::FavoritesData,
    pub reviews: reviews_data::ReviewsData,
    pub user: user_data::UserData,
}

/// Feed an action through every slice
pub fn reduce(state: &mut State, action: &Action) {
    app_data::reduce(&mut state.app, action);
    offers_data::reduce(&mut state.offers, action);
    offer_data::reduce(&mut state.offer, action);
    favorites_data::reduce(&mut state.favorites, action);
    reviews_data::reduce(&mut state.reviews, action);
    user_data::reduce(&mut state.user, action);
}

/// Owns the state and the environment. Single threaded: thunks borrow the
/// store mutably for as long as their request is in flight.
pub struct Store {
    state: State,
    pub(crate) environment: Environment,
    listeners: Vec<Rc<dyn Fn(&Action, &State)>>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("environment", &self.environment)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Store {
    pub fn new(environment: Environment) -> Self {
        Self::with_state(environment, State::default())
    }

    pub fn with_state(environment: Environment, state: State) -> Self {
        Self {
            state,
            environment,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Called after every reduced action
    pub fn subscribe(&mut self, listener: impl Fn(&Action, &State) + 'static) {
        self.listeners.push(Rc::new(listener));
    }

    pub fn dispatch(&mut self, action: Action) {
        log::trace!("{}", action.action_type());
        let action = redirect::redirect(&mut self.environment.history, action);
        reduce(&mut self.state, &action);
        for listener in self.listeners.iter() {
            listener(&action, &self.state);
        }
    }
}
