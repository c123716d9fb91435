pub mod entities;
pub mod history;
pub mod model;
pub mod repository;
pub mod types;

use std::sync::Arc;

pub use history::History;
pub use model::{Api, ApiError, Model};
pub use repository::Repository;
use types::Config;

/// Everything a thunk may touch besides the state. One per store.
pub struct Environment {
    pub model: Arc<dyn Api>,
    pub repository: Repository,
    pub history: History,
    pub config: Config,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("history", &self.history)
            .field("config", &self.config)
            .finish()
    }
}

impl Environment {
    pub fn new(model: Arc<dyn Api>, repository: Repository, config: Config) -> Self {
        Self {
            model,
            repository,
            history: History::default(),
            config,
        }
    }

    /// An environment talking to the configured backend
    pub fn live(config: Config, repository: Repository) -> Result<Self, String> {
        let model = Model::new(&config, repository.clone())?;
        Ok(Self::new(Arc::new(model), repository, config))
    }
}
