mod app;
pub mod environment;
pub mod helper;
pub mod routing;
pub mod store;

pub use app::run;
pub use environment::{Api, ApiError, Environment, Model, Repository};
pub use store::{Action, Lifecycle, State, Store};
