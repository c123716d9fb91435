use super::action::{Action, Lifecycle};
use crate::environment::types::{CityName, Sorting};

/// Page level selections and the currently displayed error
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppData {
    pub city: CityName,
    pub sorting: Sorting,
    pub error: Option<String>,
}

pub fn reduce(state: &mut AppData, action: &Action) {
    match action {
        Action::ChangeCity(city) => state.city = *city,
        Action::ChangeSorting(sorting) => state.sorting = *sorting,
        Action::SetError(message) => state.error = Some(message.clone()),
        Action::ClearError(Lifecycle::Fulfilled(_)) => state.error = None,
        _ => (),
    }
}
