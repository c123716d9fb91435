use super::action::Action;
use crate::environment::History;

/// Perform navigation for `RedirectToRoute`. Every action is forwarded unchanged.
pub fn redirect(history: &mut History, action: Action) -> Action {
    if let Action::RedirectToRoute(ref route) = action {
        history.push(route.path());
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::types::CityName;
    use crate::routing::AppRoute;

    #[test]
    fn redirects_to_login() {
        let mut history = History::new("");
        let action = Action::RedirectToRoute(AppRoute::Login);
        let forwarded = redirect(&mut history, action.clone());
        assert_eq!(history.pathname(), "/login");
        assert_eq!(forwarded, action);
    }

    #[test]
    fn other_actions_do_not_navigate() {
        let mut history = History::new("");
        let action = Action::ChangeCity(CityName::Cologne);
        let forwarded = redirect(&mut history, action.clone());
        assert_eq!(history.pathname(), "");
        assert_ne!(history.pathname(), "/favorites");
        assert_eq!(forwarded, action);
    }
}
