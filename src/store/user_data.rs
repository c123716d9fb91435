use super::action::{Action, Lifecycle};
use crate::environment::entities::User;
use crate::environment::types::{AuthorizationStatus, RequestStatus};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserData {
    pub user: Option<User>,
    pub login_status: RequestStatus,
    pub authorization_status: AuthorizationStatus,
}

pub fn reduce(state: &mut UserData, action: &Action) {
    match action {
        Action::CheckAuth(event) => match event {
            Lifecycle::Pending => (),
            Lifecycle::Fulfilled(user) => {
                state.user = Some(user.clone());
                state.authorization_status = AuthorizationStatus::Auth;
            }
            Lifecycle::Rejected(_) => {
                state.user = None;
                state.authorization_status = AuthorizationStatus::NoAuth;
            }
        },
        Action::LogIn(_, event) => {
            state.login_status.apply(event);
            if let Lifecycle::Fulfilled(user) = event {
                state.user = Some(user.clone());
                state.authorization_status = AuthorizationStatus::Auth;
            }
        }
        Action::LogOut(Lifecycle::Fulfilled(_)) => {
            state.user = None;
            state.authorization_status = AuthorizationStatus::NoAuth;
        }
        _ => (),
    }
}
