use crate::environment::entities::OfferId;
use crate::environment::types::AuthorizationStatus;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppRoute {
    Root,
    Login,
    Favorites,
    Offer(OfferId),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Root => "/".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Favorites => "/favorites".to_string(),
            AppRoute::Offer(id) => format!("/offer/{id}"),
        }
    }

    /// Resolve a path. Unknown paths resolve to `None`, the not-found page.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(AppRoute::Root),
            "/login" => Some(AppRoute::Login),
            "/favorites" => Some(AppRoute::Favorites),
            _ => {
                let id = trimmed.strip_prefix("/offer/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(AppRoute::Offer(id.to_string()))
            }
        }
    }

    /// Routes that need an authenticated user
    pub fn is_private(&self) -> bool {
        matches!(self, AppRoute::Favorites)
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Guard {
    Continue,
    Redirect(AppRoute),
}

/// Only authenticated users pass, everybody else goes to the login page
pub fn private_route(status: AuthorizationStatus) -> Guard {
    if status.is_auth() {
        Guard::Continue
    } else {
        Guard::Redirect(AppRoute::Login)
    }
}

/// Authenticated users have no business on the login page
pub fn public_only_route(status: AuthorizationStatus) -> Guard {
    if status.is_auth() {
        Guard::Redirect(AppRoute::Root)
    } else {
        Guard::Continue
    }
}

/// Pick the guard for a route
pub fn guard(route: &AppRoute, status: AuthorizationStatus) -> Guard {
    match route {
        AppRoute::Login => public_only_route(status),
        route if route.is_private() => private_route(status),
        _ => Guard::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_route_needs_auth() {
        assert_eq!(private_route(AuthorizationStatus::Auth), Guard::Continue);
        assert_eq!(
            private_route(AuthorizationStatus::NoAuth),
            Guard::Redirect(AppRoute::Login)
        );
        assert_eq!(
            private_route(AuthorizationStatus::Unknown),
            Guard::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn login_page_sends_users_home() {
        assert_eq!(
            guard(&AppRoute::Login, AuthorizationStatus::Auth),
            Guard::Redirect(AppRoute::Root)
        );
        assert_eq!(
            guard(&AppRoute::Login, AuthorizationStatus::NoAuth),
            Guard::Continue
        );
        assert_eq!(
            guard(&AppRoute::Offer("1".to_string()), AuthorizationStatus::NoAuth),
            Guard::Continue
        );
        assert_eq!(
            guard(&AppRoute::Favorites, AuthorizationStatus::Unknown),
            Guard::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn paths_resolve() {
        for route in [
            AppRoute::Root,
            AppRoute::Login,
            AppRoute::Favorites,
            AppRoute::Offer("abc".to_string()),
        ] {
            assert_eq!(AppRoute::from_path(&route.path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/login/"), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_path("/offer/"), None);
        assert_eq!(AppRoute::from_path("/offer/1/2"), None);
        assert_eq!(AppRoute::from_path("/unknown"), None);
    }
}
