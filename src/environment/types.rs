use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const BACKEND_BASE_URL: &str = "https://13.design.pages.academy/six-cities";
pub const REQUEST_TIMEOUT: u64 = 5000;
pub const TIMEOUT_SHOW_ERROR: u64 = 2000;

/// Key under which the authentication token is persisted
pub const AUTH_TOKEN_KEY_NAME: &str = "six-cities-token";
/// Header carrying the token on authenticated requests
pub const TOKEN_HEADER: &str = "X-Token";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Rejected,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    Auth,
    NoAuth,
    #[default]
    Unknown,
}

impl AuthorizationStatus {
    pub fn is_auth(&self) -> bool {
        matches!(self, AuthorizationStatus::Auth)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum CityName {
    #[default]
    Paris,
    Cologne,
    Brussels,
    Amsterdam,
    Hamburg,
    Dusseldorf,
}

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Default, Display, EnumIter, IntoStaticStr, Serialize, Deserialize,
)]
pub enum Sorting {
    #[default]
    #[strum(serialize = "Popular")]
    Popular,
    #[strum(serialize = "Price: low to high")]
    LowToHigh,
    #[strum(serialize = "Price: high to low")]
    HighToLow,
    #[strum(serialize = "Top rated first")]
    TopRated,
}

/// Runtime settings. Missing fields fall back to the defaults.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_ms: u64,
    pub error_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BACKEND_BASE_URL.to_string(),
            request_timeout_ms: REQUEST_TIMEOUT,
            error_timeout_ms: TIMEOUT_SHOW_ERROR,
        }
    }
}

impl Config {
    pub const BASE_URL_VAR: &'static str = "SIX_CITIES_BASE_URL";

    /// Apply environment overrides on top of a loaded config
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(Self::BASE_URL_VAR) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_string();
            }
        }
        self
    }

    pub fn base_url(&self) -> Result<url::Url, String> {
        url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base url {}: {e:?}", self.base_url))
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }

    pub fn error_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.error_timeout_ms)
    }
}
