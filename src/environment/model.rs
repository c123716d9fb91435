use super::entities::{
    AuthData, FavoriteData, Offer, OfferFull, OfferId, Review, ReviewPost, User,
};
use super::repository::Repository;
use super::types::{Config, TOKEN_HEADER};
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Server Error {code}: {message}")]
    Status { code: u16, message: String },
    #[error("Parse Error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { code, .. } if *code == StatusCode::UNAUTHORIZED.as_u16())
    }
}

/// One call per backend endpoint. Every call issues exactly one request.
#[async_trait]
pub trait Api: Send + Sync {
    async fn offers(&self) -> Result<Vec<Offer>, ApiError>;
    async fn offer(&self, id: OfferId) -> Result<OfferFull, ApiError>;
    async fn near_places(&self, id: OfferId) -> Result<Vec<Offer>, ApiError>;
    async fn favorites(&self) -> Result<Vec<Offer>, ApiError>;
    async fn change_favorite(&self, data: FavoriteData) -> Result<Offer, ApiError>;
    async fn reviews(&self, id: OfferId) -> Result<Vec<Review>, ApiError>;
    async fn post_review(&self, post: ReviewPost) -> Result<Review, ApiError>;
    async fn check_auth(&self) -> Result<User, ApiError>;
    async fn login(&self, data: AuthData) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

/// The `reqwest` backed client
#[derive(Clone)]
pub struct Model {
    pub url: String,
    client: reqwest::Client,
    repository: Repository,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url).finish()
    }
}

impl Model {
    pub fn new(config: &Config, repository: Repository) -> Result<Self, String> {
        let url = config.base_url()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| format!("Could not create client: {e:?}"))?;
        Ok(Self {
            url: url.as_str().trim_end_matches('/').to_string(),
            client,
            repository,
        })
    }

    /// Build a request and attach the stored token, if any
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.url);
        let builder = self.client.request(method, url);
        let Some(token) = self.repository.token() else {
            return builder;
        };
        match HeaderValue::from_str(&token) {
            Ok(value) => builder.header(TOKEN_HEADER, value),
            Err(e) => {
                log::error!("Stored token is not a valid header value: {e:?}");
                builder
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        call: &'static str,
    ) -> Result<T, ApiError> {
        log::trace!("{call}");
        let response = checked(builder.send().await, call).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
            .api_error(call)
    }

    async fn send_empty(&self, builder: RequestBuilder, call: &'static str) -> Result<(), ApiError> {
        log::trace!("{call}");
        checked(builder.send().await, call).await.map(|_| ())
    }
}

async fn checked(
    result: Result<reqwest::Response, reqwest::Error>,
    call: &'static str,
) -> Result<reqwest::Response, ApiError> {
    let response = result
        .map_err(|e| ApiError::Network(e.to_string()))
        .api_error(call)?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err::<reqwest::Response, _>(ApiError::Status {
        code: status.as_u16(),
        message: error_message(&body),
    })
    .api_error(call)
}

/// The backend answers errors with `{"errorType": .., "message": ..}`
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl Api for Model {
    async fn offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.send(self.request(Method::GET, "/offers"), "offers")
            .await
    }

    async fn offer(&self, id: OfferId) -> Result<OfferFull, ApiError> {
        self.send(self.request(Method::GET, &format!("/offers/{id}")), "offer")
            .await
    }

    async fn near_places(&self, id: OfferId) -> Result<Vec<Offer>, ApiError> {
        let path = format!("/offers/{id}/nearby");
        self.send(self.request(Method::GET, &path), "near_places")
            .await
    }

    async fn favorites(&self) -> Result<Vec<Offer>, ApiError> {
        self.send(self.request(Method::GET, "/favorite"), "favorites")
            .await
    }

    async fn change_favorite(&self, data: FavoriteData) -> Result<Offer, ApiError> {
        let path = format!("/favorite/{}/{}", data.id, data.status);
        self.send(self.request(Method::POST, &path), "change_favorite")
            .await
    }

    async fn reviews(&self, id: OfferId) -> Result<Vec<Review>, ApiError> {
        self.send(self.request(Method::GET, &format!("/comments/{id}")), "reviews")
            .await
    }

    async fn post_review(&self, post: ReviewPost) -> Result<Review, ApiError> {
        let builder = self
            .request(Method::POST, &format!("/comments/{}", post.offer_id))
            .json(&post.review);
        self.send(builder, "post_review").await
    }

    async fn check_auth(&self) -> Result<User, ApiError> {
        self.send(self.request(Method::GET, "/login"), "check_auth")
            .await
    }

    async fn login(&self, data: AuthData) -> Result<User, ApiError> {
        let builder = self.request(Method::POST, "/login").json(&data);
        self.send(builder, "login").await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, "/logout"), "logout")
            .await
    }
}

trait ResultExt {
    type Output;
    fn api_error(self, call: &'static str) -> Result<Self::Output, ApiError>;
}

impl<T> ResultExt for Result<T, ApiError> {
    type Output = T;
    fn api_error(self, call: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| {
            log::error!("API Error: {call} {e}");
            e
        })
    }
}
