use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::api::filters::{MovieFilters, MovieSearch, ReviewQuery};
use crate::api::response::{settle, ApiResponse, Failure, Operation};
use crate::api::types::{
    DashboardRole, DashboardView, LoginForm, Movie, MovieList, Registration, Review, ReviewDraft,
    ReviewList, TokenPair,
};

/// Address of the movie service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Result of asking for one dashboard variant.
///
/// `Forbidden` is kept apart from other failures because it is the only
/// status that drives the user-to-admin fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardFetch {
    Loaded(DashboardView),
    Forbidden,
    Failed(String),
}

/// Stateless client for the movie service.
///
/// Every call sends exactly one request and never retries. Cloning shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct MovieClient {
    http: Client,
    base: Url,
}

impl MovieClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) address".to_string(),
            });
        }
        if let Ok(mut segments) = base.path_segments_mut() {
            segments.pop_if_empty();
        }

        let http = Client::builder().build().map_err(ClientError::Build)?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub async fn register(&self, registration: &Registration) -> ApiResponse<Value> {
        let request = self
            .http
            .post(self.url(&["auth", "register"]))
            .json(registration);
        self.execute(Operation::Register, request).await.into()
    }

    pub async fn login(&self, form: &LoginForm) -> ApiResponse<TokenPair> {
        let body = match serde_urlencoded::to_string(form) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode login form");
                return ApiResponse::Error(Operation::Login.fallback_message().to_string());
            }
        };
        let request = self
            .http
            .post(self.url(&["auth", "login"]))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        self.fetch(Operation::Login, request, None).await
    }

    /// Ask the server to revoke `refresh_token`.
    ///
    /// Callers treat the outcome as advisory; see `session::logout`.
    pub async fn logout(&self, refresh_token: &str) -> ApiResponse<()> {
        let request = self
            .http
            .post(self.url(&["auth", "logout"]))
            .json(&serde_json::json!({ "refresh_token": refresh_token }));
        self.execute(Operation::Logout, request)
            .await
            .map(|_| ())
            .into()
    }

    pub async fn list_movies(&self, filters: &MovieFilters) -> ApiResponse<Vec<Movie>> {
        let url = with_query(self.url(&["movies", ""]), &filters.query_pairs());
        let request = self.http.get(url);
        self.fetch::<MovieList>(Operation::ListMovies, request, None)
            .await
            .map(|list| list.movies)
    }

    pub async fn search_movies(&self, search: &MovieSearch) -> ApiResponse<Vec<Movie>> {
        let url = with_query(self.url(&["movies", "search", ""]), &search.query_pairs());
        let request = self.http.get(url);
        self.fetch::<MovieList>(Operation::SearchMovies, request, None)
            .await
            .map(|list| list.movies)
    }

    pub async fn get_movie(&self, movie_id: &str) -> ApiResponse<Movie> {
        let request = self.http.get(self.url(&["movies", movie_id]));
        self.fetch(Operation::GetMovie, request, None).await
    }

    pub async fn get_reviews(&self, movie_id: &str, query: &ReviewQuery) -> ApiResponse<Vec<Review>> {
        let url = with_query(self.url(&["movies", movie_id, "reviews"]), &query.query_pairs());
        let request = self.http.get(url);
        self.fetch::<ReviewList>(Operation::GetReviews, request, None)
            .await
            .map(|list| list.reviews)
    }

    pub async fn add_review(
        &self,
        movie_id: &str,
        draft: &ReviewDraft,
        access_token: &str,
    ) -> ApiResponse<Value> {
        let request = self
            .http
            .post(self.url(&["movies", movie_id, "reviews"]))
            .json(draft);
        self.fetch(Operation::AddReview, request, Some(access_token))
            .await
    }

    pub async fn dashboard(&self, role: DashboardRole, access_token: &str) -> DashboardFetch {
        let request = self
            .http
            .get(self.url(&["dashboard", role.path_segment()]))
            .bearer_auth(access_token);
        let result = self
            .execute(Operation::Dashboard, request)
            .await
            .and_then(|value| decode::<DashboardView>(Operation::Dashboard, value));

        match result {
            Ok(view) => DashboardFetch::Loaded(view),
            Err(failure) if failure.is_forbidden() => DashboardFetch::Forbidden,
            Err(failure) => DashboardFetch::Failed(failure.message),
        }
    }

    /// Send, settle and decode in one step.
    async fn fetch<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
        access_token: Option<&str>,
    ) -> ApiResponse<T> {
        let request = match access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        self.execute(op, request)
            .await
            .and_then(|value| decode(op, value))
            .into()
    }

    async fn execute(&self, op: Operation, request: RequestBuilder) -> Result<Value, Failure> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(operation = op.name(), error = %err, "request failed");
                return Err(Failure::network());
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(operation = op.name(), %status, error = %err, "failed to read body");
                return Err(Failure::network());
            }
        };

        let result = settle(op, status, &body);
        match &result {
            Ok(_) => tracing::debug!(operation = op.name(), %status, "request settled"),
            Err(failure) if status == StatusCode::FORBIDDEN => {
                tracing::debug!(operation = op.name(), %status, message = %failure.message, "forbidden")
            }
            Err(failure) => {
                tracing::info!(operation = op.name(), %status, message = %failure.message, "request rejected")
            }
        }
        result
    }

    /// Build an endpoint URL under the base path. Each segment is encoded on
    /// its own, so identifiers cannot smuggle `/` or `?`.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn with_query(mut url: Url, pairs: &[(&'static str, String)]) -> Url {
    if !pairs.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    }
    url
}

fn decode<T: DeserializeOwned>(op: Operation, value: Value) -> Result<T, Failure> {
    serde_json::from_value(value).map_err(|err| {
        tracing::warn!(operation = op.name(), error = %err, "unexpected response shape");
        Failure::network()
    })
}
