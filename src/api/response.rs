//! Uniform result shape returned by every client operation.
//!
//! The client never surfaces transport errors, status codes or decode
//! failures to its callers. Everything collapses into [`ApiResponse`], which
//! is either data or a user-facing message.

use reqwest::StatusCode;
use serde_json::Value;

/// Message shown when the request never produced a usable JSON body.
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Outcome of a single API call: exactly one of data or error.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Data(T),
    Error(String),
}

impl<T> ApiResponse<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Data(data) => Some(data),
            ApiResponse::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Data(_) => None,
            ApiResponse::Error(message) => Some(message),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, ApiResponse::Data(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Data(data) => ApiResponse::Data(f(data)),
            ApiResponse::Error(message) => ApiResponse::Error(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResponse::Data(data) => Ok(data),
            ApiResponse::Error(message) => Err(message),
        }
    }
}

impl<T> From<Result<T, String>> for ApiResponse<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => ApiResponse::Data(data),
            Err(message) => ApiResponse::Error(message),
        }
    }
}

/// Every remote operation the client knows, with its fixed fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Login,
    Logout,
    ListMovies,
    GetMovie,
    GetReviews,
    SearchMovies,
    AddReview,
    Dashboard,
}

impl Operation {
    /// Short name used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Register => "register",
            Operation::Login => "login",
            Operation::Logout => "logout",
            Operation::ListMovies => "list_movies",
            Operation::GetMovie => "get_movie",
            Operation::GetReviews => "get_reviews",
            Operation::SearchMovies => "search_movies",
            Operation::AddReview => "add_review",
            Operation::Dashboard => "dashboard",
        }
    }

    /// Message used when the server rejects the call without a `detail`.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Register => "Registration failed",
            Operation::Login => "Login failed",
            Operation::Logout => "Logout failed",
            Operation::ListMovies => "Failed to fetch movies",
            Operation::GetMovie => "Movie not found",
            Operation::GetReviews => "Failed to fetch reviews",
            Operation::SearchMovies => "Failed to search movies",
            Operation::AddReview => "Failed to submit review",
            Operation::Dashboard => "Failed to load dashboard",
        }
    }
}

/// A failed call before it is flattened into [`ApiResponse::Error`].
///
/// `status` is `None` for transport and decode failures.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Failure {
    pub status: Option<StatusCode>,
    pub message: String,
}

impl Failure {
    pub fn network() -> Self {
        Self {
            status: None,
            message: NETWORK_ERROR.to_string(),
        }
    }

    pub fn is_forbidden(&self) -> bool {
        self.status == Some(StatusCode::FORBIDDEN)
    }
}

impl<T> From<Result<T, Failure>> for ApiResponse<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(data) => ApiResponse::Data(data),
            Err(failure) => ApiResponse::Error(failure.message),
        }
    }
}

/// Interpret a status and raw body for `op`.
///
/// The body must be JSON whatever the status. A rejected call reports the
/// server's string `detail` when there is one.
pub(crate) fn settle(op: Operation, status: StatusCode, body: &[u8]) -> Result<Value, Failure> {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return Err(Failure::network());
    };

    if status.is_success() {
        return Ok(value);
    }

    let message = value
        .get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .unwrap_or(op.fallback_message())
        .to_string();

    Err(Failure {
        status: Some(status),
        message,
    })
}
