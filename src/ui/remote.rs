//! One independently fetched slot of page state.

use crate::api::ApiResponse;

/// `Loading` until the first response settles, then terminal until the page
/// is re-entered.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

impl<T> Remote<T> {
    /// Apply a settled response. Only a `Loading` slot accepts it; a slot
    /// that has already settled ignores late arrivals.
    pub fn settle(self, response: ApiResponse<T>) -> Self {
        match self {
            Remote::Loading => response.into(),
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<ApiResponse<T>> for Remote<T> {
    fn from(response: ApiResponse<T>) -> Self {
        match response {
            ApiResponse::Data(value) => Remote::Loaded(value),
            ApiResponse::Error(message) => Remote::Failed(message),
        }
    }
}
