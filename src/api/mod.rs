//! Typed access to the movie service's REST API.
//!
//! Every operation sends one request and returns [`ApiResponse`]. Nothing
//! here panics or returns `Err` on a network or server failure.

mod client;
mod dashboard;
mod filters;
mod response;
mod types;

pub use client::{ClientError, DashboardFetch, MovieClient, DEFAULT_BASE_URL};
pub use dashboard::resolve_dashboard;
pub use filters::{MovieFilters, MovieSearch, ReviewQuery, SortKey, SortOrder};
pub use response::{ApiResponse, Operation, NETWORK_ERROR};
pub use types::{
    AdminDashboard, DashboardRole, DashboardView, LoginForm, Movie, MovieList, MovieMetadata,
    Registration, Review, ReviewDraft, ReviewList, Role, SystemStats, TokenPair, UserDashboard,
};
