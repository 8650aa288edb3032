//! Records exchanged with the movie service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account role requested at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
        }
    }

    /// Parse a role typed by the user. Unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "moderator" => Some(Role::Moderator),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub metadata: MovieMetadata,
}

/// Descriptive movie fields as the service names them.
///
/// Everything except the title tolerates absence and decodes to an empty
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieMetadata {
    pub title: String,
    #[serde(rename = "movieIMDbRating", default)]
    pub rating: f64,
    #[serde(default)]
    pub total_rating_count: u64,
    #[serde(rename = "movieGenres", default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub creators: Vec<String>,
    #[serde(rename = "mainStars", default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub date_published: String,
    #[serde(default)]
    pub description: String,
    /// Runtime in minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub meta_score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub user: String,
    pub usefulness_vote: Option<u32>,
    pub total_votes: Option<u32>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub review: String,
}

/// Body for posting a new review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewDraft {
    pub review_title: String,
    pub review_text: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewList {
    pub reviews: Vec<Review>,
}

/// Dashboard payload: either the user shape or the admin shape.
///
/// The variant is picked by which required field is present: `username` for
/// users, `system_stats` for admins. A user payload is tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashboardView {
    User(UserDashboard),
    Admin(AdminDashboard),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDashboard {
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub transactions: Vec<Value>,
    #[serde(default)]
    pub penalties: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboard {
    #[serde(default)]
    pub user_id: String,
    pub system_stats: SystemStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_users: u64,
    pub active_penalties: u64,
}

/// Which dashboard endpoint to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardRole {
    User,
    Admin,
}

impl DashboardRole {
    pub fn path_segment(self) -> &'static str {
        match self {
            DashboardRole::User => "user",
            DashboardRole::Admin => "admin",
        }
    }
}
