//! Role resolution for the dashboard page.

use crate::api::client::{DashboardFetch, MovieClient};
use crate::api::response::{ApiResponse, Operation};
use crate::api::types::{DashboardRole, DashboardView};

/// Load whichever dashboard the token's role may see.
///
/// Asks for the user dashboard first. A 403 there triggers exactly one
/// request for the admin dashboard. Anything else ends the sequence, so at
/// most two requests are ever sent.
pub async fn resolve_dashboard(client: &MovieClient, access_token: &str) -> ApiResponse<DashboardView> {
    let first = client.dashboard(DashboardRole::User, access_token).await;
    let outcome = match first {
        DashboardFetch::Forbidden => {
            tracing::debug!("user dashboard forbidden, trying admin dashboard");
            client.dashboard(DashboardRole::Admin, access_token).await
        }
        other => other,
    };

    match outcome {
        DashboardFetch::Loaded(view) => ApiResponse::Data(view),
        DashboardFetch::Forbidden => {
            tracing::warn!("both dashboards forbidden for this session");
            ApiResponse::Error(Operation::Dashboard.fallback_message().to_string())
        }
        DashboardFetch::Failed(message) => {
            tracing::warn!(%message, "dashboard request failed");
            ApiResponse::Error(Operation::Dashboard.fallback_message().to_string())
        }
    }
}
