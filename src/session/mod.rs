//! Token lifecycle: written at login, read by protected pages, cleared at
//! logout.
//!
//! All writes to [`TokenStore`] go through this module so the clearing rule
//! lives in one place.

mod store;

pub use store::{StoreError, TokenStore};

use crate::api::{ApiResponse, LoginForm, MovieClient, TokenPair};

/// Log in and persist the returned token pair.
///
/// A failed write is logged; the session still counts as signed in for the
/// life of the process.
pub async fn login(client: &MovieClient, store: &TokenStore, form: &LoginForm) -> ApiResponse<TokenPair> {
    let response = client.login(form).await;
    if let ApiResponse::Data(tokens) = &response {
        if let Err(err) = store.save(tokens.clone()) {
            tracing::warn!(error = %err, "failed to persist tokens");
        }
        tracing::info!(username = %form.username, "signed in");
    }
    response
}

/// End the session.
///
/// The server is asked to revoke the refresh token if one is stored. Both
/// tokens are then cleared locally whatever the server said, or whether it
/// answered at all.
pub async fn logout(client: &MovieClient, store: &TokenStore) {
    if let Some(refresh_token) = store.refresh_token() {
        if let ApiResponse::Error(message) = client.logout(&refresh_token).await {
            tracing::warn!(%message, "server-side logout failed, clearing local session anyway");
        }
    }

    if let Err(err) = store.clear() {
        tracing::warn!(error = %err, "failed to remove token file");
    }
    tracing::info!("signed out");
}
