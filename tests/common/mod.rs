//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use cinedeck::api::{MovieClient, TokenPair};
use cinedeck::session::TokenStore;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// An address nothing is listening on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn client_for(backend: &MockBackend) -> MovieClient {
    MovieClient::new(&backend.base_url()).expect("mock base URL is valid")
}

pub fn sample_tokens() -> TokenPair {
    TokenPair {
        access_token: "access-123".to_string(),
        refresh_token: "refresh-456".to_string(),
        token_type: "bearer".to_string(),
    }
}

/// A token store backed by a file in a fresh temp dir.
pub fn temp_token_store() -> (TempDir, PathBuf, TokenStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("session").join("tokens.json");
    let store = TokenStore::open(&path);
    (temp_dir, path, store)
}

pub fn movie_json(id: &str, title: &str, rating: f64) -> Value {
    json!({
        "id": id,
        "metadata": {
            "title": title,
            "movieIMDbRating": rating,
            "totalRatingCount": 1000,
            "movieGenres": ["Drama"],
            "directors": ["Someone"],
            "creators": [],
            "mainStars": ["A Star"],
            "datePublished": "2019-10-04",
            "description": "A description.",
            "duration": 120,
            "metaScore": "70"
        }
    })
}

pub fn movie_list_json(count: usize) -> Value {
    let movies: Vec<Value> = (0..count)
        .map(|i| movie_json(&format!("m{i}"), &format!("Movie {i}"), 9.0 - i as f64 * 0.1))
        .collect();
    json!({ "movies": movies })
}

pub fn review_json(user: &str, rating: f64) -> Value {
    json!({
        "date": "2020-01-01",
        "user": user,
        "usefulness_vote": 3,
        "total_votes": 5,
        "rating": rating,
        "title": "Great",
        "review": "Loved it."
    })
}

pub fn user_dashboard_json() -> Value {
    json!({
        "username": "alice",
        "role": "user",
        "transactions": [],
        "penalties": []
    })
}

pub fn admin_dashboard_json() -> Value {
    json!({
        "user_id": "admin-1",
        "role": "admin",
        "system_stats": { "total_users": 42, "active_penalties": 3 }
    })
}

// -- App helpers --------------------------------------------------------------

use cinedeck::ui::app::App;
use cinedeck::ui::events::AppEvent;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// An app wired to `base_url`. Must be called inside a multi-thread tokio
/// runtime so spawned fetches run while the test blocks on the receiver.
pub fn make_app(base_url: &str, tokens: TokenStore) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let client = MovieClient::new(base_url).expect("valid base URL");
    let app = App::new(client, tokens, tx, tokio::runtime::Handle::current());
    (app, rx)
}

/// Deliver the next `count` fetch results to the app, in arrival order.
pub fn pump(app: &mut App, rx: &Receiver<AppEvent>, count: usize) {
    for _ in 0..count {
        let event = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("fetch should settle");
        if let AppEvent::Fetched { generation, result } = event {
            app.on_fetched(generation, result);
        }
    }
}

pub fn signed_in_store() -> TokenStore {
    let store = TokenStore::in_memory();
    store.save(sample_tokens()).expect("in-memory save cannot fail");
    store
}
