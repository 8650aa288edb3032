//! Client operations against a mock movie service.

mod common;

use cinedeck::api::{
    ApiResponse, LoginForm, MovieClient, MovieFilters, MovieSearch, Registration, ReviewDraft,
    ReviewQuery, Role, SortKey, SortOrder, NETWORK_ERROR,
};
use common::*;
use serde_json::json;

fn login_form() -> LoginForm {
    LoginForm {
        username: "alice".to_string(),
        password: "s3cret pass".to_string(),
    }
}

#[tokio::test]
async fn login_sends_form_encoded_credentials() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/auth/login",
            MockResponse::json(json!({
                "access_token": "a",
                "refresh_token": "r",
                "token_type": "bearer"
            })),
        )
        .await;

    let response = client_for(&backend).login(&login_form()).await;
    let tokens = response.data().expect("login should succeed");
    assert_eq!(tokens.access_token, "a");
    assert_eq!(tokens.refresh_token, "r");

    let requests = backend.requests_to("/auth/login").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(requests[0].body_text(), "username=alice&password=s3cret+pass");
}

#[tokio::test]
async fn login_failure_uses_server_detail() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/auth/login",
            MockResponse::error(401, "Incorrect username or password"),
        )
        .await;

    let response = client_for(&backend).login(&login_form()).await;
    assert_eq!(
        response,
        ApiResponse::Error("Incorrect username or password".to_string())
    );
}

#[tokio::test]
async fn login_failure_without_detail_falls_back() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/auth/login", MockResponse::with_status(500, json!({})))
        .await;
    backend
        .enqueue(
            "/auth/login",
            MockResponse::with_status(422, json!({"detail": [{"msg": "field required"}]})),
        )
        .await;

    let client = client_for(&backend);
    assert_eq!(
        client.login(&login_form()).await.error(),
        Some("Login failed")
    );
    // A structured detail is not a message.
    assert_eq!(
        client.login(&login_form()).await.error(),
        Some("Login failed")
    );
}

#[tokio::test]
async fn non_json_body_is_a_network_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/auth/login", MockResponse::text(502, "<html>Bad Gateway</html>"))
        .await;

    let response = client_for(&backend).login(&login_form()).await;
    assert_eq!(response.error(), Some(NETWORK_ERROR));
}

#[tokio::test]
async fn unexpected_success_shape_is_a_network_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/movies/", MockResponse::json(json!({"items": []})))
        .await;

    let response = client_for(&backend)
        .list_movies(&MovieFilters::default())
        .await;
    assert_eq!(response.error(), Some(NETWORK_ERROR));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = MovieClient::new(&unreachable_base_url()).unwrap();

    assert_eq!(client.login(&login_form()).await.error(), Some(NETWORK_ERROR));
    assert_eq!(client.get_movie("Joker").await.error(), Some(NETWORK_ERROR));
    assert_eq!(
        client.add_review("Joker", &draft(), "token").await.error(),
        Some(NETWORK_ERROR)
    );
}

#[tokio::test]
async fn list_movies_sends_only_present_filters() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/movies/", MockResponse::json(movie_list_json(2)))
        .await;
    backend
        .enqueue("/movies/", MockResponse::json(movie_list_json(0)))
        .await;

    let client = client_for(&backend);
    let filters = MovieFilters {
        genre: Some("Drama".to_string()),
        min_rating: Some(7.0),
        max_rating: None,
        sort_by: Some(SortKey::Rating),
        order: Some(SortOrder::Desc),
    };
    let movies = client.list_movies(&filters).await.into_result().unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].metadata.title, "Movie 0");

    let empty_genre = MovieFilters {
        genre: Some(String::new()),
        ..MovieFilters::default()
    };
    assert!(client.list_movies(&empty_genre).await.is_data());

    let requests = backend.requests_to("/movies/").await;
    assert_eq!(
        requests[0].query.as_deref(),
        Some("genre=Drama&min_rating=7&sort_by=rating&order=desc")
    );
    assert_eq!(requests[1].query, None);
}

#[tokio::test]
async fn list_movies_failure_uses_fallback() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/movies/", MockResponse::with_status(500, json!({"error": "boom"})))
        .await;

    let response = client_for(&backend)
        .list_movies(&MovieFilters::top_rated())
        .await;
    assert_eq!(response.error(), Some("Failed to fetch movies"));
}

#[tokio::test]
async fn get_movie_is_repeatable_and_encodes_the_id() {
    let backend = MockBackend::start().await;
    let body = movie_json("The Dark Knight", "The Dark Knight", 9.0);
    let path = "/movies/The%20Dark%20Knight";
    backend.enqueue(path, MockResponse::json(body.clone())).await;
    backend.enqueue(path, MockResponse::json(body)).await;

    let client = client_for(&backend);
    let first = client.get_movie("The Dark Knight").await;
    let second = client.get_movie("The Dark Knight").await;
    assert!(first.is_data());
    assert_eq!(first, second);
    assert_eq!(backend.requests_to(path).await.len(), 2);
}

#[tokio::test]
async fn missing_movie_reports_detail_or_fallback() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/movies/nope", MockResponse::error(404, "Movie nope does not exist"))
        .await;
    backend
        .enqueue("/movies/nope", MockResponse::with_status(404, json!(null)))
        .await;

    let client = client_for(&backend);
    assert_eq!(
        client.get_movie("nope").await.error(),
        Some("Movie nope does not exist")
    );
    assert_eq!(client.get_movie("nope").await.error(), Some("Movie not found"));
}

#[tokio::test]
async fn get_reviews_applies_review_query() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/movies/Joker/reviews",
            MockResponse::json(json!({"reviews": [review_json("bob", 8.0)]})),
        )
        .await;

    let query = ReviewQuery {
        min_rating: Some(5.0),
        limit: Some(10),
        ..ReviewQuery::default()
    };
    let reviews = client_for(&backend)
        .get_reviews("Joker", &query)
        .await
        .into_result()
        .unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].user, "bob");
    assert_eq!(reviews[0].usefulness_vote, Some(3));

    let request = &backend.requests_to("/movies/Joker/reviews").await[0];
    assert_eq!(request.query.as_deref(), Some("min_rating=5&limit=10"));
}

#[tokio::test]
async fn search_movies_hits_search_endpoint() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/movies/search/", MockResponse::json(movie_list_json(1)))
        .await;

    let search = MovieSearch {
        title: Some("Joker".to_string()),
        rating: Some(8.0),
    };
    let movies = client_for(&backend).search_movies(&search).await;
    assert_eq!(movies.data().map(Vec::len), Some(1));

    let request = &backend.requests_to("/movies/search/").await[0];
    assert_eq!(request.query.as_deref(), Some("title=Joker&rating=8"));
}

fn draft() -> ReviewDraft {
    ReviewDraft {
        review_title: "Masterpiece".to_string(),
        review_text: "Would watch again.".to_string(),
        rating: 9,
    }
}

#[tokio::test]
async fn add_review_sends_bearer_token_and_json() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/movies/Joker/reviews",
            MockResponse::with_status(201, json!({"message": "Review added"})),
        )
        .await;

    let response = client_for(&backend)
        .add_review("Joker", &draft(), "access-123")
        .await;
    assert!(response.is_data());

    let request = &backend.requests_to("/movies/Joker/reviews").await[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.header("authorization"), Some("Bearer access-123"));
    assert_eq!(
        request.body_json(),
        json!({
            "review_title": "Masterpiece",
            "review_text": "Would watch again.",
            "rating": 9
        })
    );
}

#[tokio::test]
async fn add_review_rejection_uses_fallback() {
    let backend = MockBackend::start().await;
    backend
        .enqueue("/movies/Joker/reviews", MockResponse::with_status(401, json!({})))
        .await;

    let response = client_for(&backend).add_review("Joker", &draft(), "stale").await;
    assert_eq!(response.error(), Some("Failed to submit review"));
}

#[tokio::test]
async fn register_posts_json_and_reports_detail() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/auth/register",
            MockResponse::json(json!({"message": "User registered successfully"})),
        )
        .await;
    backend
        .enqueue(
            "/auth/register",
            MockResponse::error(400, "Username already registered"),
        )
        .await;

    let registration = Registration {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "pw".to_string(),
        role: Role::Moderator,
    };
    let client = client_for(&backend);
    assert!(client.register(&registration).await.is_data());
    assert_eq!(
        client.register(&registration).await.error(),
        Some("Username already registered")
    );

    let request = &backend.requests_to("/auth/register").await[0];
    assert_eq!(
        request.body_json(),
        json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "pw",
            "role": "moderator"
        })
    );
}

#[tokio::test]
async fn logout_sends_refresh_token() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "/auth/logout",
            MockResponse::json(json!({"message": "Successfully logged out"})),
        )
        .await;

    let response = client_for(&backend).logout("refresh-456").await;
    assert_eq!(response, ApiResponse::Data(()));

    let request = &backend.requests_to("/auth/logout").await[0];
    assert_eq!(request.body_json(), json!({"refresh_token": "refresh-456"}));
}

#[tokio::test]
async fn every_outcome_is_exactly_data_or_error() {
    let backend = MockBackend::start().await;
    let outcomes = [
        MockResponse::json(movie_json("x", "X", 5.0)),
        MockResponse::error(404, "gone"),
        MockResponse::with_status(500, json!({})),
        MockResponse::text(200, "not json"),
    ];
    for outcome in outcomes {
        backend.enqueue("/movies/x", outcome).await;
    }

    let client = client_for(&backend);
    for _ in 0..4 {
        let response = client.get_movie("x").await;
        assert_ne!(response.data().is_some(), response.error().is_some());
    }
}
