use crate::api::{ApiResponse, Movie, Review};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MovieDetailsIntent {
    MovieSettled(ApiResponse<Movie>),
    ReviewsSettled(ApiResponse<Vec<Review>>),
    ScrollDown,
    ScrollUp,
}

impl Intent for MovieDetailsIntent {}
