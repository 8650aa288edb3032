use crate::api::{Movie, Review};
use crate::ui::mvi::UiState;
use crate::ui::remote::Remote;

/// Movie page state. `movie` and `reviews` come from two concurrent
/// requests and neither waits on the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDetailsState {
    pub movie_id: String,
    pub movie: Remote<Movie>,
    pub reviews: Remote<Vec<Review>>,
    /// First review line shown.
    pub scroll: u16,
}

impl UiState for MovieDetailsState {}

impl MovieDetailsState {
    pub fn new(movie_id: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            ..Self::default()
        }
    }
}
