use crate::api::{ApiResponse, DashboardView, Movie};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    DashboardSettled(ApiResponse<DashboardView>),
    MoviesSettled(ApiResponse<Vec<Movie>>),
    SelectNext,
    SelectPrev,
    OpenSearch,
    SearchInput(char),
    SearchBackspace,
    CancelSearch,
    /// Replace the movie list with results for the typed title. An empty
    /// query goes back to the featured list.
    SubmitSearch,
}

impl Intent for DashboardIntent {}
