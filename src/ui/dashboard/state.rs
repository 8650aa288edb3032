use crate::api::{DashboardView, Movie};
use crate::ui::mvi::UiState;
use crate::ui::remote::Remote;

/// Number of movies shown in the featured (unfiltered) list.
pub const FEATURED_LIMIT: usize = 6;

/// Dashboard page state. The two slots are fetched and settle
/// independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub dashboard: Remote<DashboardView>,
    pub movies: Remote<Vec<Movie>>,
    /// Index into the loaded movie list.
    pub selected: usize,
    /// Title query being typed, if the search line is open.
    pub search_input: Option<String>,
    /// Query behind the current movie list. `None` means featured movies.
    pub active_query: Option<String>,
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.loaded().and_then(|movies| movies.get(self.selected))
    }

    pub fn is_searching(&self) -> bool {
        self.search_input.is_some()
    }
}
