use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::{DashboardState, FEATURED_LIMIT};
use crate::ui::mvi::Reducer;
use crate::ui::remote::Remote;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::DashboardSettled(response) => {
                state.dashboard = state.dashboard.settle(response);
                state
            }
            DashboardIntent::MoviesSettled(response) => {
                let featured = state.active_query.is_none();
                let response = response.map(|mut movies| {
                    if featured {
                        movies.truncate(FEATURED_LIMIT);
                    }
                    movies
                });
                if state.movies.is_loading() {
                    state.selected = 0;
                }
                state.movies = state.movies.settle(response);
                state
            }
            DashboardIntent::SelectNext => {
                let len = state.movies.loaded().map_or(0, Vec::len);
                if len > 0 {
                    state.selected = (state.selected + 1) % len;
                }
                state
            }
            DashboardIntent::SelectPrev => {
                let len = state.movies.loaded().map_or(0, Vec::len);
                if len > 0 {
                    state.selected = if state.selected == 0 {
                        len - 1
                    } else {
                        state.selected - 1
                    };
                }
                state
            }
            DashboardIntent::OpenSearch => {
                if state.search_input.is_none() {
                    state.search_input = Some(state.active_query.clone().unwrap_or_default());
                }
                state
            }
            DashboardIntent::SearchInput(ch) => {
                if let Some(input) = state.search_input.as_mut() {
                    if !ch.is_control() {
                        input.push(ch);
                    }
                }
                state
            }
            DashboardIntent::SearchBackspace => {
                if let Some(input) = state.search_input.as_mut() {
                    input.pop();
                }
                state
            }
            DashboardIntent::CancelSearch => {
                state.search_input = None;
                state
            }
            DashboardIntent::SubmitSearch => {
                // A list request is already in flight; let it settle first.
                if state.movies.is_loading() {
                    return state;
                }
                let Some(input) = state.search_input.take() else {
                    return state;
                };
                let query = input.trim();
                state.active_query = (!query.is_empty()).then(|| query.to_string());
                state.movies = Remote::Loading;
                state.selected = 0;
                state
            }
        }
    }
}
