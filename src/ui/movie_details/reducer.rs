use crate::ui::movie_details::intent::MovieDetailsIntent;
use crate::ui::movie_details::state::MovieDetailsState;
use crate::ui::mvi::Reducer;

pub struct MovieDetailsReducer;

impl Reducer for MovieDetailsReducer {
    type State = MovieDetailsState;
    type Intent = MovieDetailsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MovieDetailsIntent::MovieSettled(response) => {
                state.movie = state.movie.settle(response);
            }
            MovieDetailsIntent::ReviewsSettled(response) => {
                state.reviews = state.reviews.settle(response);
            }
            MovieDetailsIntent::ScrollDown => {
                state.scroll = state.scroll.saturating_add(1);
            }
            MovieDetailsIntent::ScrollUp => {
                state.scroll = state.scroll.saturating_sub(1);
            }
        }
        state
    }
}
