mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::MovieDetailsIntent;
pub use reducer::MovieDetailsReducer;
pub use state::MovieDetailsState;
