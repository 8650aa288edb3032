//! Authenticated landing page: role-specific summary plus a movie list.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::{DashboardState, FEATURED_LIMIT};
