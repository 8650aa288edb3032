//! Text-entry forms: login, registration and review composition.
//!
//! The only client-side check is presence. Everything else is left to the
//! server, whose `detail` message comes back through `Settled`.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FieldKind, FormField, FormState, FormStatus};
