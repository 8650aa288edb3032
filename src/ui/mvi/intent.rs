/// Marker trait for page intents: key presses, form edits and settled
/// fetches.
pub trait Intent: Send + 'static {}
