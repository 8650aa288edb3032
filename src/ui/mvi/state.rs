/// Marker trait for page state.
///
/// `Default` is the state a page starts in when it is activated.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
