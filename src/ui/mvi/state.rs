/// Marker trait for UI state objects.
///
/// States are cloned to derive new ones and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
