/// Marker trait for intents: user actions or navigation requests that a
/// reducer turns into a new state.
pub trait Intent: Send + 'static {}
