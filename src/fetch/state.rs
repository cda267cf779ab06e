use crate::ui::mvi::UiState;

/// What a screen currently knows about its data.
///
/// Starts as `Loading`; settles exactly once per mount into `Error` or
/// `Loaded`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchState<T> {}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
