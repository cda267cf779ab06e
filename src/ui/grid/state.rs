use crate::ui::mvi::UiState;

/// Focused card on the movie list screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridState {
    pub focused: usize,
}

impl UiState for GridState {}

impl GridState {
    pub fn row(&self, columns: usize) -> usize {
        self.focused / columns.max(1)
    }
}
