use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    MoveUp,
    MoveDown,
    /// Jump straight to an entry (e.g. by its number key).
    Focus(usize),
}

impl Intent for MenuIntent {}
