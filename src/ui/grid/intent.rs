use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridIntent {
    /// Back to the first card (new list mounted).
    Reset,
    /// Move focus within `len` cards laid out `columns` wide.
    Move {
        direction: Direction,
        len: usize,
        columns: usize,
    },
}

impl Intent for GridIntent {}
