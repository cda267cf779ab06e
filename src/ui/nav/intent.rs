use crate::ui::mvi::Intent;
use crate::ui::nav::state::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Push `route` on top of the stack.
    Navigate(Route),
    /// Pop the top route. Does nothing at the root.
    NavigateUp,
}

impl Intent for NavIntent {}
