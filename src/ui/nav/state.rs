use std::fmt;

use crate::ui::mvi::UiState;

/// A screen the application can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Menu,
    Movies,
    /// Detail view for a movie. The id is passed through as an opaque string.
    Details(String),
    About,
}

impl Route {
    /// Path form: `menu`, `movies`, `details/{id}`, `about`.
    pub fn path(&self) -> String {
        match self {
            Route::Menu => "menu".to_string(),
            Route::Movies => "movies".to_string(),
            Route::Details(id) => format!("details/{id}"),
            Route::About => "about".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

static START_ROUTE: Route = Route::Menu;

/// Back stack. Never empty; the bottom entry is the start route.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    stack: Vec<Route>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            stack: vec![START_ROUTE.clone()],
        }
    }
}

impl UiState for NavState {}

impl NavState {
    pub(super) fn from_stack(stack: Vec<Route>) -> Self {
        if stack.is_empty() {
            return Self::default();
        }
        Self { stack }
    }

    pub(super) fn into_stack(self) -> Vec<Route> {
        self.stack
    }

    pub fn current(&self) -> &Route {
        // from_stack keeps at least one entry
        self.stack.last().unwrap_or(&START_ROUTE)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_root(&self) -> bool {
        self.stack.len() == 1
    }
}
