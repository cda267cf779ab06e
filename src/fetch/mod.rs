//! Fetch coordination for screens.
//!
//! ```text
//! mount(key) ──→ Loading ──spawn──→ MovieSource ──→ Resolve ──→ Error | Loaded
//!                                                        │
//!                           stale generation? ───────────┴──→ dropped
//! ```

mod coordinator;
mod resolve;
mod state;

pub use coordinator::{FetchCoordinator, SettledHook};
pub use resolve::{LoadError, MovieById, PopularList, Resolve};
pub use state::FetchState;

use crate::tmdb::Movie;

/// Coordinator backing the movie list screen.
pub type ListCoordinator<S> = FetchCoordinator<S, PopularList>;

/// Coordinator backing the movie detail screen.
pub type DetailCoordinator<S> = FetchCoordinator<S, MovieById>;

pub type ListState = FetchState<Vec<Movie>>;
pub type DetailState = FetchState<Movie>;
