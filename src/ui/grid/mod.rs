mod intent;
mod reducer;
mod state;

pub use intent::{Direction, GridIntent};
pub use reducer::GridReducer;
pub use state::GridState;
