mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, Route};
