mod action;
mod reducer;
mod state;

pub use action::{ActionParseError, AppAction};
pub use reducer::AppReducer;
pub use state::AppState;
