mod action;
mod reducer;
mod state;

pub use action::OtherAction;
pub use reducer::OtherReducer;
pub use state::OtherState;
