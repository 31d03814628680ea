use serde::{Deserialize, Serialize};

use crate::counter::CounterState;
use crate::mvi::State;
use crate::other::OtherState;

/// Root state. Always fully populated; sub-states start from their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub counter_state: CounterState,
    pub other_state: OtherState,
}

impl State for AppState {}

impl AppState {
    pub fn counter(&self) -> i64 {
        self.counter_state.counter
    }
}
