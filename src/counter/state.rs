use serde::{Deserialize, Serialize};

use crate::mvi::State;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    /// Saturates at the `i64` bounds instead of wrapping.
    pub counter: i64,
}

impl State for CounterState {}
