use serde::{Deserialize, Serialize};

use crate::mvi::State;

/// Placeholder slot in [`AppState`](crate::app::AppState). Holds no data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OtherState {}

impl State for OtherState {}
