//! State-container primitives.
//!
//! This module provides the base traits for unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Middleware ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                                │
//!    └────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of application state
//! - **Action**: User intents or system events
//! - **Reducer**: Pure function that transforms state based on actions

mod action;
mod reducer;
mod state;

pub use action::{Action, BootstrapAction};
pub use reducer::Reducer;
pub use state::State;
