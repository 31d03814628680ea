//! A small unidirectional-data-flow state container driving a counter.
//!
//! Actions are dispatched to a [`store::Store`], observed by middleware,
//! reduced by [`app::AppReducer`] into a new [`app::AppState`] and pushed
//! to subscribers.

pub mod app;
pub mod config;
pub mod counter;
pub mod lifecycle;
pub mod logging;
pub mod mvi;
pub mod other;
pub mod persistence;
pub mod store;
