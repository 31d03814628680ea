//! Store: single owner of the current state.
//!
//! A dispatched action flows through the middleware chain, then the root
//! reducer; the resulting state replaces the old one and subscribers are
//! notified synchronously on the dispatching thread.

mod container;
mod middleware;
mod shared;

pub use container::{Store, SubscriptionId};
pub use middleware::{LoggingMiddleware, Middleware};
pub use shared::SharedStore;

use crate::app::AppReducer;
use crate::config::StoreConfig;

pub type AppStore = Store<AppReducer>;

/// Build the application store: no prior state, logging middleware only.
pub fn app_store(config: &StoreConfig) -> AppStore {
    Store::new(None, vec![Box::new(LoggingMiddleware)], config)
}
