//! Base traits for actions (user/system intents).

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (button taps, typed commands)
/// - System events (store bootstrap)
///
/// Actions are consumed by reducers to produce new states.
pub trait Action: Debug + Send + 'static {}

/// An action type that can express the store's bootstrap event.
///
/// A store built without prior state dispatches `init()` once so the
/// root reducer builds the initial state.
pub trait BootstrapAction: Action {
    fn init() -> Self;
}
