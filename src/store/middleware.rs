use std::fmt::Debug;

/// Observer placed between `dispatch` and the reducer.
///
/// Middleware runs for every action, in registration order, before the
/// reducer sees it. It cannot drop, delay or rewrite the action.
pub trait Middleware<S, A>: Send {
    /// `state` is the state the action will be applied to. It is `None`
    /// only for the bootstrap action of a store built without prior state.
    fn before_reduce(&self, action: &A, state: Option<&S>);
}

/// Logs every dispatched action.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl<S, A: Debug> Middleware<S, A> for LoggingMiddleware {
    fn before_reduce(&self, action: &A, _state: Option<&S>) {
        tracing::info!(target: "counter_store::action", "Action: {:?}", action);
    }
}
