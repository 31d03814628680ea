use std::fmt;

use uuid::Uuid;

use crate::config::StoreConfig;
use crate::mvi::{BootstrapAction, Reducer};
use crate::store::middleware::Middleware;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Callback<S> = Box<dyn FnMut(&S) + Send>;
type MiddlewareChain<S, A> = Vec<Box<dyn Middleware<S, A>>>;

struct Subscriber<S> {
    id: SubscriptionId,
    callback: Callback<S>,
}

/// Holds the current state and mediates dispatch and subscription.
pub struct Store<R: Reducer> {
    state: R::State,
    middleware: MiddlewareChain<R::State, R::Action>,
    subscribers: Vec<Subscriber<R::State>>,
    skip_repeats: bool,
}

impl<R: Reducer> Store<R>
where
    R::Action: BootstrapAction,
{
    /// Create a store.
    ///
    /// Without prior state the bootstrap action is run through the
    /// middleware chain and the reducer to build the initial state.
    pub fn new(
        state: Option<R::State>,
        middleware: MiddlewareChain<R::State, R::Action>,
        config: &StoreConfig,
    ) -> Self {
        let state = match state {
            Some(state) => state,
            None => {
                let action = R::Action::init();
                for m in &middleware {
                    m.before_reduce(&action, None);
                }
                R::reduce(None, &action)
            }
        };

        Self {
            state,
            middleware,
            subscribers: Vec::new(),
            skip_repeats: config.skip_repeats,
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Current state snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run `action` through middleware and the reducer, replace the state
    /// and notify subscribers.
    ///
    /// Every dispatch notifies, unless `skip_repeats` is enabled and the
    /// new state equals the previous one.
    pub fn dispatch(&mut self, action: R::Action) {
        for m in &self.middleware {
            m.before_reduce(&action, Some(&self.state));
        }

        let next = R::reduce(Some(self.state.clone()), &action);
        let changed = next != self.state;
        self.state = next;

        if changed || !self.skip_repeats {
            self.notify();
        }
    }

    /// Register a subscriber. It is called once immediately with the
    /// current state, then after every notifying dispatch.
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        callback(&self.state);
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        tracing::debug!(%id, "subscriber added");
        id
    }

    /// Remove a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        let removed = self.subscribers.len() != before;
        if removed {
            tracing::debug!(%id, "subscriber removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&self.state);
        }
    }
}
