//! Cloneable store handle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::ReentrantMutex;

use crate::mvi::Reducer;
use crate::store::container::{Store, SubscriptionId};

struct Inner<R: Reducer> {
    store: RefCell<Store<R>>,
    pending: RefCell<VecDeque<R::Action>>,
}

impl<R: Reducer> Inner<R> {
    fn next_pending(&self) -> Option<R::Action> {
        self.pending.borrow_mut().pop_front()
    }

    fn drain(&self, store: &mut Store<R>) {
        while let Some(action) = self.next_pending() {
            store.dispatch(action);
        }
    }
}

/// Shared handle to a [`Store`] for components that dispatch or subscribe
/// without owning it.
///
/// Dispatches from other threads wait for the running one. A dispatch made
/// by a subscriber while it is being notified is queued and applied once the
/// current notification round finishes, so actions are still reduced one at
/// a time and in order.
pub struct SharedStore<R: Reducer> {
    inner: Arc<ReentrantMutex<Inner<R>>>,
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> SharedStore<R> {
    pub fn new(store: Store<R>) -> Self {
        Self {
            inner: Arc::new(ReentrantMutex::new(Inner {
                store: RefCell::new(store),
                pending: RefCell::new(VecDeque::new()),
            })),
        }
    }

    pub fn dispatch(&self, action: R::Action) {
        let inner = self.inner.lock();
        inner.pending.borrow_mut().push_back(action);

        // Store already borrowed: we are inside a subscriber on this thread,
        // and the outer dispatch drains the queue.
        let Ok(mut store) = inner.store.try_borrow_mut() else {
            tracing::debug!("dispatch queued behind running notification");
            return;
        };
        inner.drain(&mut store);
    }

    /// Clone of the current state.
    ///
    /// # Panics
    ///
    /// When called from inside a subscriber; subscribers receive the state
    /// as their argument.
    pub fn state(&self) -> R::State {
        self.inner.lock().store.borrow().state().clone()
    }

    /// Register a subscriber. Dispatches it makes during its initial call
    /// are applied before this returns.
    ///
    /// # Panics
    ///
    /// When called from inside a subscriber.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let inner = self.inner.lock();
        let mut store = inner.store.borrow_mut();
        let id = store.subscribe(callback);
        inner.drain(&mut store);
        id
    }

    /// # Panics
    ///
    /// When called from inside a subscriber.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().store.borrow_mut().unsubscribe(id)
    }
}
