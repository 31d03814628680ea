//! Application lifecycle glue.
//!
//! Owns the store handle and the lazily opened persistent container, and
//! tracks which lifecycle phase the host reported last.

use crate::app::AppReducer;
use crate::config::{Config, PersistenceConfig};
use crate::persistence::{PersistenceError, PersistentContainer};
use crate::store::{app_store, SharedStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    NotRunning,
    Inactive,
    Active,
    Background,
    Terminated,
}

/// Host callbacks. Every hook defaults to a no-op.
pub trait AppLifecycle {
    fn did_finish_launching(&mut self) {}
    fn will_resign_active(&mut self) {}
    fn did_enter_background(&mut self) {}
    fn will_enter_foreground(&mut self) {}
    fn did_become_active(&mut self) {}
    fn will_terminate(&mut self) {}
}

pub struct Application {
    store: SharedStore<AppReducer>,
    persistence: PersistenceConfig,
    container: Option<PersistentContainer>,
    phase: LifecyclePhase,
}

impl Application {
    pub fn new(config: &Config) -> Self {
        Self {
            store: SharedStore::new(app_store(&config.store)),
            persistence: config.persistence.clone(),
            container: None,
            phase: LifecyclePhase::NotRunning,
        }
    }

    pub fn store(&self) -> &SharedStore<AppReducer> {
        &self.store
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// The persistent container, opened on first access.
    pub fn persistent_container(
        &mut self,
    ) -> Result<&mut PersistentContainer, PersistenceError> {
        let container = match self.container.take() {
            Some(container) => container,
            None => PersistentContainer::load(
                &self.persistence.container_name,
                &self.persistence.resolved_directory(),
            )?,
        };
        Ok(self.container.insert(container))
    }

    /// Save pending container changes. No-op if the container was never opened.
    pub fn save_context(&mut self) -> Result<(), PersistenceError> {
        match self.container.as_mut() {
            Some(container) => container.save_context(),
            None => Ok(()),
        }
    }

    fn advance(&mut self, phase: LifecyclePhase) {
        tracing::info!(from = ?self.phase, to = ?phase, "lifecycle phase");
        self.phase = phase;
    }
}

impl AppLifecycle for Application {
    fn did_finish_launching(&mut self) {
        self.advance(LifecyclePhase::Inactive);
    }

    fn will_resign_active(&mut self) {
        self.advance(LifecyclePhase::Inactive);
    }

    fn did_enter_background(&mut self) {
        self.advance(LifecyclePhase::Background);
    }

    fn will_enter_foreground(&mut self) {
        self.advance(LifecyclePhase::Inactive);
    }

    fn did_become_active(&mut self) {
        self.advance(LifecyclePhase::Active);
    }

    fn will_terminate(&mut self) {
        if let Err(e) = self.save_context() {
            tracing::error!(error = %e, "failed to save persistent container");
        }
        self.advance(LifecyclePhase::Terminated);
    }
}
