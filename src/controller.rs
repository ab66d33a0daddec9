//! Application Controller
//!
//! Sole owner of `AppState`. Every dispatch reduces, then saves.

use crate::env::{Clock, IdSource};
use crate::persistence::Persistence;
use crate::store::{reduce, Action, AppState, ReduceEnv};

pub struct Controller<P, I, C> {
    state: AppState,
    persistence: P,
    ids: I,
    clock: C,
}

impl<P: Persistence, I: IdSource, C: Clock> Controller<P, I, C> {
    /// Rehydrate from persistence, falling back to a fresh seeded state
    pub fn start(persistence: P, ids: I, clock: C) -> Self {
        let state = match persistence.load() {
            Ok(Some(state)) => {
                log::info!(
                    "rehydrated store ({} comments, {} discussions)",
                    state.comments.len(),
                    state.discussions.len()
                );
                state
            }
            Ok(None) => {
                log::info!("no saved store, starting fresh");
                AppState::seeded()
            }
            Err(e) => {
                log::warn!("discarding saved store: {}", e);
                AppState::seeded()
            }
        };
        Self { state, persistence, ids, clock }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> &AppState {
        log::debug!("dispatch {:?}", action);
        let mut env = ReduceEnv { ids: &mut self.ids, now: self.clock.now() };
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action, &mut env);

        // Memory state stays authoritative when the write fails
        if let Err(e) = self.persistence.save(&self.state) {
            log::warn!("failed to persist store: {}", e);
        }
        &self.state
    }
}
