//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::PortalConfig;
use crate::controller::Controller;
use crate::env::{RandomIds, SystemClock};
use crate::persistence::LocalStoragePersistence;
use crate::routes::Route;
use crate::store::{Action, AppStore};

pub type PortalController = Controller<LocalStoragePersistence, RandomIds, SystemClock>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct PortalContext {
    /// Reactive mirror of the controller state - read
    pub store: AppStore,
    /// Owner of the authoritative state
    controller: StoredValue<PortalController>,
    /// Requested route (the guard may redirect) - read
    pub route: ReadSignal<Route>,
    /// Requested route - write
    set_route: WriteSignal<Route>,
    pub config: PortalConfig,
}

impl PortalContext {
    pub fn new(
        store: AppStore,
        controller: PortalController,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        config: PortalConfig,
    ) -> Self {
        Self {
            store,
            controller: StoredValue::new(controller),
            route: route.0,
            set_route: route.1,
            config,
        }
    }

    /// Run an action through the controller and publish the new state
    pub fn dispatch(&self, action: Action) {
        self.controller.update_value(|c| {
            c.dispatch(action);
        });
        let next = self.controller.with_value(|c| c.state().clone());
        self.store.set(next);
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }
}

/// Get the portal context
pub fn use_portal() -> PortalContext {
    expect_context::<PortalContext>()
}
