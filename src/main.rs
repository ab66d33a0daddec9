//! Galway Student Portal Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod env;
mod sentiment;
mod reference;
mod store;
mod persistence;
mod controller;
mod views;
mod validation;
mod routes;
mod context;
mod components;
mod app;

use app::App;
use config::PortalConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(PortalConfig::default().log_level);
    mount_to_body(App);
}
