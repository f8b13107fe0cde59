//! The Theme System Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod dialogs;
mod journal;
mod models;
mod status;
mod storage;
mod store;
#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("starting The Theme System");
    mount_to_body(App);
}
