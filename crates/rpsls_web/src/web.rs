//! The browser app proper. Compiled only with `--features web` on wasm32.

mod api;
mod app;
mod computer;
mod home;
mod hub;
mod menu;
mod opponent;
mod results;
mod shell;
mod storage;

/// localStorage key holding the player's display name.
pub(crate) const PLAYER_NAME_KEY: &str = "playerName";

/// localStorage key overriding the compiled API origin.
pub(crate) const API_BASE_KEY: &str = "rpsls.api_base.v1";

use leptos::prelude::*;

/// Mounts the app; called once from the wasm entrypoint.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    mount_to_body(|| view! { <app::App /> });
}
