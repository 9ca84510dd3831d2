//! Browser-hosted WASM front-end for Rock-Paper-Scissors-Lizard-Spock.
//!
//! This crate is intentionally a stub by default so the workspace builds on
//! native targets without requiring wasm toolchains; the page inventory in
//! [`ui_model`] stays host-testable either way.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod ui_model;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
