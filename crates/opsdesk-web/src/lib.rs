/// OpsDesk Web Admin Interface
///
/// Leptos-based dashboard shell: role-aware sidebar navigation and the
/// logout control, built for WebAssembly with optional server rendering.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod types;

pub use error::{Result, WebError};

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("OpsDesk admin hydrating");
    leptos::mount_to_body(App);
}
