//! QuoinStone property management customization for the dashboard shell.
//!
//! The three members a host imports are [`customization::quoinstone_config`],
//! [`customization::default_registry`] and [`customization::custom_data`].

pub mod components;
pub mod config;
pub mod customization;
pub mod domain;
pub mod pages;
pub mod router;
mod state;

#[cfg(test)]
mod test_support;

pub use customization::{custom_data, customization, default_registry, quoinstone_config};

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger already initialized: {err}").into());
    }
    log::info!("Starting QuoinStone dashboard (wasm)");
    router::mount_app();
}
