pub mod app;
pub mod layout;
pub mod shared;
pub mod usecases;

use shared::dom_contract::{self, StartupError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Element the app mounts into; `<body>` is used when the host page has none.
const MOUNT_ID: &str = "app";

fn mount_root() -> Result<HtmlElement, StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;

    match document.get_element_by_id(MOUNT_ID) {
        Some(el) => el
            .dyn_into::<HtmlElement>()
            .map_err(|_| StartupError::MissingElement(MOUNT_ID)),
        None => document.body().ok_or(StartupError::MissingElement("body")),
    }
}

pub fn hydrate() -> Result<(), StartupError> {
    let root = mount_root()?;
    leptos::mount::mount_to(root, app::App).forget();

    dom_contract::verify_mounted()?;
    log::info!("Prompt enhancer started");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    hydrate().map_err(|e| {
        log::error!("Startup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}
