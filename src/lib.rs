#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod preview;
pub mod site;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // logging is best effort, a second init just keeps the first logger
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
