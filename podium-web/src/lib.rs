#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod app;
pub mod components;
pub mod format;
pub mod pages;
pub mod paths;
pub mod routes;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Re-apply the saved theme before the first paint.
    crate::theme::set_theme(crate::theme::saved_theme());
    yew::Renderer::<app::App>::new().render();
}
