#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod dom;
pub mod nav;
pub mod pages;
pub mod paths;
pub mod router;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    crate::theme::apply(crate::theme::saved_theme());
    // Deep links with a fragment still open at the top of the page.
    if crate::dom::location_has_hash() {
        crate::dom::scroll_to_top();
    }
    yew::Renderer::<app::App>::new().render();
}
