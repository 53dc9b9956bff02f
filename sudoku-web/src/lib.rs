#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod history;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let props = app::AppProps {
        router: std::rc::Rc::new(app::init_router()),
    };
    if let Some(root) = dom::app_root() {
        yew::Renderer::<app::App>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<app::App>::with_props(props).render();
    }
}
