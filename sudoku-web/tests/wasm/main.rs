#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use yew::Renderer;

use sudoku_web::app::{App, AppProps, RouterHandle};
use sudoku_web::dom;
use sudoku_web::history::HistoryMode;
use sudoku_web::router::RouteTable;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(old) = dom::app_root() {
        old.remove();
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id(dom::APP_ROOT_ID);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn set_location(url: &str) {
    dom::window()
        .expect("window")
        .history()
        .expect("history")
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
        .expect("set location");
}

async fn mount(handle: RouterHandle) -> web_sys::Element {
    let root = fresh_root();
    let props = AppProps {
        router: Rc::new(handle),
    };
    Renderer::<App>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(50)).await;
    root
}

fn count(root: &web_sys::Element, selector: &str) -> u32 {
    root.query_selector_all(selector)
        .expect("query selector")
        .length()
}

#[wasm_bindgen_test]
fn dom_helpers_find_window_and_document() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
    assert!(dom::pathname().is_some());
}

#[wasm_bindgen_test]
async fn root_location_mounts_sudoku_board() {
    set_location("/");
    let root = mount(RouterHandle::standard()).await;

    let main = root
        .query_selector("#main")
        .expect("query main")
        .expect("main landmark exists");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(count(&root, "[data-testid='sudoku-cell']"), 81);
}

#[wasm_bindgen_test]
async fn hash_history_mounts_board_at_fragment_root() {
    set_location("/#/");
    let handle = RouterHandle::new(RouteTable::standard(), HistoryMode::Hash, None);
    let root = mount(handle).await;

    assert_eq!(count(&root, "[data-testid='sudoku-page']"), 1);
    assert_eq!(count(&root, "[data-testid='sudoku-cell']"), 81);
}

#[wasm_bindgen_test]
async fn browser_history_under_base_mounts_board() {
    set_location("/sudoku/");
    let handle = RouterHandle::new(
        RouteTable::standard(),
        HistoryMode::Browser,
        Some(String::from("/sudoku")),
    );
    let root = mount(handle).await;

    assert_eq!(count(&root, "[data-testid='sudoku-page']"), 1);
    assert_eq!(count(&root, "[data-testid='not-found']"), 0);
}

#[wasm_bindgen_test]
async fn browser_history_outside_base_shows_not_found() {
    set_location("/");
    let handle = RouterHandle::new(
        RouteTable::standard(),
        HistoryMode::Browser,
        Some(String::from("/sudoku")),
    );
    let root = mount(handle).await;

    assert_eq!(count(&root, "[data-testid='sudoku-page']"), 0);
    assert_eq!(count(&root, "[data-testid='not-found']"), 1);
}
