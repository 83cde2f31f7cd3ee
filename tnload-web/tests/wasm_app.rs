#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use yew::Renderer;

use tnload_web::app::App;
use tnload_web::dom;
use tnload_web::theme::{self, Theme};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        let _ = root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
}

#[wasm_bindgen_test]
fn persisted_theme_is_read_back() {
    theme::persist(Theme::Dark);
    assert_eq!(theme::saved_theme(), Theme::Dark);
    let root = dom::root_element().expect("html element");
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    theme::persist(Theme::Light);
    assert_eq!(theme::saved_theme(), Theme::Light);
}

#[wasm_bindgen_test]
async fn fallback_copy_reports_an_outcome() {
    // Headless browsers may deny clipboard access; either path must resolve.
    let outcome = tnload_web::clipboard::copy_text("75983.88").await;
    if let Err(err) = outcome {
        assert!(!err.is_empty());
    }
}
