#![cfg(target_arch = "wasm32")]

use backdrop_wasm::{
    compose, mount_all, unmount_all, ComposeOptions, RenderSurface, SceneHandle, Section,
    WebGlSurface,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement, WebGl2RenderingContext};

wasm_bindgen_test_configure!(run_in_browser);

fn host(attr: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    element.set_attribute("data-scene", attr).unwrap();
    element.style().set_property("width", "320px").unwrap();
    element.style().set_property("height", "240px").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn mount_adds_and_unmount_removes_canvas() {
    let element = host(r#"{"section":"hero","seed":1}"#);
    let mut handle = SceneHandle::new(Some(element.clone()), None).unwrap();
    assert!(handle.running());
    assert_eq!(handle.section(), "hero");

    let canvas = element.query_selector("canvas").unwrap().expect("canvas attached");
    let rect = canvas.get_bounding_client_rect();
    assert!(rect.width() > 0.0 && rect.height() > 0.0);

    handle.unmount();
    assert!(!handle.running());
    assert!(element.query_selector("canvas").unwrap().is_none());
    element.remove();
}

#[wasm_bindgen_test]
fn missing_element_gives_inert_handle() {
    let handle = SceneHandle::new(None, Some("skills".into())).unwrap();
    assert!(!handle.running());
    assert!(!handle.resize());
}

#[wasm_bindgen_test]
fn bad_config_is_an_error() {
    let element = host("not-a-section");
    assert!(SceneHandle::new(Some(element.clone()), None).is_err());
    assert!(element.query_selector("canvas").unwrap().is_none());
    element.remove();
}

#[wasm_bindgen_test]
fn footer_height_is_pinned() {
    let element = host("footer");
    let handle = SceneHandle::new(Some(element.clone()), None).unwrap();
    assert_eq!(element.client_height(), 300);
    drop(handle);
    assert!(element.query_selector("canvas").unwrap().is_none());
    element.remove();
}

fn canvases_under_hosts() -> u32 {
    let document = web_sys::window().unwrap().document().unwrap();
    document.query_selector_all("[data-scene] canvas").unwrap().length()
}

#[wasm_bindgen_test]
fn mount_all_covers_every_valid_host() {
    let hero = host("hero");
    let skills = host(r#"{"section":"skills","count":5,"seed":3}"#);
    let broken = host("not-a-section");

    assert_eq!(mount_all().unwrap(), 2);
    assert_eq!(canvases_under_hosts(), 2);
    assert!(broken.query_selector("canvas").unwrap().is_none());

    unmount_all();
    assert_eq!(canvases_under_hosts(), 0);

    for element in [hero, skills, broken] {
        element.remove();
    }
}

fn detached_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn surface_release_frees_every_handle() {
    let scene = compose(Section::About, &ComposeOptions::default(), &mut StdRng::seed_from_u64(1));
    let canvas = detached_canvas();
    let mut surface = WebGlSurface::from_canvas(canvas.clone(), &scene).unwrap();
    assert!(surface.live_resources() > 0);

    surface.release();
    assert_eq!(surface.live_resources(), 0);
    assert!(canvas.parent_node().is_none());
}

#[wasm_bindgen_test]
fn failed_setup_leaves_nothing_behind() {
    let canvas = detached_canvas();
    let gl: WebGl2RenderingContext = canvas.get_context("webgl2").unwrap().unwrap().dyn_into().unwrap();
    let Some(extension) = gl.get_extension("WEBGL_lose_context").unwrap() else {
        canvas.remove();
        return;
    };
    let lose: js_sys::Function = js_sys::Reflect::get(&extension, &"loseContext".into())
        .unwrap()
        .dyn_into()
        .unwrap();
    lose.call0(&extension).unwrap();

    let scene = compose(Section::Hero, &ComposeOptions::default(), &mut StdRng::seed_from_u64(1));
    assert!(WebGlSurface::from_canvas(canvas.clone(), &scene).is_err());
    assert!(canvas.parent_node().is_none());
}
