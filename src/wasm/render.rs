use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

use super::surface::{WebGlSurface, WebGlTarget};
use crate::camera::Viewport;
use crate::config::SceneConfig;
use crate::lifecycle::LifecycleManager;

/// Holds the animation-frame closure so it can reschedule itself. Storing it
/// inside an `Option` lets the closure be created first and then reach
/// itself through the shared cell.
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

thread_local! {
    static MOUNTED: RefCell<Vec<SceneHandle>> = const { RefCell::new(Vec::new()) };
}

struct Mounted {
    manager: LifecycleManager<WebGlSurface>,
    element: Option<HtmlElement>,
    height: Option<u32>,
    pending: Option<i32>,
}

/// One decorative scene bound to a page element.
///
/// Dropping the handle (or calling `free()` from JS) unmounts the scene.
#[wasm_bindgen]
pub struct SceneHandle {
    state: Rc<RefCell<Mounted>>,
    frame: FrameCallback,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl SceneHandle {
    /// Mount into `element`. `config` overrides the element's `data-scene`
    /// attribute. A missing element yields an inert handle.
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<HtmlElement>, config: Option<String>) -> Result<SceneHandle, JsValue> {
        let attr = config
            .or_else(|| element.as_ref().and_then(|e| e.get_attribute("data-scene")))
            .unwrap_or_default();
        let config = SceneConfig::parse(&attr)?;
        Ok(Self::mount(element, &config))
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.state.borrow().manager.guard().is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn section(&self) -> String {
        self.state.borrow().manager.section().name().to_owned()
    }

    /// Re-read the element size. Called automatically on window resize.
    pub fn resize(&self) -> bool {
        let mut mounted = self.state.borrow_mut();
        let Some(element) = mounted.element.clone() else {
            return false;
        };
        let viewport = viewport_for(&element, mounted.height);
        mounted.manager.resize(viewport)
    }

    /// Cancel the pending frame, drop the resize listener and free the
    /// canvas. Safe to call more than once.
    pub fn unmount(&mut self) {
        let window = window();
        {
            let mut mounted = self.state.borrow_mut();
            if let (Some(id), Some(window)) = (mounted.pending.take(), window.as_ref()) {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log::warn!("cancel_animation_frame failed: {err:?}");
                }
            }
            mounted.manager.unmount();
        }

        if let Some(on_resize) = self.on_resize.take() {
            if let Some(window) = window.as_ref() {
                if let Err(err) = window
                    .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                {
                    log::warn!("resize listener not removed: {err:?}");
                }
            }
        }
        // Breaks the closure -> state reference cycle.
        self.frame.borrow_mut().take();
    }
}

impl SceneHandle {
    pub fn mount(element: Option<HtmlElement>, config: &SceneConfig) -> SceneHandle {
        let height = config.height();
        if let (Some(element), Some(height)) = (element.as_ref(), height) {
            if let Err(err) = element.style().set_property("height", &format!("{height}px")) {
                log::warn!("could not pin {} height: {err:?}", config.section);
            }
        }

        let viewport = element
            .as_ref()
            .map_or(Viewport::new(0, 0), |element| viewport_for(element, height));
        let target = element.clone().map(|element| WebGlTarget { element });

        let mut manager = LifecycleManager::new(config.section, config.compose_options());
        manager.mount(target.as_ref(), viewport, &mut config.rng());

        let mut handle = SceneHandle {
            state: Rc::new(RefCell::new(Mounted {
                manager,
                element,
                height,
                pending: None,
            })),
            frame: Rc::new(RefCell::new(None)),
            on_resize: None,
        };
        handle.start();
        handle
    }

    fn start(&mut self) {
        let Some(guard) = self.state.borrow().manager.guard() else {
            return;
        };

        let state = Rc::clone(&self.state);
        let next = Rc::clone(&self.frame);
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let mut mounted = state.borrow_mut();
            mounted.pending = None;
            if mounted.manager.frame(&guard, timestamp) {
                mounted.pending = schedule(&next);
            }
        }) as Box<dyn FnMut(f64)>));
        let pending = schedule(&self.frame);
        self.state.borrow_mut().pending = pending;

        let state = Rc::clone(&self.state);
        let on_resize = Closure::wrap(Box::new(move || {
            let mut mounted = state.borrow_mut();
            if let Some(element) = mounted.element.clone() {
                let viewport = viewport_for(&element, mounted.height);
                mounted.manager.resize(viewport);
            }
        }) as Box<dyn FnMut()>);

        let Some(window) = window() else {
            return;
        };
        match window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
            Ok(()) => self.on_resize = Some(on_resize),
            Err(err) => log::warn!("resize listener not installed: {err:?}"),
        }
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn schedule(frame: &FrameCallback) -> Option<i32> {
    let window = window()?;
    let frame = frame.borrow();
    let callback = frame.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|err| log::warn!("request_animation_frame failed: {err:?}"))
        .ok()
}

/// Element size, falling back to the window for elements not laid out yet.
fn viewport_for(element: &HtmlElement, fixed_height: Option<u32>) -> Viewport {
    let (window_width, window_height) = window().map_or((0.0, 0.0), |w| {
        let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (size(w.inner_width()), size(w.inner_height()))
    });
    let width = match element.client_width() {
        w if w > 0 => w as u32,
        _ => window_width as u32,
    };
    let height = fixed_height.unwrap_or(match element.client_height() {
        h if h > 0 => h as u32,
        _ => window_height as u32,
    });
    Viewport::new(width, height)
}

/// Mount a scene into every `[data-scene]` element on the page. Elements with
/// an unreadable attribute, or where WebGL is unavailable, are skipped.
pub fn mount_all() -> Result<usize, JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let nodes = document.query_selector_all("[data-scene]")?;

    let mut handles = Vec::new();
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let attr = element.get_attribute("data-scene").unwrap_or_default();
        match SceneConfig::parse(&attr) {
            Ok(config) => {
                let handle = SceneHandle::mount(Some(element), &config);
                if handle.running() {
                    handles.push(handle);
                }
            }
            Err(err) => log::warn!("ignoring data-scene=\"{attr}\": {err}"),
        }
    }

    let count = handles.len();
    MOUNTED.with(|mounted| mounted.borrow_mut().extend(handles));
    Ok(count)
}

/// Tear down every scene started by `mount_all`.
#[wasm_bindgen(js_name = unmountAll)]
pub fn unmount_all() {
    let handles = MOUNTED.with(|mounted| std::mem::take(&mut *mounted.borrow_mut()));
    drop(handles);
}
