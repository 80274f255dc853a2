#![cfg_attr(target_arch = "wasm32", allow(dead_code))]
//! Decorative animated 3-D backdrops for the sections of a portfolio page.
//!
//! Everything except the `wasm` module is platform independent, so scene
//! composition, animation and the mount lifecycle are tested on the host.

pub mod animate;
pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod scene;
pub mod scenes;

pub use animate::{animate, Drift, FrameTick, Motion, Oscillation, Pulse};
pub use camera::{Camera, CameraRig, Viewport};
pub use clock::{FrameClock, MAX_FRAME_DELTA};
pub use config::SceneConfig;
pub use error::{Result, SceneError};
pub use lifecycle::{FrameGuard, LifecycleManager, LifecycleState, MountTarget, RenderSurface};
pub use scene::{DecorativeObject, ObjectId, Scene, ShapeKind, Transform};
pub use scenes::{compose, ComposeOptions, Section};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod render;
    mod surface;

    pub use render::{mount_all, unmount_all, SceneHandle};
    pub use surface::{WebGlSurface, WebGlTarget};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A page that loads the module twice keeps its first logger.
        let _ = console_log::init_with_level(log::Level::Info);

        let mounted = render::mount_all()?;
        log::info!("mounted {mounted} decorative scene(s)");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount_all, unmount_all, SceneHandle, WebGlSurface, WebGlTarget};
