//! Mount / run / unmount bookkeeping for one decorative scene.
//!
//! The manager is generic over where it draws. The browser binding plugs in
//! a WebGL canvas; tests plug in counting mocks.

use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;

use crate::animate::animate;
use crate::camera::{Camera, Viewport};
use crate::clock::FrameClock;
use crate::error::Result;
use crate::scene::Scene;
use crate::scenes::{compose, ComposeOptions, Section};

/// Something a scene can be drawn onto once attached.
pub trait RenderSurface {
    /// Reconfigure for a new size. Must not allocate new graphics resources.
    fn resize(&mut self, viewport: Viewport);

    fn draw(&mut self, scene: &Scene, camera: &Camera);

    /// Graphics handles currently held by this surface.
    fn live_resources(&self) -> usize;

    /// Free every handle and detach from the page. Called exactly once.
    fn release(&mut self);
}

/// A place on the page that can host a surface.
pub trait MountTarget {
    type Surface: RenderSurface;

    fn attach(&self, scene: &Scene, viewport: Viewport) -> Result<Self::Surface>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Unmounted,
    Mounting,
    Running,
    Unmounting,
}

/// Ticket for one scheduled frame. It goes stale as soon as the manager
/// that issued it unmounts, so a callback that fires late does nothing.
#[derive(Debug, Clone)]
pub struct FrameGuard {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl FrameGuard {
    pub fn is_live(&self) -> bool {
        self.generation == self.current.get()
    }
}

struct Running<S> {
    scene: Scene,
    surface: S,
    camera: Camera,
    clock: FrameClock,
}

pub struct LifecycleManager<S: RenderSurface> {
    section: Section,
    options: ComposeOptions,
    state: LifecycleState,
    generation: Rc<Cell<u64>>,
    running: Option<Running<S>>,
}

impl<S: RenderSurface> LifecycleManager<S> {
    pub fn new(section: Section, options: ComposeOptions) -> Self {
        Self {
            section,
            options,
            state: LifecycleState::Unmounted,
            generation: Rc::new(Cell::new(0)),
            running: None,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Compose the scene and attach it to `target`.
    ///
    /// With no target, or a target that refuses to attach, the manager stays
    /// unmounted and renders nothing.
    pub fn mount<M, R>(&mut self, target: Option<&M>, viewport: Viewport, rng: &mut R) -> LifecycleState
    where
        M: MountTarget<Surface = S>,
        R: Rng + ?Sized,
    {
        if self.state != LifecycleState::Unmounted {
            log::debug!("{} scene already mounted", self.section);
            return self.state;
        }
        let Some(target) = target else {
            log::warn!("{} scene has no mount target; skipping", self.section);
            return self.state;
        };

        self.state = LifecycleState::Mounting;
        let scene = compose(self.section, &self.options, rng);

        match target.attach(&scene, viewport) {
            Ok(mut surface) => {
                surface.resize(viewport);
                let camera = Camera::new(scene.camera_rig(), viewport);
                self.running = Some(Running {
                    scene,
                    surface,
                    camera,
                    clock: FrameClock::new(),
                });
                self.state = LifecycleState::Running;
                log::debug!(
                    "{} scene running at {}x{}",
                    self.section,
                    viewport.width,
                    viewport.height
                );
            }
            Err(err) => {
                log::warn!("{} scene not rendered: {err}", self.section);
                self.state = LifecycleState::Unmounted;
            }
        }
        self.state
    }

    /// Guard for the next frame callback, if the scene is running.
    pub fn guard(&self) -> Option<FrameGuard> {
        (self.state == LifecycleState::Running).then(|| FrameGuard {
            generation: self.generation.get(),
            current: Rc::clone(&self.generation),
        })
    }

    /// Advance, animate and draw one frame. Returns `false` without touching
    /// anything when `guard` is stale or the scene is not running.
    pub fn frame(&mut self, guard: &FrameGuard, timestamp_ms: f64) -> bool {
        if !guard.is_live() || !Rc::ptr_eq(&guard.current, &self.generation) {
            return false;
        }
        let Some(run) = self.running.as_mut() else {
            return false;
        };

        let tick = run.clock.tick(timestamp_ms);
        animate(&mut run.scene, tick);
        run.scene.camera_rig().pose(&mut run.camera, tick.elapsed);
        run.surface.draw(&run.scene, &run.camera);
        true
    }

    /// Follow a window resize. Only the camera aspect and surface size change.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        match self.running.as_mut() {
            Some(run) => {
                run.camera.set_viewport(viewport);
                run.surface.resize(viewport);
                true
            }
            None => false,
        }
    }

    /// Stop the loop and release everything attached in `mount`. Idempotent.
    pub fn unmount(&mut self) {
        let Some(mut run) = self.running.take() else {
            return;
        };
        self.state = LifecycleState::Unmounting;
        self.generation.set(self.generation.get().wrapping_add(1));
        run.surface.release();
        drop(run);
        self.state = LifecycleState::Unmounted;
        log::debug!("{} scene unmounted", self.section);
    }

    pub fn live_resources(&self) -> usize {
        self.running
            .as_ref()
            .map_or(0, |run| run.surface.live_resources())
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.running.as_ref().map(|run| &run.scene)
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.running.as_ref().map(|run| &run.camera)
    }
}

impl<S: RenderSurface> Drop for LifecycleManager<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
