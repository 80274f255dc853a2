use std::cell::{Cell, RefCell};
use std::rc::Rc;

use backdrop_wasm::camera::{Camera, Viewport};
use backdrop_wasm::lifecycle::{LifecycleManager, LifecycleState, MountTarget, RenderSurface};
use backdrop_wasm::scene::Scene;
use backdrop_wasm::scenes::{ComposeOptions, Section};
use backdrop_wasm::{Result, SceneError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Counters {
    attached: Cell<usize>,
    released: Cell<usize>,
    live: Cell<usize>,
    draws: Cell<usize>,
    resizes: RefCell<Vec<Viewport>>,
}

struct MockTarget {
    counters: Rc<Counters>,
    refuse: bool,
}

impl MockTarget {
    fn new() -> (Self, Rc<Counters>) {
        let counters = Rc::new(Counters::default());
        let target = Self {
            counters: Rc::clone(&counters),
            refuse: false,
        };
        (target, counters)
    }
}

struct MockSurface {
    counters: Rc<Counters>,
    handles: usize,
}

impl MountTarget for MockTarget {
    type Surface = MockSurface;

    fn attach(&self, scene: &Scene, _viewport: Viewport) -> Result<MockSurface> {
        if self.refuse {
            return Err(SceneError::NoContext);
        }
        // One program plus a buffer per object.
        let handles = 1 + scene.objects().len();
        self.counters.attached.set(self.counters.attached.get() + 1);
        self.counters.live.set(self.counters.live.get() + handles);
        Ok(MockSurface {
            counters: Rc::clone(&self.counters),
            handles,
        })
    }
}

impl RenderSurface for MockSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.counters.resizes.borrow_mut().push(viewport);
    }

    fn draw(&mut self, _scene: &Scene, _camera: &Camera) {
        self.counters.draws.set(self.counters.draws.get() + 1);
    }

    fn live_resources(&self) -> usize {
        self.handles
    }

    fn release(&mut self) {
        self.counters.released.set(self.counters.released.get() + 1);
        self.counters.live.set(self.counters.live.get() - self.handles);
        self.handles = 0;
    }
}

fn manager(section: Section) -> LifecycleManager<MockSurface> {
    LifecycleManager::new(section, ComposeOptions::default())
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(17)
}

#[test]
fn unmount_releases_every_handle_once() {
    let (target, counters) = MockTarget::new();
    let mut scenes = manager(Section::About);

    let state = scenes.mount(Some(&target), Viewport::new(800, 600), &mut rng());
    assert_eq!(state, LifecycleState::Running);
    assert!(scenes.live_resources() > 0);

    scenes.unmount();
    scenes.unmount();

    assert_eq!(scenes.state(), LifecycleState::Unmounted);
    assert_eq!(scenes.live_resources(), 0);
    assert_eq!(counters.live.get(), 0);
    assert_eq!(counters.released.get(), 1);
    assert!(scenes.scene().is_none());
}

#[test]
fn late_frame_after_unmount_is_ignored() {
    let (target, counters) = MockTarget::new();
    let mut scenes = manager(Section::Hero);
    scenes.mount(Some(&target), Viewport::new(800, 600), &mut rng());

    let guard = scenes.guard().unwrap();
    assert!(scenes.frame(&guard, 0.0));
    assert!(scenes.frame(&guard, 16.0));
    assert_eq!(counters.draws.get(), 2);

    scenes.unmount();
    assert!(!guard.is_live());
    assert!(!scenes.frame(&guard, 32.0));
    assert_eq!(counters.draws.get(), 2);
    assert!(scenes.guard().is_none());
}

#[test]
fn remount_invalidates_earlier_guards() {
    let (target, counters) = MockTarget::new();
    let mut scenes = manager(Section::Projects);

    scenes.mount(Some(&target), Viewport::new(640, 480), &mut rng());
    let old = scenes.guard().unwrap();
    scenes.unmount();

    scenes.mount(Some(&target), Viewport::new(640, 480), &mut rng());
    let new = scenes.guard().unwrap();

    assert!(!scenes.frame(&old, 10.0));
    assert!(scenes.frame(&new, 10.0));
    assert_eq!(counters.attached.get(), 2);
    assert_eq!(counters.released.get(), 1);
}

#[test]
fn guard_from_another_manager_is_rejected() {
    let (target, _) = MockTarget::new();
    let mut first = manager(Section::Hero);
    let mut second = manager(Section::Hero);
    first.mount(Some(&target), Viewport::new(100, 100), &mut rng());
    second.mount(Some(&target), Viewport::new(100, 100), &mut rng());

    let foreign = first.guard().unwrap();
    assert!(!second.frame(&foreign, 0.0));
}

#[test]
fn missing_target_renders_nothing() {
    let mut scenes = manager(Section::Skills);
    let state = scenes.mount(None::<&MockTarget>, Viewport::new(800, 600), &mut rng());
    assert_eq!(state, LifecycleState::Unmounted);
    assert!(scenes.guard().is_none());
    assert!(!scenes.resize(Viewport::new(10, 10)));
    scenes.unmount();
}

#[test]
fn refused_attach_stays_unmounted() {
    let (mut target, counters) = MockTarget::new();
    target.refuse = true;
    let mut scenes = manager(Section::Footer);
    let state = scenes.mount(Some(&target), Viewport::new(800, 300), &mut rng());
    assert_eq!(state, LifecycleState::Unmounted);
    assert_eq!(counters.attached.get(), 0);

    target.refuse = false;
    let state = scenes.mount(Some(&target), Viewport::new(800, 300), &mut rng());
    assert_eq!(state, LifecycleState::Running);
}

#[test]
fn mounting_twice_keeps_the_first_surface() {
    let (target, counters) = MockTarget::new();
    let mut scenes = manager(Section::Education);
    scenes.mount(Some(&target), Viewport::new(800, 600), &mut rng());
    let state = scenes.mount(Some(&target), Viewport::new(800, 600), &mut rng());
    assert_eq!(state, LifecycleState::Running);
    assert_eq!(counters.attached.get(), 1);
}

#[test]
fn resize_updates_aspect_without_allocating() {
    let (target, counters) = MockTarget::new();
    let mut scenes = manager(Section::Background);
    scenes.mount(Some(&target), Viewport::new(1024, 768), &mut rng());
    let aspect = scenes.camera().unwrap().aspect;
    assert!((aspect - 1024.0 / 768.0).abs() < 1e-6);
    let live = counters.live.get();

    assert!(scenes.resize(Viewport::new(1920, 1080)));

    let aspect = scenes.camera().unwrap().aspect;
    assert!((aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(counters.attached.get(), 1);
    assert_eq!(counters.live.get(), live);
    assert_eq!(
        counters.resizes.borrow().last().copied(),
        Some(Viewport::new(1920, 1080))
    );
}

#[test]
fn frames_move_the_scene() {
    let (target, _) = MockTarget::new();
    let mut scenes = manager(Section::Hero);
    scenes.mount(Some(&target), Viewport::new(800, 600), &mut rng());
    let guard = scenes.guard().unwrap();

    scenes.frame(&guard, 1000.0);
    let before = scenes.scene().unwrap().clone();
    scenes.frame(&guard, 1050.0);
    assert_ne!(&before, scenes.scene().unwrap());
}

#[test]
fn dropping_the_manager_unmounts() {
    let (target, counters) = MockTarget::new();
    {
        let mut scenes = manager(Section::Experience);
        scenes.mount(Some(&target), Viewport::new(800, 600), &mut rng());
        assert!(counters.live.get() > 0);
    }
    assert_eq!(counters.released.get(), 1);
    assert_eq!(counters.live.get(), 0);
}
