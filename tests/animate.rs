use backdrop_wasm::animate::{animate, Drift, FrameTick, Motion};
use backdrop_wasm::camera::CameraRig;
use backdrop_wasm::scene::{DecorativeObject, SceneBuilder, ShapeKind, Transform};
use backdrop_wasm::scenes::{compose, ComposeOptions, Section};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn drift_velocity(motion: &Motion) -> Vec3 {
    match motion {
        Motion::Drift(drift) => drift.velocity,
        other => panic!("expected drift, got {other:?}"),
    }
}

fn transforms(scene: &backdrop_wasm::Scene) -> Vec<Transform> {
    scene.objects().iter().map(|o| o.current).collect()
}

#[test]
fn one_step_flips_only_objects_past_the_bound() {
    let bound = Vec3::new(10.0, f32::INFINITY, f32::INFINITY);
    let mut builder = SceneBuilder::new(Section::Background, CameraRig::default());
    for x in [-12.0, 0.0, 12.0] {
        builder.primary(
            DecorativeObject::new(ShapeKind::Sphere, Vec3::X * x)
                .motion(Drift::new(Vec3::X * 60.0, bound)),
        );
    }
    let mut scene = builder.build();

    animate(&mut scene, FrameTick { elapsed: DT, delta: DT });

    let signs: Vec<f32> = scene
        .objects()
        .iter()
        .map(|o| drift_velocity(&o.motion).x.signum())
        .collect();
    assert_eq!(signs, vec![-1.0, 1.0, -1.0]);
    for object in scene.objects() {
        assert!(object.current.position.x.abs() <= 10.0, "{:?}", object.current);
    }
}

#[test]
fn reflection_flips_once_per_crossing() {
    let mut drift = Drift::new(Vec3::X * 30.0, Vec3::splat(1.0));
    let mut transform = Transform::at(Vec3::X * 0.9);
    let mut flips = 0;
    for _ in 0..4 {
        if drift.step(&mut transform, DT).x {
            flips += 1;
        }
        assert!(transform.position.x.abs() <= 1.0);
    }
    assert_eq!(flips, 1);
    assert!(drift.velocity.x < 0.0);
}

#[test]
fn absolute_scenes_are_idempotent_per_timestamp() {
    for section in [Section::Hero, Section::About, Section::Projects, Section::Skills] {
        let mut rng = StdRng::seed_from_u64(11);
        let mut scene = compose(section, &ComposeOptions::default(), &mut rng);

        animate(&mut scene, FrameTick { elapsed: 4.25, delta: DT });
        let first = transforms(&scene);
        animate(&mut scene, FrameTick { elapsed: 4.25, delta: DT });
        assert_eq!(first, transforms(&scene), "{section}");

        // Jumping elsewhere and back lands on the same pose.
        animate(&mut scene, FrameTick { elapsed: 90.0, delta: DT });
        animate(&mut scene, FrameTick { elapsed: 4.25, delta: DT });
        assert_eq!(first, transforms(&scene), "{section}");
    }
}

#[test]
fn drift_is_deterministic_for_a_delta_sequence() {
    let run = || {
        let mut rng = StdRng::seed_from_u64(3);
        let mut scene = compose(Section::Background, &ComposeOptions::default(), &mut rng);
        let mut elapsed = 0.0;
        for delta in [DT, DT, 0.05, DT, 0.1, DT] {
            elapsed += delta;
            animate(&mut scene, FrameTick { elapsed, delta });
        }
        transforms(&scene)
    };
    assert_eq!(run(), run());
}

#[test]
fn background_stays_inside_its_bounds() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut scene = compose(Section::Background, &ComposeOptions::default(), &mut rng);
    let mut elapsed = 0.0;
    for _ in 0..600 {
        elapsed += 0.1;
        animate(&mut scene, FrameTick { elapsed, delta: 0.1 });
    }
    for object in scene.primary() {
        let Motion::Drift(drift) = &object.motion else {
            panic!("background primaries drift");
        };
        let p = object.current.position.abs();
        assert!(p.cmple(drift.bound).all(), "{p:?} outside {:?}", drift.bound);
    }
}

#[test]
fn only_the_background_integrates() {
    let mut rng = StdRng::seed_from_u64(5);
    for section in Section::ALL {
        let scene = compose(section, &ComposeOptions::default(), &mut rng);
        let integrating = scene.objects().iter().any(|o| !o.motion.is_absolute());
        assert_eq!(integrating, section == Section::Background, "{section}");
    }
}
