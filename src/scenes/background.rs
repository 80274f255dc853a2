//! Full-page backdrop: a drifting solar system in stone tones.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use rand::Rng;

use super::common::{between, signed, spread, starfield, velocity, Placement, StarStyle, FRAME_RATE};
use super::Section;
use crate::animate::{Drift, Oscillation, Pulse};
use crate::camera::CameraRig;
use crate::color::{stone, weighted, Rgb};
use crate::scene::{DecorativeObject, Light, LightKind, Scene, SceneBuilder, ShapeKind};

const PLANETS: usize = 8;
const RINGS: usize = 12;
const ORBS: usize = 15;
const DISCS: usize = 20;

pub const DEFAULT_COUNT: usize = PLANETS + RINGS + ORBS + DISCS;
pub const DEFAULT_STARS: usize = 2000;

/// The backdrop's slow motions were tuned against a clock advancing 0.01
/// per frame.
const TIME_SCALE: f32 = 0.01 * FRAME_RATE;

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let camera = CameraRig::looking_down_z(50.0, 75.0).swaying(
        Oscillation::bob(
            Vec3::new(5.0, 3.0, 5.0),
            Vec3::new(0.02, 0.015, 0.01) * TIME_SCALE,
            Vec3::new(0.0, FRAC_PI_2, 0.0),
        ),
        Oscillation::bob(
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(0.01, 0.008, 0.0) * TIME_SCALE,
            Vec3::new(0.0, FRAC_PI_2, 0.0),
        ),
    );
    let mut scene = SceneBuilder::new(Section::Background, camera);
    scene.clear_color(stone::DARK_GUNMETAL);

    for i in 0..count {
        let slot = i % DEFAULT_COUNT;
        let object = if slot < PLANETS {
            planet(rng)
        } else if slot < PLANETS + RINGS {
            ring(slot - PLANETS, rng)
        } else if slot < PLANETS + RINGS + ORBS {
            orb(slot - PLANETS - RINGS, rng)
        } else {
            disc(rng)
        };
        scene.primary(object);
    }

    nebulae(&mut scene);

    scene
        .light(Light::ambient(stone::CREAM, 0.3))
        .light(Light::directional(stone::PEWTER, 0.8, Vec3::new(50.0, 50.0, 50.0)))
        .light(
            Light::placed(
                LightKind::Point { range: 100.0 },
                stone::SAGE,
                0.5,
                Vec3::new(0.0, 20.0, 30.0),
            )
            .orbiting(Oscillation::bob(
                Vec3::new(30.0, 20.0, 25.0),
                Vec3::new(0.03, 0.02, 0.025) * TIME_SCALE,
                Vec3::new(0.0, FRAC_PI_2, 0.0),
            )),
        );

    let palette = [stone::CREAM, stone::PEWTER, stone::SAGE, stone::GUNMETAL];
    scene.starfield(starfield(
        rng,
        stars,
        Placement::Cube(Vec3::splat(200.0)),
        |rng: &mut R| weighted(&palette, &[0.3, 0.6, 0.8], rng.gen()),
        StarStyle {
            point_size: 0.5,
            opacity: 0.8,
            motion: Oscillation::spin(Vec3::new(0.0003, 0.0005, 0.0) * FRAME_RATE).with_bob(
                Vec3::new(2.0, 0.0, 1.0),
                Vec3::new(0.1, 0.0, 0.1) * TIME_SCALE,
                Vec3::new(0.0, 0.0, FRAC_PI_2),
            ),
        },
    ));

    scene.build()
}

fn planet<R: Rng + ?Sized>(rng: &mut R) -> DecorativeObject {
    let color = weighted(
        &[stone::SAGE, stone::PEWTER, stone::GUNMETAL, stone::CREAM],
        &[0.25, 0.5, 0.75],
        rng.gen(),
    );
    let position = spread(rng, Vec3::new(200.0, 100.0, 200.0)) - Vec3::Z * 50.0;
    DecorativeObject::new(ShapeKind::Sphere, position)
        .size(between(rng, 2.0, 6.0))
        .color(color)
        .opacity(between(rng, 0.6, 0.4))
        .motion(
            Drift::new(velocity(rng, 0.02), Vec3::new(200.0, 100.0, 200.0))
                .with_spin(velocity(rng, 0.02)),
        )
}

fn ring<R: Rng + ?Sized>(index: usize, rng: &mut R) -> DecorativeObject {
    let inner = between(rng, 5.0, 15.0);
    let outer = inner + between(rng, 2.0, 5.0);
    let color = if index % 2 == 0 { stone::PEWTER } else { stone::SAGE };
    let position = spread(rng, Vec3::new(300.0, 150.0, 300.0)) - Vec3::Z * 100.0;
    let rotation = Vec3::new(rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU, 0.0);
    DecorativeObject::new(ShapeKind::Ring, position)
        .size(outer)
        .color(color)
        .opacity(between(rng, 0.2, 0.3))
        .rotation(rotation)
        .motion(
            Drift::new(velocity(rng, 0.03), Vec3::new(300.0, 150.0, 300.0))
                .with_spin(velocity(rng, 0.03)),
        )
}

fn orb<R: Rng + ?Sized>(index: usize, rng: &mut R) -> DecorativeObject {
    let color = [stone::CREAM, stone::PEWTER, stone::SAGE][index % 3];
    let position = spread(rng, Vec3::new(400.0, 200.0, 400.0)) - Vec3::Z * 50.0;
    let pulse = Pulse::scale(0.2, between(rng, 0.02, 0.05) * TIME_SCALE).with_opacity(0.3);
    DecorativeObject::new(ShapeKind::Sphere, position)
        .size(between(rng, 1.0, 3.0))
        .color(color)
        .emissive(0.6)
        .opacity(between(rng, 0.3, 0.5))
        .motion(Drift::new(velocity(rng, 0.04), Vec3::new(400.0, 200.0, 400.0)).with_pulse(pulse))
}

fn disc<R: Rng + ?Sized>(rng: &mut R) -> DecorativeObject {
    let position = spread(rng, Vec3::new(500.0, 250.0, 500.0)) - Vec3::Z * 20.0;
    DecorativeObject::new(ShapeKind::Disc, position)
        .size(between(rng, 0.5, 2.0))
        .color(stone::GUNMETAL)
        .opacity(between(rng, 0.2, 0.4))
        .motion(
            Drift::new(velocity(rng, 0.05), Vec3::new(500.0, 250.0, 500.0))
                .with_spin(Vec3::Z * signed(rng, 0.05) * FRAME_RATE),
        )
}

fn nebulae(scene: &mut SceneBuilder) {
    let cloud = |position: Vec3, color: Rgb, opacity: f32, motion: Oscillation| {
        DecorativeObject::new(ShapeKind::Sphere, position)
            .size(30.0)
            .scale(1.5)
            .color(color)
            .opacity(opacity)
            .motion(motion)
    };

    scene.fixture(cloud(
        Vec3::new(-40.0, 20.0, -120.0),
        stone::SAGE,
        0.1,
        Oscillation::spin(Vec3::new(0.001, 0.002, 0.0) * FRAME_RATE).with_bob(
            Vec3::new(20.0, 10.0, 0.0),
            Vec3::new(0.05, 0.03, 0.0) * TIME_SCALE,
            Vec3::new(0.0, FRAC_PI_2, 0.0),
        ),
    ));
    scene.fixture(cloud(
        Vec3::new(50.0, -30.0, -140.0),
        stone::PEWTER,
        0.08,
        Oscillation::spin(Vec3::new(0.0, -0.0015, 0.0008) * FRAME_RATE).with_bob(
            Vec3::new(15.0, 8.0, 0.0),
            Vec3::new(0.04, 0.06, 0.0) * TIME_SCALE,
            Vec3::new(FRAC_PI_2, 0.0, 0.0),
        ),
    ));
}
