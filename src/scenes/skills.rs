//! Data-flow particles around a neural node and a binary ring.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use rand::Rng;

use super::common::{pick, spread, starfield, Placement, StarStyle, FRAME_RATE};
use super::Section;
use crate::animate::{Oscillation, Pulse};
use crate::camera::CameraRig;
use crate::color::{matrix, Rgb};
use crate::scene::{DecorativeObject, Light, Scene, SceneBuilder, ShapeKind};

pub const DEFAULT_COUNT: usize = 80;
pub const DEFAULT_STARS: usize = 600;

const RING_NODES: usize = 12;
const RING_RADIUS: f32 = 2.5;

/// Particles sway around their start point. Amplitude is the per-frame
/// nudge of 0.01 integrated over a second of frames.
const FLOW_AMPLITUDE: f32 = 0.01 * FRAME_RATE;

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let mut scene = SceneBuilder::new(Section::Skills, CameraRig::looking_down_z(12.0, 50.0));

    let palette = [matrix::MINT, matrix::INDIGO, matrix::SEAFOAM, matrix::LICHEN];
    for i in 0..count {
        let seed = i as f32;
        let particle = DecorativeObject::new(ShapeKind::Point, spread(rng, Vec3::new(20.0, 20.0, 10.0)))
            .size(0.05)
            .color(pick(rng, &palette))
            .opacity(0.8)
            .motion(Oscillation::bob(
                Vec3::splat(FLOW_AMPLITUDE),
                Vec3::new(1.0, 1.0, 0.5),
                Vec3::new(seed - FRAC_PI_2, seed, seed - FRAC_PI_2),
            ));
        scene.primary(particle);
    }

    for (position, color) in [([-8.0, 3.0, -2.0], matrix::INDIGO), ([6.0, 5.0, -3.0], matrix::LICHEN)] {
        let [x, y, _] = position;
        scene.fixture(
            DecorativeObject::new(ShapeKind::Box, Vec3::from(position))
                .size(0.15)
                .color(color)
                .emissive(0.2)
                .motion(
                    Oscillation::spin(Vec3::new(0.01, 0.02, 0.0) * FRAME_RATE).with_bob(
                        Vec3::new(0.2, 0.3, 0.0),
                        Vec3::new(0.5, 0.8, 0.0),
                        Vec3::new(y + FRAC_PI_2, x, 0.0),
                    ),
                ),
        );
    }

    let node = scene.fixture(
        DecorativeObject::new(ShapeKind::Sphere, Vec3::new(-3.0, 2.0, 0.0))
            .size(0.15)
            .color(matrix::SEAFOAM)
            .emissive(0.5)
            .motion(Oscillation::default().with_pulse(Pulse::scale(0.1, 2.0))),
    );
    for end in [Vec3::new(1.0, -1.0, 0.0), Vec3::new(3.0, 1.0, 0.0)] {
        let tip = scene.fixture(
            DecorativeObject::new(ShapeKind::Point, end)
                .size(0.04)
                .color(matrix::SEAFOAM),
        );
        scene.link(node, tip, matrix::SEAFOAM, 0.5);
    }

    let ring = scene.group(
        Vec3::new(0.0, -3.0, -4.0),
        Oscillation::spin(Vec3::new(0.0, 0.005, 0.01) * FRAME_RATE),
    );
    for i in 0..RING_NODES {
        let angle = i as f32 / RING_NODES as f32 * TAU;
        scene.fixture(
            DecorativeObject::new(
                ShapeKind::Box,
                Vec3::new(angle.cos() * RING_RADIUS, angle.sin() * RING_RADIUS, 0.0),
            )
            .size(0.05)
            .color(matrix::MINT)
            .opacity(0.7)
            .emissive(0.1)
            .in_group(ring),
        );
    }

    scene
        .clear_color(Rgb::hex(0x0a0a0f))
        .light(Light::ambient(Rgb::WHITE, 0.3))
        .light(Light::point(matrix::MINT, 1.0, Vec3::new(10.0, 10.0, 10.0)))
        .light(Light::point(matrix::INDIGO, 0.8, Vec3::new(-10.0, 5.0, 5.0)))
        .light(Light::point(matrix::SEAFOAM, 0.6, Vec3::new(0.0, -10.0, 8.0)));

    scene.starfield(starfield(
        rng,
        stars,
        Placement::Shell { inner: 120.0, outer: 180.0 },
        |_: &mut R| Rgb::WHITE,
        StarStyle {
            point_size: 0.7,
            opacity: 0.8,
            motion: Oscillation::spin(Vec3::Y * 0.01),
        },
    ));

    scene.build()
}
