//! Neon geometry and a small neural-net constellation.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rand::Rng;

use super::common::{between, cycle_layout, pick, spread, starfield, Placement, StarStyle, Template};
use super::Section;
use crate::animate::Oscillation;
use crate::camera::CameraRig;
use crate::color::{neon, Rgb};
use crate::scene::{DecorativeObject, Light, LightKind, Scene, SceneBuilder, ShapeKind};

pub const DEFAULT_COUNT: usize = 8;
pub const DEFAULT_STARS: usize = 4000;

const CODE_PARTICLES: usize = 30;

const NODES: [[f32; 3]; 8] = [
    [-8.0, 6.0, -5.0],
    [8.0, 6.0, -5.0],
    [0.0, 8.0, -8.0],
    [-6.0, -6.0, -6.0],
    [6.0, -6.0, -6.0],
    [0.0, -8.0, -8.0],
    [-10.0, 0.0, -7.0],
    [10.0, 0.0, -7.0],
];

const EDGES: [(usize, usize); 11] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (3, 4),
    (3, 5),
    (4, 5),
    (0, 6),
    (1, 7),
    (2, 6),
    (2, 7),
    (6, 7),
];

fn sphere(position: [f32; 3], color: Rgb, speed: f32, size: f32) -> Template {
    Template::new(ShapeKind::Sphere, Vec3::from(position), color)
        .size(size)
        .emissive(0.2)
        .motion(
            Oscillation::spin(Vec3::new(0.3, 0.5, 0.0) * speed).with_bob(
                Vec3::Y * 0.5,
                Vec3::Y * speed,
                Vec3::ZERO,
            ),
        )
}

fn torus(position: [f32; 3], color: Rgb, speed: f32) -> Template {
    Template::new(ShapeKind::Torus, Vec3::from(position), color)
        .emissive(0.2)
        .opacity(0.7)
        .motion(
            Oscillation::spin(Vec3::new(0.4, 0.0, 0.6) * speed).with_bob(
                Vec3::X,
                Vec3::X * 0.5 * speed,
                Vec3::X * FRAC_PI_2,
            ),
        )
}

fn icosahedron(position: [f32; 3], color: Rgb, speed: f32) -> Template {
    Template::new(ShapeKind::Icosahedron, Vec3::from(position), color)
        .emissive(0.3)
        .motion(
            Oscillation::spin(Vec3::new(0.0, 0.7, 0.3) * speed).with_bob(
                Vec3::Z * 0.3,
                Vec3::Z * 0.8 * speed,
                Vec3::ZERO,
            ),
        )
}

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let mut scene = SceneBuilder::new(Section::About, CameraRig::looking_down_z(15.0, 75.0));

    let layout = [
        sphere([-7.0, 5.0, -6.0], neon::CYAN, 0.8, 0.8),
        sphere([7.0, -5.0, -8.0], neon::SKY, 1.2, 1.0),
        sphere([0.0, 7.0, -10.0], neon::COBALT, 0.6, 0.6),
        torus([6.0, 3.0, -5.0], neon::TEAL, 0.9),
        torus([-6.0, -3.0, -7.0], neon::VIOLET, 1.1),
        icosahedron([8.0, -2.0, -6.0], Rgb::hex(0x00ccff), 0.7),
        icosahedron([-8.0, 2.0, -9.0], Rgb::hex(0x3399ff), 1.0),
        icosahedron([0.0, -6.0, -5.0], Rgb::hex(0x6666ff), 0.8),
    ];
    cycle_layout(&mut scene, &layout, count, None, Vec3::new(16.0, 12.0, 4.0), rng);

    let drifting = scene.group(Vec3::ZERO, Oscillation::spin(Vec3::Y * 0.03));
    let code_colors = [neon::CYAN, neon::SKY, neon::COBALT, neon::VIOLET];
    for _ in 0..CODE_PARTICLES {
        let position = spread(rng, Vec3::splat(25.0));
        let particle = DecorativeObject::new(ShapeKind::Box, position)
            .size(between(rng, 0.02, 0.05))
            .color(pick(rng, &code_colors))
            .emissive(0.4)
            .opacity(0.7)
            .in_group(drifting);
        scene.fixture(particle);
    }

    let network = scene.group(Vec3::ZERO, Oscillation::spin(Vec3::Y * 0.02));
    let nodes: Vec<_> = NODES
        .iter()
        .map(|&p| {
            scene.fixture(
                DecorativeObject::new(ShapeKind::Sphere, Vec3::from(p))
                    .size(0.1)
                    .color(neon::CYAN)
                    .emissive(0.5)
                    .in_group(network),
            )
        })
        .collect();
    for &(a, b) in &EDGES {
        scene.link(nodes[a], nodes[b], neon::SKY, 0.4);
    }

    scene
        .light(Light::ambient(neon::TEAL, 0.3))
        .light(Light::point(neon::CYAN, 0.8, Vec3::new(10.0, 10.0, 10.0)))
        .light(Light::point(neon::COBALT, 0.6, Vec3::new(-10.0, -10.0, -10.0)))
        .light(Light::point(neon::VIOLET, 0.5, Vec3::new(0.0, 0.0, 20.0)))
        .light(Light::placed(
            LightKind::Spot { angle: 0.3 },
            neon::CYAN,
            0.7,
            Vec3::new(0.0, 15.0, 10.0),
        ));

    let tints = [Rgb::WHITE, neon::TEAL, neon::CYAN];
    scene.starfield(starfield(
        rng,
        stars,
        Placement::Shell { inner: 120.0, outer: 180.0 },
        |rng: &mut R| pick(rng, &tints),
        StarStyle {
            point_size: 0.6,
            opacity: 0.9,
            motion: Oscillation::spin(Vec3::Y * 0.01),
        },
    ));

    scene.build()
}
