use glam::Vec3;
use rand::Rng;

use super::common::{pick, spread, starfield, Placement, StarStyle};
use super::Section;
use crate::animate::Oscillation;
use crate::camera::CameraRig;
use crate::color::Rgb;
use crate::scene::{DecorativeObject, FixtureId, Light, Scene, SceneBuilder, ShapeKind};

pub const DEFAULT_COUNT: usize = 25;
pub const DEFAULT_STARS: usize = 3500;

const ORANGE: Rgb = Rgb::hex(0xff9500);
const BLUE: Rgb = Rgb::hex(0x3b82f6);
const PURPLE: Rgb = Rgb::hex(0x8b5cf6);

/// (nodes, x, color) per network layer.
const LAYERS: [(usize, f32, u32); 3] = [(4, -2.0, 0x8b5cf6), (6, 0.0, 0xa855f7), (4, 2.0, 0xc084fc)];

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let mut scene = SceneBuilder::new(Section::Experience, CameraRig::looking_down_z(18.0, 75.0));

    let symbols = scene.group(Vec3::ZERO, Oscillation::spin(Vec3::new(0.05, 0.03, 0.0)));
    let kinds = [ShapeKind::Box, ShapeKind::Tetrahedron, ShapeKind::Octahedron];
    for _ in 0..count {
        let kind = pick(rng, &kinds);
        let size = if kind == ShapeKind::Box { 0.05 } else { 0.1 };
        scene.primary(
            DecorativeObject::new(kind, spread(rng, Vec3::new(30.0, 20.0, 30.0)))
                .size(size)
                .color(pick(rng, &[ORANGE, BLUE, PURPLE]))
                .emissive(0.3)
                .opacity(0.6)
                .in_group(symbols),
        );
    }

    timeline(&mut scene);
    cloud(&mut scene);
    network(&mut scene);
    blocks(&mut scene);

    scene
        .light(Light::ambient(Rgb::WHITE, 0.4))
        .light(Light::point(ORANGE, 0.8, Vec3::new(10.0, 10.0, 10.0)))
        .light(Light::point(BLUE, 0.6, Vec3::new(-10.0, -10.0, -10.0)))
        .light(Light::point(PURPLE, 0.5, Vec3::new(0.0, 0.0, 15.0)))
        .light(Light::directional(Rgb::WHITE, 0.3, Vec3::new(20.0, 20.0, 20.0)));

    scene.starfield(starfield(
        rng,
        stars,
        Placement::Shell { inner: 100.0, outer: 150.0 },
        |_: &mut R| Rgb::WHITE,
        StarStyle {
            point_size: 0.6,
            opacity: 0.8,
            motion: Oscillation::spin(Vec3::Y * 0.02),
        },
    ));

    scene.build()
}

fn timeline(scene: &mut SceneBuilder) {
    let milestones: Vec<FixtureId> = [
        (Vec3::new(-8.0, -4.0, -8.0), ORANGE),
        (Vec3::new(-2.0, 0.0, -6.0), BLUE),
        (Vec3::new(4.0, 4.0, -4.0), PURPLE),
    ]
    .into_iter()
    .map(|(position, color)| {
        scene.fixture(
            DecorativeObject::new(ShapeKind::Sphere, position)
                .size(0.3)
                .color(color)
                .emissive(0.5),
        )
    })
    .collect();

    for pair in milestones.windows(2) {
        scene.link(pair[0], pair[1], Rgb::hex(0x6b7280), 0.6);
    }
}

fn cloud(scene: &mut SceneBuilder) {
    let group = scene.group(
        Vec3::new(-10.0, 6.0, -10.0),
        Oscillation::spin(Vec3::Y * 0.1).with_bob(Vec3::Y * 0.3, Vec3::Y * 0.5, Vec3::ZERO),
    );
    let puffs = [
        ([0.0, 0.0, 0.0], 1.2),
        ([1.5, 0.5, 0.0], 0.8),
        ([-1.5, 0.3, 0.0], 0.9),
        ([0.5, -0.8, 0.0], 0.7),
        ([-0.8, -0.5, 0.0], 0.6),
    ];
    for (position, scale) in puffs {
        scene.fixture(
            DecorativeObject::new(ShapeKind::Sphere, Vec3::from(position))
                .size(0.8)
                .scale(scale)
                .color(Rgb::hex(0x60a5fa))
                .opacity(0.6)
                .in_group(group),
        );
    }
}

fn network(scene: &mut SceneBuilder) {
    let group = scene.group(
        Vec3::new(10.0, -3.0, -8.0),
        Oscillation::spin(Vec3::new(0.15, 0.0, 0.08)),
    );
    let layers: Vec<Vec<FixtureId>> = LAYERS
        .iter()
        .map(|&(nodes, x, color)| {
            (0..nodes)
                .map(|i| {
                    let y = (i as f32 - nodes as f32 / 2.0) * 1.5;
                    scene.fixture(
                        DecorativeObject::new(ShapeKind::Sphere, Vec3::new(x, y, 0.0))
                            .size(0.15)
                            .color(Rgb::hex(color))
                            .emissive(0.4)
                            .in_group(group),
                    )
                })
                .collect()
        })
        .collect();

    for pair in layers.windows(2) {
        for &from in &pair[0] {
            for &to in &pair[1] {
                scene.link(from, to, Rgb::hex(0x9333ea), 0.4);
            }
        }
    }
}

fn blocks(scene: &mut SceneBuilder) {
    let group = scene.group(Vec3::new(0.0, -2.0, -12.0), Oscillation::spin(Vec3::Y * 0.2));
    for (y, size, color) in [(0.0, 0.5, 0x3b82f6), (1.2, 0.4, 0x1d4ed8), (2.2, 0.3, 0x1e40af)] {
        scene.fixture(
            DecorativeObject::new(ShapeKind::Box, Vec3::Y * y)
                .size(size)
                .color(Rgb::hex(color))
                .emissive(0.2)
                .opacity(0.7)
                .in_group(group),
        );
    }
}
