use glam::Vec3;
use rand::Rng;

use super::common::{cycle_layout, pick, spread, starfield, Placement, StarStyle, Template};
use super::Section;
use crate::animate::Oscillation;
use crate::camera::CameraRig;
use crate::color::{stone, Rgb};
use crate::scene::{DecorativeObject, Light, Scene, SceneBuilder, ShapeKind};

pub const DEFAULT_COUNT: usize = 6;
pub const DEFAULT_STARS: usize = 5000;

const DUST: usize = 50;

fn spinning(kind: ShapeKind, position: [f32; 3], color: Rgb, rate: Vec3) -> Template {
    let size = if kind == ShapeKind::Box { 0.5 } else { 1.0 };
    Template::new(kind, Vec3::from(position), color)
        .size(size)
        .emissive(0.1)
        .motion(Oscillation::spin(rate))
}

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let mut scene = SceneBuilder::new(Section::Education, CameraRig::looking_down_z(12.0, 75.0));

    let cube = |p, c, speed: f32| spinning(ShapeKind::Box, p, c, Vec3::new(0.5, 0.3, 0.2) * speed);
    let tetra = |p, c, speed: f32| spinning(ShapeKind::Tetrahedron, p, c, Vec3::new(0.4, 0.6, 0.0) * speed);
    let octa = |p, c, speed: f32| spinning(ShapeKind::Octahedron, p, c, Vec3::new(0.7, 0.0, 0.4) * speed);

    let layout = [
        cube([-8.0, 4.0, -5.0], stone::SAGE, 0.8),
        cube([8.0, -4.0, -8.0], stone::GUNMETAL, 1.2),
        tetra([6.0, 6.0, -6.0], stone::PEWTER, 1.0),
        tetra([-6.0, -6.0, -4.0], stone::SAGE, 0.9),
        octa([0.0, 8.0, -10.0], stone::CREAM, 0.7),
        octa([10.0, -2.0, -7.0], stone::GUNMETAL, 1.1),
    ];
    cycle_layout(&mut scene, &layout, count, None, Vec3::new(16.0, 12.0, 6.0), rng);

    let dust = scene.group(Vec3::ZERO, Oscillation::spin(Vec3::Y * 0.05));
    for _ in 0..DUST {
        scene.fixture(
            DecorativeObject::new(ShapeKind::Sphere, spread(rng, Vec3::splat(20.0)))
                .size(0.02)
                .color(stone::SAGE)
                .emissive(0.3)
                .in_group(dust),
        );
    }

    scene
        .light(Light::ambient(stone::PEWTER, 0.4))
        .light(Light::point(stone::SAGE, 0.8, Vec3::new(10.0, 10.0, 10.0)))
        .light(Light::point(stone::GUNMETAL, 0.6, Vec3::new(-10.0, -10.0, -10.0)))
        .light(Light::point(stone::CREAM, 0.5, Vec3::new(0.0, 0.0, 15.0)));

    let tints = [stone::CREAM, stone::PEWTER];
    scene.starfield(starfield(
        rng,
        stars,
        Placement::Shell { inner: 100.0, outer: 150.0 },
        |rng: &mut R| pick(rng, &tints),
        StarStyle {
            point_size: 0.5,
            opacity: 0.8,
            motion: Oscillation::spin(Vec3::Y * 0.015),
        },
    ));

    scene.build()
}
