use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rand::Rng;

use super::common::{cycle_layout, starfield, Placement, StarStyle, Template, FRAME_RATE};
use super::Section;
use crate::animate::Oscillation;
use crate::camera::CameraRig;
use crate::color::Rgb;
use crate::scene::{Light, Scene, SceneBuilder, ShapeKind};

pub const DEFAULT_COUNT: usize = 9;
pub const DEFAULT_STARS: usize = 800;

/// Box that tumbles and bobs vertically, out of phase with its neighbours.
fn cube(position: [f32; 3], scale: f32, color: u32) -> Template {
    let [x, ..] = position;
    Template::new(ShapeKind::Box, Vec3::from(position), Rgb::hex(color))
        .size(0.5)
        .scale(scale)
        .emissive(0.1)
        .motion(
            Oscillation::spin(Vec3::new(0.01, 0.02, 0.0) * FRAME_RATE).with_bob(
                Vec3::Y * 0.5,
                Vec3::Y,
                Vec3::Y * x,
            ),
        )
}

fn tetrahedron(position: [f32; 3], scale: f32, color: u32) -> Template {
    let [x, ..] = position;
    Template::new(ShapeKind::Tetrahedron, Vec3::from(position), Rgb::hex(color))
        .scale(scale)
        .emissive(0.1)
        .motion(
            Oscillation::spin(Vec3::new(0.015, 0.0, 0.01) * FRAME_RATE).with_bob(
                Vec3::Y * 0.3,
                Vec3::Y,
                Vec3::Y * (x + FRAC_PI_2),
            ),
        )
}

fn octahedron(position: [f32; 3], scale: f32, color: u32) -> Template {
    Template::new(ShapeKind::Octahedron, Vec3::from(position), Rgb::hex(color))
        .scale(scale)
        .emissive(0.1)
        .motion(
            Oscillation::spin(Vec3::new(0.0, 0.02, 0.005) * FRAME_RATE).with_bob(
                Vec3::X * 0.4,
                Vec3::X * 0.8,
                Vec3::ZERO,
            ),
        )
}

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let mut scene = SceneBuilder::new(Section::Projects, CameraRig::looking_down_z(8.0, 60.0));

    let layout = [
        cube([-8.0, 2.0, -2.0], 0.8, 0x4f46e5),
        cube([8.0, -3.0, -1.0], 1.2, 0x7c3aed),
        cube([0.0, 5.0, -3.0], 0.6, 0x06b6d4),
        tetrahedron([-5.0, -2.0, 0.0], 1.0, 0x059669),
        tetrahedron([6.0, 4.0, -2.0], 0.8, 0x10b981),
        tetrahedron([-2.0, -5.0, -1.0], 1.1, 0x34d399),
        octahedron([3.0, 1.0, 1.0], 0.9, 0xdc2626),
        octahedron([-6.0, 3.0, 0.0], 0.7, 0xf59e0b),
        octahedron([4.0, -4.0, -2.0], 1.0, 0xec4899),
    ];
    cycle_layout(&mut scene, &layout, count, None, Vec3::new(14.0, 10.0, 4.0), rng);

    scene
        .clear_color(Rgb::hex(0x0f172a))
        .light(Light::ambient(Rgb::WHITE, 0.4))
        .light(Light::point(Rgb::hex(0x4f46e5), 0.8, Vec3::new(10.0, 10.0, 10.0)))
        .light(Light::point(Rgb::hex(0x059669), 0.6, Vec3::new(-10.0, -10.0, 5.0)));

    scene.starfield(starfield(
        rng,
        stars,
        Placement::Shell { inner: 100.0, outer: 150.0 },
        |_: &mut R| Rgb::WHITE,
        StarStyle {
            point_size: 0.5,
            opacity: 0.8,
            motion: Oscillation::spin(Vec3::Y * 0.02),
        },
    ));

    scene.build()
}
