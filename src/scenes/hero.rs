use glam::Vec3;
use rand::Rng;

use super::common::{cycle_layout, starfield, Placement, StarStyle, Template};
use super::Section;
use crate::animate::{Oscillation, Pulse};
use crate::camera::CameraRig;
use crate::color::Rgb;
use crate::scene::{Light, Scene, SceneBuilder, ShapeKind};

pub const DEFAULT_COUNT: usize = 3;
pub const DEFAULT_STARS: usize = 1500;

const BONE: Rgb = Rgb::hex(0xe4e1d0);
const SLATE: Rgb = Rgb::hex(0x495050);
const DEEP_BLUE: Rgb = Rgb::hex(0x203850);

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let mut scene = SceneBuilder::new(Section::Hero, CameraRig::looking_down_z(30.0, 75.0));

    let layout = [
        Template::new(ShapeKind::Sphere, Vec3::new(10.0, 5.0, -10.0), BONE)
            .size(3.0)
            .opacity(0.4),
        Template::new(ShapeKind::Torus, Vec3::new(-8.0, -3.0, -5.0), SLATE)
            .size(2.0)
            .opacity(0.5),
        Template::new(ShapeKind::Octahedron, Vec3::new(0.0, -8.0, -15.0), DEEP_BLUE)
            .size(4.0)
            .opacity(0.3),
    ];
    let floating = scene.group(Vec3::ZERO, Oscillation::spin(Vec3::new(0.2, 0.1, 0.0)));
    cycle_layout(&mut scene, &layout, count, Some(floating), Vec3::splat(20.0), rng);

    scene
        .light(Light::ambient(Rgb::WHITE, 0.6))
        .light(Light::point(SLATE, 0.8, Vec3::new(10.0, 10.0, 10.0)))
        .light(Light::point(BONE, 0.6, Vec3::new(-10.0, -10.0, -10.0)))
        .light(Light::point(DEEP_BLUE, 0.4, Vec3::new(0.0, 0.0, 20.0)));

    // Particle shell that breathes slowly while tumbling.
    scene.starfield(starfield(
        rng,
        stars,
        Placement::Shell { inner: 5.0, outer: 30.0 },
        |_: &mut R| SLATE,
        StarStyle {
            point_size: 0.8,
            opacity: 0.8,
            motion: Oscillation::spin(Vec3::new(0.1, 0.15, 0.0)).with_pulse(Pulse::scale(0.1, 0.5)),
        },
    ));

    scene.build()
}
