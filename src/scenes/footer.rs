use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::common::{between, spread, starfield, Placement, StarStyle, FRAME_RATE};
use super::Section;
use crate::animate::{Oscillation, Pulse};
use crate::camera::CameraRig;
use crate::color::Rgb;
use crate::scene::{DecorativeObject, Scene, SceneBuilder, ShapeKind};

/// The footer is a plain starfield; primaries are opt-in twinkles.
pub const DEFAULT_COUNT: usize = 0;
pub const DEFAULT_STARS: usize = 1000;

pub const HEIGHT: u32 = 300;

pub fn compose<R: Rng + ?Sized>(count: usize, stars: usize, rng: &mut R) -> Scene {
    let mut scene = SceneBuilder::new(Section::Footer, CameraRig::looking_down_z(5.0, 75.0));
    scene.clear_color(Rgb::hex(0x000000));

    for _ in 0..count {
        let pulse = Pulse {
            frequency: between(rng, 1.0, 2.0),
            phase: rng.gen::<f32>() * TAU,
            scale_amplitude: 0.3,
            opacity_amplitude: 0.5,
        };
        scene.primary(
            DecorativeObject::new(ShapeKind::Point, spread(rng, Vec3::splat(200.0)))
                .size(0.4)
                .opacity(0.5)
                .motion(Oscillation::default().with_pulse(pulse)),
        );
    }

    scene.starfield(starfield(
        rng,
        stars,
        Placement::Cube(Vec3::splat(100.0)),
        |_: &mut R| Rgb::WHITE,
        StarStyle {
            point_size: 0.2,
            opacity: 1.0,
            motion: Oscillation::spin(Vec3::new(0.0005, 0.0005, 0.0) * FRAME_RATE),
        },
    ));

    scene.build()
}
