use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::animate::Oscillation;
use crate::color::Rgb;
use crate::scene::{DecorativeObject, GroupId, SceneBuilder, ShapeKind, Starfield, Transform};

/// Per-frame motion constants were tuned against this frame rate.
pub const FRAME_RATE: f32 = 60.0;

/// Uniform in `-span/2 .. span/2`.
pub fn signed<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

pub fn spread<R: Rng + ?Sized>(rng: &mut R, extent: Vec3) -> Vec3 {
    Vec3::new(
        signed(rng, extent.x),
        signed(rng, extent.y),
        signed(rng, extent.z),
    )
}

/// Uniform in `min .. min + span`.
pub fn between<R: Rng + ?Sized>(rng: &mut R, min: f32, span: f32) -> f32 {
    rng.gen::<f32>() * span + min
}

pub fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Random per-second velocity from a per-frame span.
pub fn velocity<R: Rng + ?Sized>(rng: &mut R, span_per_frame: f32) -> Vec3 {
    spread(rng, Vec3::splat(span_per_frame)) * FRAME_RATE
}

#[derive(Debug, Clone, Copy)]
pub enum Placement {
    Cube(Vec3),
    Shell { inner: f32, outer: f32 },
}

impl Placement {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match *self {
            Placement::Cube(half) => spread(rng, half * 2.0),
            Placement::Shell { inner, outer } => {
                let radius = between(rng, inner, outer - inner);
                let theta = rng.gen::<f32>() * TAU;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
                Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            }
        }
    }
}

pub struct StarStyle {
    pub point_size: f32,
    pub opacity: f32,
    pub motion: Oscillation,
}

pub fn starfield<R, F>(
    rng: &mut R,
    count: usize,
    placement: Placement,
    mut color: F,
    style: StarStyle,
) -> Starfield
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Rgb,
{
    let mut points = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(placement.sample(rng));
        colors.push(color(rng));
    }
    let base = Transform {
        opacity: style.opacity,
        ..Transform::default()
    };
    Starfield {
        points,
        colors,
        point_size: style.point_size,
        base,
        current: base,
        motion: style.motion,
    }
}

/// One hand-placed shape in a section layout.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub kind: ShapeKind,
    pub position: Vec3,
    pub size: f32,
    pub scale: f32,
    pub color: Rgb,
    pub opacity: f32,
    pub emissive: f32,
    pub motion: Oscillation,
}

impl Template {
    pub fn new(kind: ShapeKind, position: Vec3, color: Rgb) -> Self {
        Self {
            kind,
            position,
            size: 1.0,
            scale: 1.0,
            color,
            opacity: 0.8,
            emissive: 0.0,
            motion: Oscillation::default(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn motion(mut self, motion: Oscillation) -> Self {
        self.motion = motion;
        self
    }

    pub fn object(&self, offset: Vec3) -> DecorativeObject {
        DecorativeObject::new(self.kind, self.position + offset)
            .size(self.size)
            .scale(self.scale)
            .color(self.color)
            .opacity(self.opacity)
            .emissive(self.emissive)
            .motion(self.motion)
    }
}

/// Emit `count` primaries by cycling `layout`. The first pass is placed as
/// drawn; later passes are displaced by a random offset within `jitter`.
pub fn cycle_layout<R: Rng + ?Sized>(
    scene: &mut SceneBuilder,
    layout: &[Template],
    count: usize,
    group: Option<GroupId>,
    jitter: Vec3,
    rng: &mut R,
) {
    if layout.is_empty() {
        return;
    }
    for i in 0..count {
        let offset = if i < layout.len() {
            Vec3::ZERO
        } else {
            spread(rng, jitter)
        };
        let mut object = layout[i % layout.len()].object(offset);
        if let Some(group) = group {
            object = object.in_group(group);
        }
        scene.primary(object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shell_points_stay_in_shell() {
        let mut rng = StdRng::seed_from_u64(3);
        let shell = Placement::Shell { inner: 5.0, outer: 30.0 };
        for _ in 0..500 {
            let r = shell.sample(&mut rng).length();
            assert!((4.999..=30.001).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn cube_points_stay_in_cube() {
        let mut rng = StdRng::seed_from_u64(4);
        let cube = Placement::Cube(Vec3::new(200.0, 100.0, 50.0));
        for _ in 0..500 {
            let p = cube.sample(&mut rng);
            assert!(p.x.abs() <= 200.0 && p.y.abs() <= 100.0 && p.z.abs() <= 50.0);
        }
    }
}
