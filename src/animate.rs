//! Per-frame transform rules.
//!
//! Two styles exist. [`Oscillation`] is a pure function of `(base, t)`:
//! sampling it twice at the same time gives the same transform, and frames
//! may be skipped or replayed freely. [`Drift`] integrates velocity over
//! frame deltas and reflects off an axis-aligned bound; it is deterministic
//! for a fixed delta sequence but replaying a frame moves the object again.
//! Only the page background's planets, rings, orbs and discs drift.

use glam::{BVec3, Vec3};

use crate::scene::{Scene, Transform};

/// Timing handed to the animator once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Seconds since the scene started running.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

/// Sine pulse of scale and opacity around the base values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pulse {
    pub frequency: f32,
    pub phase: f32,
    pub scale_amplitude: f32,
    pub opacity_amplitude: f32,
}

impl Pulse {
    pub fn scale(amplitude: f32, frequency: f32) -> Self {
        Self {
            frequency,
            scale_amplitude: amplitude,
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, amplitude: f32) -> Self {
        self.opacity_amplitude = amplitude;
        self
    }

    pub fn apply(&self, base: &Transform, out: &mut Transform, t: f32) {
        let wave = (self.frequency * t + self.phase).sin();
        out.scale = base.scale * (1.0 + self.scale_amplitude * wave);
        out.opacity = (base.opacity + self.opacity_amplitude * wave).clamp(0.0, 1.0);
    }
}

/// Absolute-time motion: constant spin plus per-axis sine bob.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oscillation {
    /// Radians per second around each axis.
    pub spin: Vec3,
    pub amplitude: Vec3,
    /// Radians per second.
    pub frequency: Vec3,
    pub phase: Vec3,
    pub pulse: Option<Pulse>,
}

impl Oscillation {
    pub fn spin(rate: Vec3) -> Self {
        Self {
            spin: rate,
            ..Self::default()
        }
    }

    pub fn bob(amplitude: Vec3, frequency: Vec3, phase: Vec3) -> Self {
        Self::default().with_bob(amplitude, frequency, phase)
    }

    pub fn with_bob(mut self, amplitude: Vec3, frequency: Vec3, phase: Vec3) -> Self {
        self.amplitude = amplitude;
        self.frequency = frequency;
        self.phase = phase;
        self
    }

    pub fn with_pulse(mut self, pulse: Pulse) -> Self {
        self.pulse = Some(pulse);
        self
    }

    pub fn sample(&self, base: &Transform, t: f32) -> Transform {
        let wave = Vec3::new(
            (self.frequency.x * t + self.phase.x).sin(),
            (self.frequency.y * t + self.phase.y).sin(),
            (self.frequency.z * t + self.phase.z).sin(),
        );
        let mut out = Transform {
            position: base.position + self.amplitude * wave,
            rotation: base.rotation + self.spin * t,
            ..*base
        };
        if let Some(pulse) = &self.pulse {
            pulse.apply(base, &mut out, t);
        }
        out
    }

    /// Position-only variant for lights and camera rigs.
    pub fn offset(&self, base: Vec3, t: f32) -> Vec3 {
        self.sample(&Transform::at(base), t).position
    }
}

/// Integrating random walk inside `[-bound, bound]` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Units per second.
    pub velocity: Vec3,
    /// Radians per second.
    pub angular_velocity: Vec3,
    /// Half-extent per axis; `f32::INFINITY` leaves an axis unbounded.
    pub bound: Vec3,
    pub pulse: Option<Pulse>,
}

impl Drift {
    pub fn new(velocity: Vec3, bound: Vec3) -> Self {
        Self {
            velocity,
            angular_velocity: Vec3::ZERO,
            bound: bound.abs(),
            pulse: None,
        }
    }

    pub fn with_spin(mut self, angular_velocity: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn with_pulse(mut self, pulse: Pulse) -> Self {
        self.pulse = Some(pulse);
        self
    }

    /// Advance `transform` by `dt` seconds. Returns the axes whose velocity
    /// flipped this step.
    ///
    /// An axis that ends up outside its bound has its velocity negated and
    /// the overshoot mirrored back inside, so the object is within the bound
    /// again when this returns.
    pub fn step(&mut self, transform: &mut Transform, dt: f32) -> BVec3 {
        transform.position += self.velocity * dt;
        transform.rotation += self.angular_velocity * dt;

        let mut flipped = [false; 3];
        for axis in 0..3 {
            let bound = self.bound[axis];
            let p = transform.position[axis];
            if p.abs() > bound {
                self.velocity[axis] = -self.velocity[axis];
                let edge = bound.copysign(p);
                transform.position[axis] = (2.0 * edge - p).clamp(-bound, bound);
                flipped[axis] = true;
            }
        }
        BVec3::from(flipped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    #[default]
    Still,
    Absolute(Oscillation),
    Drift(Drift),
}

impl Motion {
    pub fn is_absolute(&self) -> bool {
        !matches!(self, Motion::Drift(_))
    }
}

impl From<Oscillation> for Motion {
    fn from(osc: Oscillation) -> Self {
        Motion::Absolute(osc)
    }
}

impl From<Drift> for Motion {
    fn from(drift: Drift) -> Self {
        Motion::Drift(drift)
    }
}

/// Apply every motion rule in `scene` for this frame, in place.
pub fn animate(scene: &mut Scene, tick: FrameTick) {
    let t = tick.elapsed;

    for object in &mut scene.objects {
        match &mut object.motion {
            Motion::Still => {}
            Motion::Absolute(osc) => object.current = osc.sample(&object.base, t),
            Motion::Drift(drift) => {
                drift.step(&mut object.current, tick.delta);
                if let Some(pulse) = drift.pulse {
                    pulse.apply(&object.base, &mut object.current, t);
                }
            }
        }
    }

    for group in &mut scene.groups {
        group.current = group.motion.sample(&group.base, t);
    }

    for light in &mut scene.lights {
        if let Some(orbit) = &light.orbit {
            light.position = orbit.offset(light.base, t);
        }
    }

    if let Some(stars) = &mut scene.starfield {
        stars.current = stars.motion.sample(&stars.base, t);
    }
}
