use glam::{Mat4, Vec3};

use crate::animate::Oscillation;

/// Drawable size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `None` for a degenerate viewport.
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Per-section camera placement, with optional slow sway.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f32,
    pub sway: Option<Oscillation>,
    pub look_sway: Option<Oscillation>,
}

impl CameraRig {
    pub fn looking_down_z(distance: f32, fov_deg: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            fov_deg,
            sway: None,
            look_sway: None,
        }
    }

    pub fn swaying(mut self, sway: Oscillation, look_sway: Oscillation) -> Self {
        self.sway = Some(sway);
        self.look_sway = Some(look_sway);
        self
    }

    /// Move `camera` to where this rig puts it at time `t`.
    pub fn pose(&self, camera: &mut Camera, t: f32) {
        camera.position = match &self.sway {
            Some(sway) => sway.offset(self.position, t),
            None => self.position,
        };
        camera.target = match &self.look_sway {
            Some(sway) => sway.offset(self.target, t),
            None => self.target,
        };
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::looking_down_z(10.0, 75.0)
    }
}

/// Perspective camera whose aspect follows the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(rig: &CameraRig, viewport: Viewport) -> Self {
        Self {
            position: rig.position,
            target: rig.target,
            fov_deg: rig.fov_deg,
            aspect: viewport.aspect().unwrap_or(1.0),
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Adopt the viewport's aspect. A zero-sized viewport keeps the old one.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if let Some(aspect) = viewport.aspect() {
            self.aspect = aspect;
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Pixels covered by one world unit at distance one, for a surface
    /// `height` pixels tall. Point sprites divide this by clip-space `w`.
    pub fn point_scale(&self, height: u32) -> f32 {
        height as f32 / (2.0 * (self.fov_deg.to_radians() / 2.0).tan())
    }
}
