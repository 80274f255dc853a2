//! Scene graph for one decorative background.
//!
//! Objects live in a flat arena addressed by [`ObjectId`]. The composer
//! fills it once through [`SceneBuilder`]; afterwards only transforms
//! change. Primary objects occupy the front of the arena, fixtures follow.

use glam::{EulerRot, Quat, Vec3};

use crate::animate::{Motion, Oscillation};
use crate::camera::CameraRig;
use crate::color::Rgb;
use crate::scenes::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Torus,
    Box,
    Ring,
    Point,
    Disc,
    Tetrahedron,
    Octahedron,
    Icosahedron,
}

/// Mutable per-frame state of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler XYZ, radians.
    pub rotation: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Map a point from this transform's local space into its parent.
    pub fn apply(&self, local: Vec3) -> Vec3 {
        self.quat() * (local * self.scale) + self.position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct DecorativeObject {
    pub kind: ShapeKind,
    /// World-space radius before scaling.
    pub size: f32,
    pub color: Rgb,
    pub emissive: f32,
    pub base: Transform,
    pub current: Transform,
    pub motion: Motion,
    pub group: Option<GroupId>,
}

impl DecorativeObject {
    pub fn new(kind: ShapeKind, position: Vec3) -> Self {
        let base = Transform::at(position);
        Self {
            kind,
            size: 1.0,
            color: Rgb::WHITE,
            emissive: 0.0,
            base,
            current: base,
            motion: Motion::Still,
            group: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn emissive(mut self, intensity: f32) -> Self {
        self.emissive = intensity.clamp(0.0, 1.0);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.base.opacity = opacity.clamp(0.0, 1.0);
        self.current = self.base;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.base.scale = scale;
        self.current = self.base;
        self
    }

    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.base.rotation = rotation;
        self.current = self.base;
        self
    }

    pub fn motion(mut self, motion: impl Into<Motion>) -> Self {
        self.motion = motion.into();
        self
    }

    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

/// A pivot that moves several objects together.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub base: Transform,
    pub current: Transform,
    pub motion: Oscillation,
}

/// Straight edge between two objects, drawn as a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: ObjectId,
    pub to: ObjectId,
    pub color: Rgb,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point { range: f32 },
    Spot { angle: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Rgb,
    pub intensity: f32,
    pub base: Vec3,
    pub position: Vec3,
    pub orbit: Option<Oscillation>,
}

impl Light {
    pub fn ambient(color: Rgb, intensity: f32) -> Self {
        Self::placed(LightKind::Ambient, color, intensity, Vec3::ZERO)
    }

    pub fn directional(color: Rgb, intensity: f32, position: Vec3) -> Self {
        Self::placed(LightKind::Directional, color, intensity, position)
    }

    pub fn point(color: Rgb, intensity: f32, position: Vec3) -> Self {
        Self::placed(LightKind::Point { range: 0.0 }, color, intensity, position)
    }

    pub fn placed(kind: LightKind, color: Rgb, intensity: f32, position: Vec3) -> Self {
        Self {
            kind,
            color,
            intensity,
            base: position,
            position,
            orbit: None,
        }
    }

    pub fn orbiting(mut self, orbit: Oscillation) -> Self {
        self.orbit = Some(orbit);
        self
    }
}

/// Point cloud drawn behind everything else. Moves as one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub points: Vec<Vec3>,
    pub colors: Vec<Rgb>,
    pub point_size: f32,
    pub base: Transform,
    pub current: Transform,
    pub motion: Oscillation,
}

impl Starfield {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub(crate) section: Section,
    pub(crate) objects: Vec<DecorativeObject>,
    pub(crate) primary: usize,
    pub(crate) groups: Vec<Group>,
    pub(crate) links: Vec<Link>,
    pub(crate) lights: Vec<Light>,
    pub(crate) starfield: Option<Starfield>,
    pub(crate) camera: CameraRig,
    pub(crate) clear_color: Option<Rgb>,
}

impl Scene {
    pub fn section(&self) -> Section {
        self.section
    }

    /// Every object in arena order: primaries first, then fixtures.
    pub fn objects(&self) -> &[DecorativeObject] {
        &self.objects
    }

    pub fn primary(&self) -> &[DecorativeObject] {
        &self.objects[..self.primary]
    }

    pub fn fixtures(&self) -> &[DecorativeObject] {
        &self.objects[self.primary..]
    }

    pub fn object(&self, id: ObjectId) -> Option<&DecorativeObject> {
        self.objects.get(id.0)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn starfield(&self) -> Option<&Starfield> {
        self.starfield.as_ref()
    }

    pub fn camera_rig(&self) -> &CameraRig {
        &self.camera
    }

    /// `None` means a transparent surface.
    pub fn clear_color(&self) -> Option<Rgb> {
        self.clear_color
    }

    /// Current world-space position of an object, including its group.
    pub fn world_position(&self, object: &DecorativeObject) -> Vec3 {
        match object.group.and_then(|g| self.groups.get(g.0)) {
            Some(group) => group.current.apply(object.current.position),
            None => object.current.position,
        }
    }

    /// Current world-space scale of an object, including its group.
    pub fn world_scale(&self, object: &DecorativeObject) -> f32 {
        let group_scale = object
            .group
            .and_then(|g| self.groups.get(g.0))
            .map_or(1.0, |g| g.current.scale);
        object.current.scale * group_scale
    }

    /// Objects, groups, links, lights and stars: everything a surface may upload.
    pub fn primitive_count(&self) -> usize {
        self.objects.len()
            + self.links.len()
            + self.lights.len()
            + self.starfield.as_ref().map_or(0, Starfield::len)
    }
}

/// Fixture handle handed out while building. Turned into an [`ObjectId`]
/// once the primary count is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureId(usize);

pub struct SceneBuilder {
    section: Section,
    primary: Vec<DecorativeObject>,
    fixtures: Vec<DecorativeObject>,
    groups: Vec<Group>,
    links: Vec<(FixtureId, FixtureId, Rgb, f32)>,
    lights: Vec<Light>,
    starfield: Option<Starfield>,
    camera: CameraRig,
    clear_color: Option<Rgb>,
}

impl SceneBuilder {
    pub fn new(section: Section, camera: CameraRig) -> Self {
        Self {
            section,
            primary: Vec::new(),
            fixtures: Vec::new(),
            groups: Vec::new(),
            links: Vec::new(),
            lights: Vec::new(),
            starfield: None,
            camera,
            clear_color: None,
        }
    }

    pub fn primary(&mut self, object: DecorativeObject) -> &mut Self {
        self.primary.push(object);
        self
    }

    pub fn fixture(&mut self, object: DecorativeObject) -> FixtureId {
        self.fixtures.push(object);
        FixtureId(self.fixtures.len() - 1)
    }

    pub fn group(&mut self, origin: Vec3, motion: Oscillation) -> GroupId {
        let base = Transform::at(origin);
        self.groups.push(Group {
            base,
            current: base,
            motion,
        });
        GroupId(self.groups.len() - 1)
    }

    pub fn link(&mut self, from: FixtureId, to: FixtureId, color: Rgb, opacity: f32) -> &mut Self {
        self.links.push((from, to, color, opacity));
        self
    }

    pub fn light(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }

    pub fn starfield(&mut self, starfield: Starfield) -> &mut Self {
        self.starfield = Some(starfield);
        self
    }

    pub fn clear_color(&mut self, color: Rgb) -> &mut Self {
        self.clear_color = Some(color);
        self
    }

    pub fn build(self) -> Scene {
        let primary = self.primary.len();
        let links = self
            .links
            .into_iter()
            .map(|(from, to, color, opacity)| Link {
                from: ObjectId(primary + from.0),
                to: ObjectId(primary + to.0),
                color,
                opacity,
            })
            .collect();

        let mut objects = self.primary;
        objects.extend(self.fixtures);

        Scene {
            section: self.section,
            objects,
            primary,
            groups: self.groups,
            links,
            lights: self.lights,
            starfield: self.starfield,
            camera: self.camera,
            clear_color: self.clear_color,
        }
    }
}
