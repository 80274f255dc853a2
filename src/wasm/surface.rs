use glam::Vec3;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, HtmlElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::camera::{Camera, Viewport};
use crate::error::{Result, SceneError};
use crate::lifecycle::{MountTarget, RenderSurface};
use crate::scene::{LightKind, Scene, ShapeKind};

/// position(3) + rgba(4) + size(1) + sprite(1)
const STRIDE: usize = 9;
const MAX_PIXEL_RATIO: f64 = 2.0;

const SPRITE_DISC: f32 = 0.0;
const SPRITE_RING: f32 = 1.0;
const SPRITE_SQUARE: f32 = 2.0;
const SPRITE_SOLID: f32 = 3.0;

const VERTEX_SHADER: &str = r#"#version 300 es
uniform mat4 u_view_proj;
uniform float u_point_scale;
in vec3 a_position;
in vec4 a_color;
in float a_size;
in float a_sprite;
out vec4 v_color;
flat out float v_sprite;
void main() {
    gl_Position = u_view_proj * vec4(a_position, 1.0);
    gl_PointSize = max(2.0 * a_size * u_point_scale / max(gl_Position.w, 0.001), 1.0);
    v_color = a_color;
    v_sprite = a_sprite;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform bool u_lines;
in vec4 v_color;
flat in float v_sprite;
out vec4 out_color;
void main() {
    float alpha = v_color.a;
    if (!u_lines && v_sprite < 2.5) {
        vec2 p = gl_PointCoord * 2.0 - 1.0;
        float r = length(p);
        if (v_sprite < 0.5) {
            alpha *= 1.0 - smoothstep(0.7, 1.0, r);
        } else if (v_sprite < 1.5) {
            alpha *= smoothstep(0.55, 0.7, r) * (1.0 - smoothstep(0.85, 1.0, r));
        } else if (max(abs(p.x), abs(p.y)) > 0.9) {
            alpha = 0.0;
        }
    }
    if (alpha <= 0.0) discard;
    out_color = vec4(v_color.rgb, alpha);
}
"#;

fn sprite(kind: ShapeKind) -> f32 {
    match kind {
        ShapeKind::Ring | ShapeKind::Torus => SPRITE_RING,
        ShapeKind::Box | ShapeKind::Tetrahedron | ShapeKind::Octahedron => SPRITE_SQUARE,
        ShapeKind::Sphere | ShapeKind::Disc | ShapeKind::Icosahedron | ShapeKind::Point => {
            SPRITE_DISC
        }
    }
}

fn js_err(context: &str, err: wasm_bindgen::JsValue) -> SceneError {
    SceneError::Graphics(format!("{context}: {err:?}"))
}

/// Mount element that hosts a full-bleed canvas.
pub struct WebGlTarget {
    pub element: HtmlElement,
}

impl MountTarget for WebGlTarget {
    type Surface = WebGlSurface;

    fn attach(&self, scene: &Scene, _viewport: Viewport) -> Result<WebGlSurface> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| SceneError::Graphics("mount element is detached".into()))?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| js_err("create canvas", e))?
            .dyn_into()
            .map_err(|_| SceneError::Graphics("canvas element has the wrong type".into()))?;

        let style = canvas.style();
        for (key, value) in [
            ("position", "absolute"),
            ("inset", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
        ] {
            style.set_property(key, value).map_err(|e| js_err("canvas style", e))?;
        }

        self.element
            .append_child(&canvas)
            .map_err(|e| js_err("attach canvas", e))?;

        WebGlSurface::from_canvas(canvas.clone(), scene).inspect_err(|_| canvas.remove())
    }
}

pub struct WebGlSurface {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: Option<WebGlProgram>,
    vao: Option<WebGlVertexArrayObject>,
    buffer: Option<WebGlBuffer>,
    u_view_proj: Option<WebGlUniformLocation>,
    u_point_scale: Option<WebGlUniformLocation>,
    u_lines: Option<WebGlUniformLocation>,
    vertices: Vec<f32>,
    height_px: u32,
    attached: bool,
}

impl WebGlSurface {
    /// Build a surface on `canvas`. Handles created before a failing step
    /// are deleted again and the canvas is detached.
    pub fn from_canvas(canvas: HtmlCanvasElement, scene: &Scene) -> Result<Self> {
        let gl: GL = canvas
            .get_context("webgl2")
            .map_err(|e| js_err("get context", e))?
            .ok_or(SceneError::NoContext)?
            .dyn_into()
            .map_err(|_| SceneError::NoContext)?;

        let mut surface = Self {
            canvas,
            gl,
            program: None,
            vao: None,
            buffer: None,
            u_view_proj: None,
            u_point_scale: None,
            u_lines: None,
            vertices: Vec::new(),
            height_px: 1,
            attached: true,
        };
        match surface.allocate(scene) {
            Ok(()) => Ok(surface),
            Err(err) => {
                surface.release();
                Err(err)
            }
        }
    }

    fn allocate(&mut self, scene: &Scene) -> Result<()> {
        let gl = &self.gl;

        let program = link_program(gl)?;
        self.program = Some(program.clone());
        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| SceneError::Graphics("create vertex array".into()))?;
        self.vao = Some(vao.clone());
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| SceneError::Graphics("create buffer".into()))?;
        self.buffer = Some(buffer.clone());

        // Object count is fixed for the scene's life, so the buffer is sized once.
        let vertex_count = scene.objects().len()
            + scene.starfield().map_or(0, |s| s.len())
            + scene.links().len() * 2;
        let capacity = vertex_count.max(1) * STRIDE;

        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        gl.buffer_data_with_i32(GL::ARRAY_BUFFER, (capacity * 4) as i32, GL::DYNAMIC_DRAW);

        let stride = (STRIDE * 4) as i32;
        let mut offset = 0;
        for (name, width) in [("a_position", 3), ("a_color", 4), ("a_size", 1), ("a_sprite", 1)] {
            let location = gl.get_attrib_location(&program, name);
            if location >= 0 {
                gl.enable_vertex_attrib_array(location as u32);
                gl.vertex_attrib_pointer_with_i32(location as u32, width, GL::FLOAT, false, stride, offset);
            }
            offset += width * 4;
        }
        gl.bind_vertex_array(None);

        self.u_view_proj = gl.get_uniform_location(&program, "u_view_proj");
        self.u_point_scale = gl.get_uniform_location(&program, "u_point_scale");
        self.u_lines = gl.get_uniform_location(&program, "u_lines");

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        self.vertices = Vec::with_capacity(capacity);
        Ok(())
    }

    fn push(&mut self, position: Vec3, color: [f32; 3], alpha: f32, size: f32, sprite: f32) {
        self.vertices.extend_from_slice(&[
            position.x, position.y, position.z, color[0], color[1], color[2], alpha, size, sprite,
        ]);
    }
}

/// Flat brightness from the scene's lights, plus the object's own glow.
fn shade(scene: &Scene) -> f32 {
    let ambient: f32 = scene
        .lights()
        .iter()
        .map(|light| match light.kind {
            LightKind::Ambient => light.intensity,
            _ => light.intensity * 0.5,
        })
        .sum();
    if scene.lights().is_empty() {
        1.0
    } else {
        ambient.clamp(0.35, 1.0)
    }
}

impl RenderSurface for WebGlSurface {
    fn resize(&mut self, viewport: Viewport) {
        let ratio = web_sys::window()
            .map_or(1.0, |w| w.device_pixel_ratio())
            .min(MAX_PIXEL_RATIO);
        let width = ((viewport.width as f64) * ratio).max(1.0) as u32;
        let height = ((viewport.height as f64) * ratio).max(1.0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
        self.height_px = height;
    }

    fn draw(&mut self, scene: &Scene, camera: &Camera) {
        if !self.attached {
            return;
        }
        self.vertices.clear();

        if let Some(stars) = scene.starfield() {
            let t = stars.current;
            let size = stars.point_size * t.scale * 0.5;
            for (point, color) in stars.points.iter().zip(&stars.colors) {
                self.push(t.apply(*point), color.to_array(), t.opacity, size, SPRITE_DISC);
            }
        }

        let light = shade(scene);
        for object in scene.objects() {
            let glow = (light + object.emissive).min(1.0);
            let [r, g, b] = object.color.to_array();
            self.push(
                scene.world_position(object),
                [r * glow, g * glow, b * glow],
                object.current.opacity,
                object.size * scene.world_scale(object),
                sprite(object.kind),
            );
        }
        let points = self.vertices.len() / STRIDE;

        for link in scene.links() {
            let (Some(from), Some(to)) = (scene.object(link.from), scene.object(link.to)) else {
                continue;
            };
            let color = link.color.to_array();
            self.push(scene.world_position(from), color, link.opacity, 0.0, SPRITE_SOLID);
            self.push(scene.world_position(to), color, link.opacity, 0.0, SPRITE_SOLID);
        }
        let lines = self.vertices.len() / STRIDE - points;

        let gl = &self.gl;
        match scene.clear_color() {
            Some(c) => gl.clear_color(c.0[0], c.0[1], c.0[2], 1.0),
            None => gl.clear_color(0.0, 0.0, 0.0, 0.0),
        }
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(self.program.as_ref());
        gl.bind_vertex_array(self.vao.as_ref());
        gl.bind_buffer(GL::ARRAY_BUFFER, self.buffer.as_ref());
        gl.buffer_sub_data_with_i32_and_u8_array(
            GL::ARRAY_BUFFER,
            0,
            bytemuck::cast_slice(&self.vertices),
        );

        gl.uniform_matrix4fv_with_f32_array(
            self.u_view_proj.as_ref(),
            false,
            &camera.view_projection().to_cols_array(),
        );
        gl.uniform1f(self.u_point_scale.as_ref(), camera.point_scale(self.height_px));

        gl.uniform1i(self.u_lines.as_ref(), 0);
        gl.draw_arrays(GL::POINTS, 0, points as i32);
        if lines > 0 {
            gl.uniform1i(self.u_lines.as_ref(), 1);
            gl.draw_arrays(GL::LINES, points as i32, lines as i32);
        }
        gl.bind_vertex_array(None);
    }

    fn live_resources(&self) -> usize {
        [self.program.is_some(), self.vao.is_some(), self.buffer.is_some(), self.attached]
            .into_iter()
            .filter(|live| *live)
            .count()
    }

    fn release(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.gl.delete_buffer(Some(&buffer));
        }
        if let Some(vao) = self.vao.take() {
            self.gl.delete_vertex_array(Some(&vao));
        }
        if let Some(program) = self.program.take() {
            self.gl.delete_program(Some(&program));
        }
        if self.attached {
            self.canvas.remove();
            self.attached = false;
        }
        self.vertices = Vec::new();
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| SceneError::Shader("create shader".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SceneError::Shader(log))
    }
}

fn link_program(gl: &GL) -> Result<WebGlProgram> {
    let vertex = compile(gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
    let fragment = match compile(gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(Some(&vertex));
            return Err(err);
        }
    };
    let program = gl
        .create_program()
        .ok_or_else(|| SceneError::Shader("create program".into()))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    // Shaders are no longer needed once linked.
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SceneError::Shader(log))
    }
}
