//! A triangle that drifts in a circle while the background and triangle colors cycle.
//!
//! No vertex data is uploaded: the vertex shader picks a corner by `gl_VertexID` and adds a
//! per-frame offset that is passed as a constant vertex attribute, together with the color.

use std::sync::Arc;

use glam::Vec4;

use crate::abs::{GraphicsApi, ShaderProgram, VertexArray};
use crate::config::AppInfo;
use crate::lifecycle::{Application, Lifecycle, State};

pub const NAME: &str = "movingtri";
pub const TITLE: &str = "OpenGL SuperBible - My Moving Triangle";

const VERTEX_SHADER: &str = include_str!("shaders/movingtri/vert.glsl");
const FRAGMENT_SHADER: &str = include_str!("shaders/movingtri/frag.glsl");

/// Attribute location of the position offset.
pub const OFFSET_ATTRIB: u32 = 0;
/// Attribute location of the triangle color.
pub const COLOR_ATTRIB: u32 = 1;

/// Everything that changes from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub clear_color: Vec4,
    pub offset: Vec4,
    pub vertex_color: Vec4,
}

impl FrameParams {
    /// Computes the frame at `time` seconds. Depends on nothing but `time`.
    pub fn at(time: f64) -> Self {
        // Evaluated in double precision, narrowed before scaling.
        let s = time.sin() as f32;
        let c = time.cos() as f32;

        Self {
            clear_color: Vec4::new(s * 0.5 + 0.5, c * 0.5 + 0.5, 0.0, 1.0),
            offset: Vec4::new(s * 0.5, c * 0.6, 0.0, 0.0),
            vertex_color: Vec4::new(0.0, s * 0.5 + 0.5, c * 0.5 + 0.5, 1.0),
        }
    }
}

// Field order is release order.
struct Resources<G: GraphicsApi> {
    gl: Arc<G>,
    _vao: VertexArray<G>,
    program: ShaderProgram<G>,
}

/// The moving triangle demo.
pub struct MovingTriangle<G: GraphicsApi> {
    lifecycle: Lifecycle<Resources<G>>,
}

impl<G: GraphicsApi> Default for MovingTriangle<G> {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::default(),
        }
    }
}

impl<G: GraphicsApi> MovingTriangle<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.lifecycle.state()
    }
}

impl<G: GraphicsApi> Application<G> for MovingTriangle<G> {
    fn init(&self, info: &mut AppInfo) {
        info.title = TITLE.to_string();
    }

    fn startup(&mut self, gl: &Arc<G>) -> Result<(), String> {
        self.lifecycle.start(|| {
            let program = ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
            let vao = VertexArray::new(gl)?;
            Ok(Resources {
                gl: Arc::clone(gl),
                _vao: vao,
                program,
            })
        })
    }

    fn render(&mut self, time: f64) {
        let Some(res) = self.lifecycle.running() else {
            return;
        };
        let frame = FrameParams::at(time);

        res.gl.clear_color_buffer(frame.clear_color);
        res.program.use_program();
        res.gl.vertex_attrib_4(OFFSET_ATTRIB, frame.offset);
        res.gl.vertex_attrib_4(COLOR_ATTRIB, frame.vertex_color);
        res.gl.draw_triangles(0, 3);
    }

    fn shutdown(&mut self) {
        drop(self.lifecycle.stop());
    }
}
