//! A large triangle filled with a procedurally generated bitwise pattern texture.

use std::sync::Arc;

use glam::Vec4;

use crate::abs::{GraphicsApi, MARKER_MESSAGE_ID, ShaderProgram, Texture, VertexArray, texture};
use crate::config::AppInfo;
use crate::lifecycle::{Application, Lifecycle, State};

pub const NAME: &str = "simpletexture";
pub const TITLE: &str = "OpenGL SuperBible - My Simple Texture";

const VERTEX_SHADER: &str = include_str!("shaders/simpletexture/vert.glsl");
const FRAGMENT_SHADER: &str = include_str!("shaders/simpletexture/frag.glsl");

pub const TEXTURE_SIZE: u32 = 256;
pub const TEXTURE_LEVELS: u32 = 8;
pub const CLEAR_COLOR: Vec4 = Vec4::new(0.0, 0.25, 0.0, 1.0);

/// Returns the pattern color at texel (`x`, `y`): AND, OR and XOR of the coordinates in the
/// red, green and blue channels, opaque alpha.
pub fn pattern_texel(x: u32, y: u32) -> Vec4 {
    Vec4::new(
        ((x & y) & 0xFF) as f32 / 255.0,
        ((x | y) & 0xFF) as f32 / 255.0,
        ((x ^ y) & 0xFF) as f32 / 255.0,
        1.0,
    )
}

/// Fills a `width` x `height` RGBA float image with [`pattern_texel`], row by row.
pub fn generate_texture(width: u32, height: u32) -> Vec<f32> {
    let mut data = Vec::with_capacity(width as usize * height as usize * texture::CHANNELS);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&pattern_texel(x, y).to_array());
        }
    }
    data
}

/// Formats the context description sent to the log and the debug output.
pub fn context_message(gl: &impl GraphicsApi) -> String {
    let info = gl.context_info();
    format!(
        "Created debug context with {} {}. The OpenGL version is {}.",
        info.vendor, info.renderer, info.version
    )
}

// Field order is release order.
struct Resources<G: GraphicsApi> {
    gl: Arc<G>,
    program: ShaderProgram<G>,
    _vao: VertexArray<G>,
    _texture: Texture<G>,
}

/// The simple texture demo.
pub struct SimpleTexture<G: GraphicsApi> {
    lifecycle: Lifecycle<Resources<G>>,
}

impl<G: GraphicsApi> Default for SimpleTexture<G> {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::default(),
        }
    }
}

impl<G: GraphicsApi> SimpleTexture<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.lifecycle.state()
    }
}

impl<G: GraphicsApi> Application<G> for SimpleTexture<G> {
    fn init(&self, info: &mut AppInfo) {
        info.title = TITLE.to_string();
    }

    fn startup(&mut self, gl: &Arc<G>) -> Result<(), String> {
        self.lifecycle.start(|| {
            let texture = Texture::with_storage(gl, TEXTURE_SIZE, TEXTURE_SIZE, TEXTURE_LEVELS)?;
            texture.upload_level(0, &generate_texture(TEXTURE_SIZE, TEXTURE_SIZE))?;

            let program = ShaderProgram::from_sources(gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
            let vao = VertexArray::new(gl)?;

            let message = context_message(gl.as_ref());
            log::info!("{message}");
            gl.insert_debug_marker(MARKER_MESSAGE_ID, &message);

            Ok(Resources {
                gl: Arc::clone(gl),
                program,
                _vao: vao,
                _texture: texture,
            })
        })
    }

    fn render(&mut self, _time: f64) {
        let Some(res) = self.lifecycle.running() else {
            return;
        };

        res.gl.clear_color_buffer(CLEAR_COLOR);
        res.program.use_program();
        res.gl.draw_triangles(0, 3);
    }

    fn shutdown(&mut self) {
        drop(self.lifecycle.stop());
    }
}
