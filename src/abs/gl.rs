//! The graphics binding.
//!
//! [`GraphicsApi`] is the slice of OpenGL the demos actually call. It is implemented for
//! [`glow::Context`], and every GPU wrapper in [`crate::abs`] is generic over it so the
//! demos can be driven without a window.

use std::fmt;

use glam::Vec4;
use glow::HasContext;

/// Debug message id used for application markers.
pub const MARKER_MESSAGE_ID: u32 = 0x4752_415A;

/// The programmable stage a shader object belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Returns the OpenGL enum for this stage.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Strings describing the current context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextInfo {
    pub vendor: String,
    pub renderer: String,
    pub version: String,
}

/// The OpenGL entry points used by the demos.
///
/// Object creation is the only fallible group; everything else mirrors the
/// void-returning GL call it wraps.
pub trait GraphicsApi {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;
    type VertexArray: Copy + fmt::Debug;
    type Texture: Copy + fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_texture(&self) -> Result<Self::Texture, String>;
    fn bind_texture_2d(&self, texture: Option<Self::Texture>);
    /// Allocates immutable `RGBA32F` storage for the bound 2D texture.
    fn tex_storage_2d(&self, levels: u32, width: u32, height: u32);
    /// Replaces the whole of `level` of the bound 2D texture with RGBA float texels.
    fn tex_sub_image_2d(&self, level: u32, width: u32, height: u32, texels: &[f32]);
    fn delete_texture(&self, texture: Self::Texture);

    /// Clears color attachment 0 of the bound framebuffer.
    fn clear_color_buffer(&self, color: Vec4);
    /// Sets the constant value of a vertex attribute that has no array bound.
    fn vertex_attrib_4(&self, index: u32, value: Vec4);
    fn draw_triangles(&self, first: i32, count: i32);

    fn context_info(&self) -> ContextInfo;
    /// Inserts an application marker into the debug output stream.
    fn insert_debug_marker(&self, id: u32, message: &str);
}

impl GraphicsApi for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type VertexArray = glow::VertexArray;
    type Texture = glow::Texture;

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn create_vertex_array(&self) -> Result<glow::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<glow::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: glow::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn create_texture(&self) -> Result<glow::Texture, String> {
        unsafe { HasContext::create_texture(self) }
    }

    fn bind_texture_2d(&self, texture: Option<glow::Texture>) {
        unsafe { self.bind_texture(glow::TEXTURE_2D, texture) }
    }

    fn tex_storage_2d(&self, levels: u32, width: u32, height: u32) {
        unsafe {
            HasContext::tex_storage_2d(
                self,
                glow::TEXTURE_2D,
                levels as i32,
                glow::RGBA32F,
                width as i32,
                height as i32,
            );
        }
    }

    fn tex_sub_image_2d(&self, level: u32, width: u32, height: u32, texels: &[f32]) {
        unsafe {
            let bytes = std::slice::from_raw_parts(
                texels.as_ptr() as *const u8,
                std::mem::size_of_val(texels),
            );
            HasContext::tex_sub_image_2d(
                self,
                glow::TEXTURE_2D,
                level as i32,
                0,
                0,
                width as i32,
                height as i32,
                glow::RGBA,
                glow::FLOAT,
                glow::PixelUnpackData::Slice(Some(bytes)),
            );
        }
    }

    fn delete_texture(&self, texture: glow::Texture) {
        unsafe { HasContext::delete_texture(self, texture) }
    }

    fn clear_color_buffer(&self, color: Vec4) {
        unsafe { self.clear_buffer_f32_slice(glow::COLOR, 0, &color.to_array()) }
    }

    fn vertex_attrib_4(&self, index: u32, value: Vec4) {
        unsafe { self.vertex_attrib_4_f32(index, value.x, value.y, value.z, value.w) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { self.draw_arrays(glow::TRIANGLES, first, count) }
    }

    fn context_info(&self) -> ContextInfo {
        unsafe {
            ContextInfo {
                vendor: self.get_parameter_string(glow::VENDOR),
                renderer: self.get_parameter_string(glow::RENDERER),
                version: self.get_parameter_string(glow::VERSION),
            }
        }
    }

    fn insert_debug_marker(&self, id: u32, message: &str) {
        if !self.supports_debug() {
            return;
        }
        unsafe {
            self.debug_message_insert(
                glow::DEBUG_SOURCE_APPLICATION,
                glow::DEBUG_TYPE_MARKER,
                id,
                glow::DEBUG_SEVERITY_NOTIFICATION,
                message,
            );
        }
    }
}
