//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//!
//! A failed compile or link is not an error here: the info log is sent to the logger and the
//! object is kept, so a demo with a broken shader still runs and draws whatever the driver
//! makes of it. Only the creation of the GL object itself can fail.

use std::sync::Arc;

use super::gl::{GraphicsApi, ShaderStage};

/// Represents an individual OpenGL shader.
pub struct Shader<G: GraphicsApi> {
    gl: Arc<G>,
    id: G::Shader,
    stage: ShaderStage,
    compiled: bool,
}

impl<G: GraphicsApi> Shader<G> {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<G>, stage: ShaderStage, source: &str) -> Result<Self, String> {
        let shader = gl.create_shader(stage)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        let compiled = gl.shader_compile_status(shader);
        let info_log = gl.shader_info_log(shader);
        let info_log = info_log.trim_end();
        if !compiled {
            log::warn!("{stage} shader failed to compile:\n{info_log}");
        } else if !info_log.is_empty() {
            log::debug!("{stage} shader compile log:\n{info_log}");
        }

        Ok(Self {
            gl: Arc::clone(gl),
            id: shader,
            stage,
            compiled,
        })
    }

    /// Returns the stage this shader was created for.
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// Returns whether the driver reported a successful compile.
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }
}

impl<G: GraphicsApi> Drop for Shader<G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram<G: GraphicsApi> {
    gl: Arc<G>,
    id: G::Program,
    linked: bool,
}

impl<G: GraphicsApi> ShaderProgram<G> {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<G>, shaders: &[&Shader<G>]) -> Result<Self, String> {
        let program = gl.create_program()?;

        for shader in shaders {
            gl.attach_shader(program, shader.id);
        }

        gl.link_program(program);

        let linked = gl.program_link_status(program);
        if !linked {
            let info_log = gl.program_info_log(program);
            log::warn!("shader program failed to link:\n{}", info_log.trim_end());
        }

        for shader in shaders {
            gl.detach_shader(program, shader.id);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            id: program,
            linked,
        })
    }

    /// Compiles a vertex and a fragment shader and links them into a program.
    ///
    /// The intermediate shader objects are released once the program is linked.
    pub fn from_sources(gl: &Arc<G>, vertex: &str, fragment: &str) -> Result<Self, String> {
        let vert = Shader::new(gl, ShaderStage::Vertex, vertex)?;
        let frag = Shader::new(gl, ShaderStage::Fragment, fragment)?;
        Self::new(gl, &[&vert, &frag])
    }

    /// Returns whether the driver reported a successful link.
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        self.gl.use_program(Some(self.id));
    }
}

impl<G: GraphicsApi> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}
