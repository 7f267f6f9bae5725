//! This module contains the thin layer over OpenGL used by the demos,
//! including application setup, shader management, vertex arrays and textures.

pub mod app;
pub mod gl;
pub mod shader;
pub mod texture;
pub mod vertex_array;

pub use app::*;
pub use gl::*;
pub use shader::*;
pub use texture::Texture;
pub use vertex_array::*;
