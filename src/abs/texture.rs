//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture
//! with immutable floating point storage.

use std::sync::Arc;

use super::gl::GraphicsApi;

/// Number of `f32` values per texel.
pub const CHANNELS: usize = 4;

/// Represents a texture stored on the GPU side.
///
/// Storage is `RGBA32F` and allocated for every mip level up front; levels are filled
/// individually with [`Texture::upload_level`].
pub struct Texture<G: GraphicsApi> {
    gl: Arc<G>,
    id: G::Texture,
    width: u32,
    height: u32,
    levels: u32,
}

impl<G: GraphicsApi> Texture<G> {
    /// Creates a texture with `levels` mip levels of storage. The texture is left bound to
    /// the 2D target.
    pub fn with_storage(gl: &Arc<G>, width: u32, height: u32, levels: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("invalid texture size {width}x{height}"));
        }
        let max_levels = 32 - width.max(height).leading_zeros();
        if levels == 0 || levels > max_levels {
            return Err(format!(
                "{levels} mip levels requested for a {width}x{height} texture (at most {max_levels})"
            ));
        }

        let texture = gl.create_texture()?;
        gl.bind_texture_2d(Some(texture));
        gl.tex_storage_2d(levels, width, height);

        Ok(Self {
            gl: Arc::clone(gl),
            id: texture,
            width,
            height,
            levels,
        })
    }

    /// Returns the size of the given mip level.
    pub fn level_size(&self, level: u32) -> (u32, u32) {
        ((self.width >> level).max(1), (self.height >> level).max(1))
    }

    /// Replaces the contents of a whole mip level with RGBA texels.
    pub fn upload_level(&self, level: u32, texels: &[f32]) -> Result<(), String> {
        if level >= self.levels {
            return Err(format!(
                "mip level {level} out of range, texture has {} levels",
                self.levels
            ));
        }
        let (width, height) = self.level_size(level);
        let expected = width as usize * height as usize * CHANNELS;
        if texels.len() != expected {
            return Err(format!(
                "level {level} is {width}x{height} and needs {expected} floats, got {}",
                texels.len()
            ));
        }

        self.gl.bind_texture_2d(Some(self.id));
        self.gl.tex_sub_image_2d(level, width, height, texels);
        Ok(())
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of mip levels allocated.
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Binds the texture to the 2D target.
    pub fn bind(&self) {
        self.gl.bind_texture_2d(Some(self.id));
    }
}

impl<G: GraphicsApi> Drop for Texture<G> {
    fn drop(&mut self) {
        self.gl.delete_texture(self.id);
    }
}
