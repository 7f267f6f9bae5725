//! Vertex array objects.
//!
//! The demos draw without vertex buffers: positions come from `gl_VertexID` and attributes are
//! set as constants, but core profile still requires a bound [`VertexArray`] for any draw.

use std::sync::Arc;

use super::gl::GraphicsApi;

/// Represents a vertex array object stored on the GPU side.
pub struct VertexArray<G: GraphicsApi> {
    gl: Arc<G>,
    id: G::VertexArray,
}

impl<G: GraphicsApi> VertexArray<G> {
    /// Creates a new vertex array and binds it.
    pub fn new(gl: &Arc<G>) -> Result<Self, String> {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        Ok(Self {
            gl: Arc::clone(gl),
            id: vao,
        })
    }

    /// Binds the vertex array.
    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(self.id));
    }
}

impl<G: GraphicsApi> Drop for VertexArray<G> {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.id);
    }
}
