//! Vertex array objects: buffer associations plus attribute layout.

use std::mem::size_of;

use color_eyre::{eyre::eyre, Result};

use super::{api::GlApi, buffer::GpuBuffer};

/// One vertex array object.
///
/// The VAO owns its GL handle but only *references* the buffers bound into
/// it; buffer lifetimes are managed by whoever created them. As with
/// [`GpuBuffer`], release is explicit via [`VertexArray::destroy`].
#[derive(Debug)]
pub struct VertexArray<G: GlApi> {
    raw: G::VertexArray,
}

impl<G: GlApi> VertexArray<G> {
    /// Create a VAO and bind the given vertex buffer (and index buffer, for
    /// indexed draws) as its members.
    pub fn new(gl: &G, vbo: &GpuBuffer<G>, ebo: Option<&GpuBuffer<G>>) -> Result<Self> {
        let raw = gl
            .create_vertex_array()
            .map_err(|e| eyre!("failed to create vertex array: {e}"))?;
        gl.bind_vertex_array(Some(raw));
        vbo.bind(gl);
        if let Some(ebo) = ebo {
            ebo.bind(gl);
        }

        Ok(Self { raw })
    }

    /// Enable and configure one float attribute slot.
    ///
    /// `stride` and `offset` are in units of `f32` elements and are converted
    /// to byte values internally. Nothing checks that the attribute range
    /// stays within the bound buffer; that validation is left to the GPU, as
    /// in any raw GL program.
    pub fn attribute(&self, gl: &G, location: u32, components: i32, stride: i32, offset: i32) {
        let elem = size_of::<f32>() as i32;
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_f32(location, components, stride * elem, offset * elem);
    }

    /// Make this VAO current for subsequent draw calls.
    pub fn bind(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.raw));
    }

    /// Delete the GL vertex array object. The buffers bound into it are not
    /// touched.
    pub fn destroy(self, gl: &G) {
        gl.delete_vertex_array(self.raw);
    }
}
