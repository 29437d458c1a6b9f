//! GPU buffer objects (vertex and index data).

use bytemuck::Pod;
use color_eyre::{eyre::eyre, Result};
use tracing::trace;

use super::api::{BufferTarget, GlApi};

/// One GPU buffer, uploaded once at creation and immutable afterwards.
///
/// The wrapper owns the GL buffer object exclusively. There is no `Drop`
/// impl because deleting the buffer needs the context; release it explicitly
/// with [`GpuBuffer::destroy`] during scene teardown.
#[derive(Debug)]
pub struct GpuBuffer<G: GlApi> {
    raw: G::Buffer,
    target: BufferTarget,
    len: usize,
}

impl<G: GlApi> GpuBuffer<G> {
    /// Generate a buffer, bind it at `target`, and upload `data` with
    /// static-draw usage. Allocation rejection by the context is fatal and
    /// propagates.
    pub fn new<T: Pod>(gl: &G, target: BufferTarget, data: &[T]) -> Result<Self> {
        let raw = gl
            .create_buffer()
            .map_err(|e| eyre!("failed to allocate GPU buffer: {e}"))?;
        gl.bind_buffer(target, Some(raw));
        gl.buffer_data(target, bytemuck::cast_slice(data));

        trace!(?target, elements = data.len(), "Uploaded GPU buffer");

        Ok(Self {
            raw,
            target,
            len: data.len(),
        })
    }

    /// Make this buffer current for its target.
    pub fn bind(&self, gl: &G) {
        gl.bind_buffer(self.target, Some(self.raw));
    }

    /// The number of elements uploaded at creation. Fixed for the buffer's
    /// lifetime; these buffers are never resized.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn target(&self) -> BufferTarget {
        self.target
    }

    /// Delete the GL buffer object. Consumes the wrapper so a dangling
    /// handle can't be rebound afterwards.
    pub fn destroy(self, gl: &G) {
        gl.delete_buffer(self.raw);
    }
}
