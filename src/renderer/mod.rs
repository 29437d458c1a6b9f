pub mod api;
pub mod buffer;
pub mod shader;
pub mod vertex_array;

#[cfg(test)]
pub(crate) mod fake;
