pub mod app;
pub mod color;
pub mod renderer;
pub mod scene;
pub mod scenes;

/// The background color every demo clears to at the start of a frame
/// (cornflower blue, a tutorial-renderer tradition).
pub const CLEAR_COLOR: [f32; 4] = [0.392, 0.584, 0.929, 1.0];
