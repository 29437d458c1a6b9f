//! The seam between the frame loop and what a demo actually draws.

use color_eyre::Result;

use crate::renderer::api::GlApi;

/// One demo's worth of rendering behavior, driven by
/// [`App`](crate::app::App).
///
/// The loop calls `load` once with a current context, `render` every frame
/// after clearing the color buffer, `resize` whenever the window changes
/// size, and `unload` exactly once on the way out. Everything runs on the
/// loop's thread; there is no re-entrancy to worry about.
pub trait Scene<G: GlApi> {
    /// Build the scene's GPU resources. A failure here aborts the demo; no
    /// degraded mode exists.
    fn load(&mut self, gl: &G) -> Result<()>;

    /// Draw one frame. `dt` is the elapsed time since the previous frame in
    /// seconds. Draw-call failures are not checked, per GL convention.
    fn render(&mut self, gl: &G, dt: f32);

    /// React to the window being resized. GPU resources are never rebuilt
    /// here; the default updates the viewport and nothing else.
    fn resize(&mut self, gl: &G, width: u32, height: u32) {
        gl.viewport(0, 0, width as i32, height as i32);
    }

    /// Release every GPU resource `load` built.
    fn unload(&mut self, gl: &G);
}
