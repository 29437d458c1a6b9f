//! The smallest possible demo: a window that clears to the background color
//! every frame and draws nothing.

use color_eyre::Result;

use crate::renderer::api::GlApi;
use crate::scene::Scene;

#[derive(Debug, Default)]
pub struct Window;

impl<G: GlApi> Scene<G> for Window {
    fn load(&mut self, _gl: &G) -> Result<()> {
        Ok(())
    }

    // The frame loop already clears before calling us.
    fn render(&mut self, _gl: &G, _dt: f32) {}

    fn unload(&mut self, _gl: &G) {}
}
