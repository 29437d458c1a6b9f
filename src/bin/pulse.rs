//! Demo 4: a triangle that drifts through a color palette, driven by a
//! per-frame uniform. Shader sources are read from `shaders/` at startup.

use color_eyre::Result;
use glutin::event_loop::EventLoop;

use glint::app::{self, App};
use glint::scenes::Pulse;

fn main() -> Result<()> {
    app::setup_logging()?;

    let event_loop = EventLoop::new();
    let app = App::create("Pulse", 800, 600, &event_loop, Pulse::new())?;
    app.run(event_loop);
}
