//! Demo 3: an indexed quad and a plain triangle, one VAO each.

use color_eyre::Result;
use glutin::event_loop::EventLoop;

use glint::app::{self, App};
use glint::scenes::TwoTriangles;

fn main() -> Result<()> {
    app::setup_logging()?;

    let event_loop = EventLoop::new();
    let app = App::create(
        "Two Triangles",
        800,
        600,
        &event_loop,
        TwoTriangles::new(),
    )?;
    app.run(event_loop);
}
