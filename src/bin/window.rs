//! Demo 1: an empty window cleared to cornflower blue.

use color_eyre::Result;
use glutin::event_loop::EventLoop;

use glint::app::{self, App};
use glint::scenes::Window;

fn main() -> Result<()> {
    app::setup_logging()?;

    let event_loop = EventLoop::new();
    let app = App::create("Hello Window", 800, 600, &event_loop, Window)?;
    app.run(event_loop);
}
