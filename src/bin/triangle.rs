//! Demo 2: one orange triangle.

use color_eyre::Result;
use glutin::event_loop::EventLoop;

use glint::app::{self, App};
use glint::scenes::Triangle;

fn main() -> Result<()> {
    app::setup_logging()?;

    let event_loop = EventLoop::new();
    let app = App::create("Hello Triangle", 800, 600, &event_loop, Triangle::new())?;
    app.run(event_loop);
}
