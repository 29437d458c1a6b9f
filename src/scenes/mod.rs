//! The demo scenes, in increasing order of ambition: a bare cleared window,
//! a triangle, a multi-VAO pair of draws, and a color-cycling triangle fed
//! by a per-frame uniform.

mod pulse;
mod triangle;
mod two_triangles;
mod window;

pub use pulse::Pulse;
pub use triangle::Triangle;
pub use two_triangles::TwoTriangles;
pub use window::Window;
