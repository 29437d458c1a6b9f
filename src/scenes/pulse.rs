//! The color-cycling triangle: shader sources come from files on disk, and
//! the fragment color drifts through a palette via a per-frame uniform.

use color_eyre::Result;
use tracing::debug;

use crate::color::ColorCycle;
use crate::renderer::api::{BufferTarget, GlApi};
use crate::renderer::buffer::GpuBuffer;
use crate::renderer::shader::ShaderProgram;
use crate::renderer::vertex_array::VertexArray;
use crate::scene::Scene;

const VERT_PATH: &str = "shaders/pulse.vert";
const FRAG_PATH: &str = "shaders/pulse.frag";

/// How aggressively the color chases its target, in lerp-factor per second.
const TRANSITION_SPEED: f32 = 2.0;

const VERTICES: [f32; 9] = [
    0.0, 0.5, 0.0, //
    0.5, -0.5, 0.0, //
    -0.5, -0.5, 0.0,
];

#[derive(Debug)]
pub struct Pulse<G: GlApi> {
    gpu: Option<Gpu<G>>,
    cycle: ColorCycle,
}

#[derive(Debug)]
struct Gpu<G: GlApi> {
    vbo: GpuBuffer<G>,
    vao: VertexArray<G>,
    program: ShaderProgram<G>,
}

impl<G: GlApi> Pulse<G> {
    pub fn new() -> Self {
        Self {
            gpu: None,
            cycle: ColorCycle::new(TRANSITION_SPEED),
        }
    }

    /// A pulse with a deterministic color sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            gpu: None,
            cycle: ColorCycle::from_seed(TRANSITION_SPEED, seed),
        }
    }
}

impl<G: GlApi> Scene<G> for Pulse<G> {
    #[tracing::instrument(level = "DEBUG", skip_all)]
    fn load(&mut self, gl: &G) -> Result<()> {
        let vbo = GpuBuffer::new(gl, BufferTarget::Vertex, &VERTICES)?;
        let vao = VertexArray::new(gl, &vbo, None)?;
        vao.attribute(gl, 0, 3, 3, 0);
        let program = ShaderProgram::from_files(gl, VERT_PATH, FRAG_PATH)?;

        debug!("Pulse scene loaded");
        self.gpu = Some(Gpu { vbo, vao, program });
        Ok(())
    }

    fn render(&mut self, gl: &G, dt: f32) {
        let Some(gpu) = &self.gpu else { return };
        let color = self.cycle.step(dt);

        gpu.program.bind(gl);
        gpu.program.set_vec3(gl, "u_color", &color);
        gpu.vao.bind(gl);
        gl.draw_triangles(0, (gpu.vbo.len() / 3) as i32);
    }

    fn unload(&mut self, gl: &G) {
        if let Some(gpu) = self.gpu.take() {
            gpu.program.destroy(gl);
            gpu.vao.destroy(gl);
            gpu.vbo.destroy(gl);
        }
    }
}
