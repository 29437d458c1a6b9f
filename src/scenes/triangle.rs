//! One solid triangle, drawn non-indexed from a three-vertex buffer.

use color_eyre::Result;
use tracing::debug;

use crate::renderer::api::{BufferTarget, GlApi};
use crate::renderer::buffer::GpuBuffer;
use crate::renderer::shader::ShaderProgram;
use crate::renderer::vertex_array::VertexArray;
use crate::scene::Scene;

const VERTICES: [f32; 9] = [
    0.0, 0.5, 0.0, //
    0.5, -0.5, 0.0, //
    -0.5, -0.5, 0.0,
];

const VERT_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 a_position;

void main() {
    gl_Position = vec4(a_position, 1.0);
}
"#;

const FRAG_SRC: &str = r#"#version 330 core
out vec4 frag_color;

void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

#[derive(Debug)]
pub struct Triangle<G: GlApi> {
    gpu: Option<Gpu<G>>,
}

#[derive(Debug)]
struct Gpu<G: GlApi> {
    vbo: GpuBuffer<G>,
    vao: VertexArray<G>,
    program: ShaderProgram<G>,
}

impl<G: GlApi> Triangle<G> {
    pub fn new() -> Self {
        Self { gpu: None }
    }
}

impl<G: GlApi> Scene<G> for Triangle<G> {
    #[tracing::instrument(level = "DEBUG", skip_all)]
    fn load(&mut self, gl: &G) -> Result<()> {
        let vbo = GpuBuffer::new(gl, BufferTarget::Vertex, &VERTICES)?;
        let vao = VertexArray::new(gl, &vbo, None)?;
        vao.attribute(gl, 0, 3, 3, 0);
        let program = ShaderProgram::new(gl, VERT_SRC, FRAG_SRC)?;

        debug!("Triangle scene loaded");
        self.gpu = Some(Gpu { vbo, vao, program });
        Ok(())
    }

    fn render(&mut self, gl: &G, _dt: f32) {
        let Some(gpu) = &self.gpu else { return };
        gpu.program.bind(gl);
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
