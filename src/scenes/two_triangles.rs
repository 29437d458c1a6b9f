//! The multi-VAO demo: an indexed quad and a non-indexed triangle, each with
//! its own vertex array and program, drawn back to back every frame.

use color_eyre::Result;
use tracing::debug;

use crate::renderer::api::{BufferTarget, GlApi};
use crate::renderer::buffer::GpuBuffer;
use crate::renderer::shader::ShaderProgram;
use crate::renderer::vertex_array::VertexArray;
use crate::scene::Scene;

// A quad on the left, built from four vertices and six indices.
const QUAD_VERTICES: [f32; 12] = [
    -0.8, 0.35, 0.0, //
    -0.1, 0.35, 0.0, //
    -0.1, -0.35, 0.0, //
    -0.8, -0.35, 0.0,
];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

// A triangle on the right, drawn directly.
const TRI_VERTICES: [f32; 9] = [
    0.45, 0.35, 0.0, //
    0.8, -0.35, 0.0, //
    0.1, -0.35, 0.0,
];

const VERT_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 a_position;

void main() {
    gl_Position = vec4(a_position, 1.0);
}
"#;

const QUAD_FRAG_SRC: &str = r#"#version 330 core
out vec4 frag_color;

void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

const TRI_FRAG_SRC: &str = r#"#version 330 core
out vec4 frag_color;

void main() {
    frag_color = vec4(0.2, 0.7, 0.65, 1.0);
}
"#;

#[derive(Debug)]
pub struct TwoTriangles<G: GlApi> {
    gpu: Option<Gpu<G>>,
}

#[derive(Debug)]
struct Gpu<G: GlApi> {
    quad_vbo: GpuBuffer<G>,
    quad_ebo: GpuBuffer<G>,
    quad_vao: VertexArray<G>,
    quad_program: ShaderProgram<G>,

    tri_vbo: GpuBuffer<G>,
    tri_vao: VertexArray<G>,
    tri_program: ShaderProgram<G>,
}

impl<G: GlApi> TwoTriangles<G> {
    pub fn new() -> Self {
        Self { gpu: None }
    }
}

impl<G: GlApi> Scene<G> for TwoTriangles<G> {
    #[tracing::instrument(level = "DEBUG", skip_all)]
    fn load(&mut self, gl: &G) -> Result<()> {
        let quad_vbo = GpuBuffer::new(gl, BufferTarget::Vertex, &QUAD_VERTICES)?;
        let quad_ebo = GpuBuffer::new(gl, BufferTarget::Index, &QUAD_INDICES)?;
        let quad_vao = VertexArray::new(gl, &quad_vbo, Some(&quad_ebo))?;
        quad_vao.attribute(gl, 0, 3, 3, 0);
        let quad_program = ShaderProgram::new(gl, VERT_SRC, QUAD_FRAG_SRC)?;

        let tri_vbo = GpuBuffer::new(gl, BufferTarget::Vertex, &TRI_VERTICES)?;
        let tri_vao = VertexArray::new(gl, &tri_vbo, None)?;
        tri_vao.attribute(gl, 0, 3, 3, 0);
        let tri_program = ShaderProgram::new(gl, VERT_SRC, TRI_FRAG_SRC)?;

        debug!("Two-triangles scene loaded");
        self.gpu = Some(Gpu {
            quad_vbo,
            quad_ebo,
            quad_vao,
            quad_program,
            tri_vbo,
            tri_vao,
            tri_program,
        });
        Ok(())
    }

    fn render(&mut self, gl: &G, _dt: f32) {
        let Some(gpu) = &self.gpu else { return };

        gpu.quad_program.bind(gl);
        gpu.quad_vao.bind(gl);
        gl.draw_triangles_indexed(gpu.quad_ebo.len() as i32);

        gpu.tri_program.bind(gl);
        gpu.tri_vao.bind(gl);
        gl.draw_triangles(0, (gpu.tri_vbo.len() / 3) as i32);
    }

    fn unload(&mut self, gl: &G) {
        if let Some(gpu) = self.gpu.take() {
            gpu.tri_program.destroy(gl);
            gpu.tri_vao.destroy(gl);
            gpu.tri_vbo.destroy(gl);

            gpu.quad_program.destroy(gl);
            gpu.quad_vao.destroy(gl);
            gpu.quad_ebo.destroy(gl);
            gpu.quad_vbo.destroy(gl);
        }
    }
}
