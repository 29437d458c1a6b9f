//! Shader program compilation, linking, and uniform plumbing.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use thiserror::Error;
use tracing::{debug, trace};

use super::api::{GlApi, ShaderStage};

/// For when building a usable shader program fails.
///
/// Every variant is fatal at load time: a scene either gets a fully linked
/// program or aborts. There is no partial-success mode and no hot reload.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to compile {stage} shader:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("Failed to link shader program:\n{log}")]
    Link { log: String },
    /// The driver refused to even hand out a shader or program object.
    #[error("Failed to create {stage} object: {reason}")]
    Create { stage: &'static str, reason: String },
    #[error("Failed to read shader source from {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One compiled and linked GPU shader program.
///
/// The two stage objects used during construction are transient: they are
/// detached and deleted before `new` returns, whatever the outcome. Uniform
/// locations are cached per name (misses included) so steady-state frames
/// don't re-query the driver.
#[derive(Debug)]
pub struct ShaderProgram<G: GlApi> {
    raw: G::Program,
    uniforms: RefCell<AHashMap<String, Option<G::UniformLocation>>>,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Compile both stages and link them into a program.
    ///
    /// Fails with [`ShaderError::Compile`] naming the offending stage, or
    /// [`ShaderError::Link`], with the driver's info log attached. On the
    /// link path the program object is deleted before returning the error;
    /// nothing GPU-side outlives a failed construction.
    #[tracing::instrument(level = "DEBUG", skip_all)]
    pub fn new(gl: &G, vert_src: &str, frag_src: &str) -> Result<Self, ShaderError> {
        let vert = compile_stage(gl, ShaderStage::Vertex, vert_src)?;
        let frag = match compile_stage(gl, ShaderStage::Fragment, frag_src) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(vert);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(reason) => {
                gl.delete_shader(vert);
                gl.delete_shader(frag);
                return Err(ShaderError::Create {
                    stage: "program",
                    reason,
                });
            }
        };

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        let linked = gl.program_link_ok(program);

        // The stage objects are done their job whether or not the link
        // succeeded.
        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        if !linked {
            let log = gl.program_info_log(program);
            gl.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        debug!("Linked shader program");

        Ok(Self {
            raw: program,
            uniforms: RefCell::new(AHashMap::new()),
        })
    }

    /// Read the two stage sources from disk, then compile and link them.
    ///
    /// A failed read surfaces as [`ShaderError::SourceRead`]; it is just as
    /// fatal as a compile error.
    #[tracing::instrument(level = "DEBUG", skip_all, fields(vert = ?vert_path.as_ref(), frag = ?frag_path.as_ref()))]
    pub fn from_files<P>(gl: &G, vert_path: P, frag_path: P) -> Result<Self, ShaderError>
    where
        P: AsRef<Path>,
    {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| ShaderError::SourceRead {
                path: path.to_owned(),
                source,
            })
        };

        let vert_src = read(vert_path.as_ref())?;
        let frag_src = read(frag_path.as_ref())?;
        Self::new(gl, &vert_src, &frag_src)
    }

    /// Make this program current for subsequent draw calls.
    pub fn bind(&self, gl: &G) {
        gl.use_program(Some(self.raw));
    }

    /// Set a float uniform. Silently a no-op if `name` is not an active
    /// uniform, matching how GL treats a `-1` location.
    pub fn set_f32(&self, gl: &G, name: &str, value: f32) {
        if let Some(location) = self.location(gl, name) {
            gl.set_uniform_f32(&location, value);
        }
    }

    /// Set a vec3 uniform; same no-op contract as [`ShaderProgram::set_f32`].
    pub fn set_vec3(&self, gl: &G, name: &str, value: &[f32; 3]) {
        if let Some(location) = self.location(gl, name) {
            gl.set_uniform_vec3(&location, value);
        }
    }

    fn location(&self, gl: &G, name: &str) -> Option<G::UniformLocation> {
        let mut cache = self.uniforms.borrow_mut();
        if let Some(cached) = cache.get(name) {
            return cached.clone();
        }

        let location = gl.uniform_location(self.raw, name);
        if location.is_none() {
            trace!(uniform = name, "Uniform does not resolve; updates to it will be dropped");
        }
        cache.insert(name.to_owned(), location.clone());
        location
    }

    /// Delete the GL program object.
    pub fn destroy(self, gl: &G) {
        gl.delete_program(self.raw);
    }
}

/// Compile a single stage, deleting the stage object again if compilation
/// fails.
fn compile_stage<G: GlApi>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl.create_shader(stage).map_err(|reason| ShaderError::Create {
        stage: "shader",
        reason,
    })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compile_ok(shader) {
        Ok(shader)
    } else {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        Err(ShaderError::Compile { stage, log })
    }
}
