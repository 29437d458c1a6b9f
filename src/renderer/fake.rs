//! A recording, in-memory [`GlApi`] implementation for unit tests.
//!
//! `FakeGl` tracks object lifecycles, binding points, uniform traffic, and
//! draw calls the way the GL server would, without needing a context or a
//! driver. Failure injection (`fail_compile`, `fail_link`) stands in for a
//! real compiler rejecting bad source.

use std::cell::RefCell;

use ahash::AHashMap;

use super::api::{BufferTarget, GlApi, ShaderStage};

/// One recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Arrays { first: i32, count: i32 },
    Elements { count: i32 },
}

#[derive(Debug)]
struct ShaderRecord {
    stage: ShaderStage,
    compiled_ok: bool,
    log: String,
}

#[derive(Debug, Default)]
struct ProgramRecord {
    attached: Vec<u32>,
    linked_ok: bool,
    log: String,
}

#[derive(Default)]
struct State {
    next_id: u32,

    live_buffers: AHashMap<u32, ()>,
    live_vertex_arrays: AHashMap<u32, ()>,
    live_shaders: AHashMap<u32, ShaderRecord>,
    live_programs: AHashMap<u32, ProgramRecord>,
    allocations: usize,

    bound_vertex: Option<u32>,
    bound_index: Option<u32>,
    bound_vertex_array: Option<u32>,
    used_program: Option<u32>,

    uploads: AHashMap<BufferTarget, usize>,
    enabled_attribs: Vec<u32>,
    attrib_pointers: Vec<(u32, i32, i32, i32)>,

    fail_compile: Option<(ShaderStage, String)>,
    fail_link: Option<String>,

    active_uniforms: AHashMap<String, i32>,
    uniform_lookups: AHashMap<String, usize>,
    f32_uniforms: Vec<(i32, f32)>,
    vec3_uniforms: Vec<(i32, [f32; 3])>,

    viewport_calls: Vec<(i32, i32, i32, i32)>,
    clear_calls: usize,
    draw_calls: Vec<DrawCall>,
}

pub struct FakeGl {
    state: RefCell<State>,
}

// The wrappers are generic over `G: GlApi` and derive Debug, so the fake has
// to be Debug too; dumping the whole recorded state is never useful though.
impl std::fmt::Debug for FakeGl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FakeGl")
    }
}

impl FakeGl {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State::default()),
        }
    }

    /// Make the next compile of `stage` fail with `log`.
    pub fn fail_compile(&self, stage: ShaderStage, log: &str) {
        self.state.borrow_mut().fail_compile = Some((stage, log.to_owned()));
    }

    /// Make the next program link fail with `log`.
    pub fn fail_link(&self, log: &str) {
        self.state.borrow_mut().fail_link = Some(log.to_owned());
    }

    /// Register `name` as an active uniform; undeclared names resolve to
    /// nothing, like a name the linker optimized away.
    pub fn declare_uniform(&self, name: &str) {
        let mut state = self.state.borrow_mut();
        let location = state.active_uniforms.len() as i32;
        state.active_uniforms.insert(name.to_owned(), location);
    }

    pub fn bound_buffer(&self, target: BufferTarget) -> Option<u32> {
        let state = self.state.borrow();
        match target {
            BufferTarget::Vertex => state.bound_vertex,
            BufferTarget::Index => state.bound_index,
        }
    }

    pub fn bound_vertex_array(&self) -> Option<u32> {
        self.state.borrow().bound_vertex_array
    }

    pub fn used_program(&self) -> Option<u32> {
        self.state.borrow().used_program
    }

    /// Byte length of the most recent upload to `target`.
    pub fn uploaded_bytes(&self, target: BufferTarget) -> usize {
        self.state.borrow().uploads.get(&target).copied().unwrap_or(0)
    }

    pub fn live_buffers(&self) -> usize {
        self.state.borrow().live_buffers.len()
    }

    pub fn live_vertex_arrays(&self) -> usize {
        self.state.borrow().live_vertex_arrays.len()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().live_shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().live_programs.len()
    }

    /// Total create calls across every object kind, for asserting that a
    /// code path allocates nothing.
    pub fn allocations(&self) -> usize {
        self.state.borrow().allocations
    }

    pub fn enabled_attribs(&self) -> Vec<u32> {
        self.state.borrow().enabled_attribs.clone()
    }

    pub fn attrib_pointers(&self) -> Vec<(u32, i32, i32, i32)> {
        self.state.borrow().attrib_pointers.clone()
    }

    pub fn uniform_lookups(&self, name: &str) -> usize {
        self.state
            .borrow()
            .uniform_lookups
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    /// Total uniform-set calls of any type.
    pub fn uniform_sets(&self) -> usize {
        let state = self.state.borrow();
        state.f32_uniforms.len() + state.vec3_uniforms.len()
    }

    pub fn last_vec3_uniform(&self) -> Option<[f32; 3]> {
        self.state.borrow().vec3_uniforms.last().map(|(_, v)| *v)
    }

    pub fn viewport_calls(&self) -> Vec<(i32, i32, i32, i32)> {
        self.state.borrow().viewport_calls.clone()
    }

    pub fn clear_calls(&self) -> usize {
        self.state.borrow().clear_calls
    }

    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.state.borrow().draw_calls.clone()
    }

    fn fresh_id(state: &mut State) -> u32 {
        state.next_id += 1;
        state.allocations += 1;
        state.next_id
    }
}

impl GlApi for FakeGl {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type UniformLocation = i32;

    fn create_buffer(&self) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        let id = Self::fresh_id(&mut state);
        state.live_buffers.insert(id, ());
        Ok(id)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        let mut state = self.state.borrow_mut();
        match target {
            BufferTarget::Vertex => state.bound_vertex = buffer,
            BufferTarget::Index => state.bound_index = buffer,
        }
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        self.state.borrow_mut().uploads.insert(target, data.len());
    }

    fn delete_buffer(&self, buffer: u32) {
        self.state.borrow_mut().live_buffers.remove(&buffer);
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        let id = Self::fresh_id(&mut state);
        state.live_vertex_arrays.insert(id, ());
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.state.borrow_mut().bound_vertex_array = vertex_array;
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.state
            .borrow_mut()
            .live_vertex_arrays
            .remove(&vertex_array);
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.state.borrow_mut().enabled_attribs.push(location);
    }

    fn vertex_attrib_pointer_f32(&self, location: u32, components: i32, stride: i32, offset: i32) {
        self.state
            .borrow_mut()
            .attrib_pointers
            .push((location, components, stride, offset));
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        let id = Self::fresh_id(&mut state);
        state.live_shaders.insert(
            id,
            ShaderRecord {
                stage,
                compiled_ok: false,
                log: String::new(),
            },
        );
        Ok(id)
    }

    fn shader_source(&self, _shader: u32, _source: &str) {}

    fn compile_shader(&self, shader: u32) {
        let mut state = self.state.borrow_mut();
        let stage = state.live_shaders[&shader].stage;
        let failure = match &state.fail_compile {
            Some((failing_stage, log)) if *failing_stage == stage => Some(log.clone()),
            _ => None,
        };
        let record = state.live_shaders.get_mut(&shader).unwrap();
        match failure {
            Some(log) => {
                record.compiled_ok = false;
                record.log = log;
            }
            None => record.compiled_ok = true,
        }
    }

    fn shader_compile_ok(&self, shader: u32) -> bool {
        self.state.borrow().live_shaders[&shader].compiled_ok
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.state.borrow().live_shaders[&shader].log.clone()
    }

    fn delete_shader(&self, shader: u32) {
        self.state.borrow_mut().live_shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut state = self.state.borrow_mut();
        let id = Self::fresh_id(&mut state);
        state.live_programs.insert(id, ProgramRecord::default());
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state.borrow_mut();
        state
            .live_programs
            .get_mut(&program)
            .unwrap()
            .attached
            .push(shader);
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state.borrow_mut();
        state
            .live_programs
            .get_mut(&program)
            .unwrap()
            .attached
            .retain(|&s| s != shader);
    }

    fn link_program(&self, program: u32) {
        let mut state = self.state.borrow_mut();
        let failure = state.fail_link.take();
        let record = state.live_programs.get_mut(&program).unwrap();
        match failure {
            Some(log) => {
                record.linked_ok = false;
                record.log = log;
            }
            None => record.linked_ok = true,
        }
    }

    fn program_link_ok(&self, program: u32) -> bool {
        self.state.borrow().live_programs[&program].linked_ok
    }

    fn program_info_log(&self, program: u32) -> String {
        self.state.borrow().live_programs[&program].log.clone()
    }

    fn delete_program(&self, program: u32) {
        self.state.borrow_mut().live_programs.remove(&program);
    }

    fn use_program(&self, program: Option<u32>) {
        self.state.borrow_mut().used_program = program;
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<i32> {
        let mut state = self.state.borrow_mut();
        *state.uniform_lookups.entry(name.to_owned()).or_insert(0) += 1;
        state.active_uniforms.get(name).copied()
    }

    fn set_uniform_f32(&self, location: &i32, value: f32) {
        self.state.borrow_mut().f32_uniforms.push((*location, value));
    }

    fn set_uniform_vec3(&self, location: &i32, value: &[f32; 3]) {
        self.state
            .borrow_mut()
            .vec3_uniforms
            .push((*location, *value));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.state
            .borrow_mut()
            .viewport_calls
            .push((x, y, width, height));
    }

    // The clear color is set once by the frame loop; no test asserts it.
    fn set_clear_color(&self, _r: f32, _g: f32, _b: f32, _a: f32) {}

    fn clear(&self) {
        self.state.borrow_mut().clear_calls += 1;
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.state
            .borrow_mut()
            .draw_calls
            .push(DrawCall::Arrays { first, count });
    }

    fn draw_triangles_indexed(&self, count: i32) {
        self.state
            .borrow_mut()
            .draw_calls
            .push(DrawCall::Elements { count });
    }
}
