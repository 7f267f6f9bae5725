//! A [`GraphicsApi`] double that records calls and tracks live objects.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use glam::Vec4;

use crate::abs::{ContextInfo, GraphicsApi, ShaderStage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Shader,
    Program,
    VertexArray,
    Texture,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateTexture(u32),
    BindTexture2d(Option<u32>),
    TexStorage2d { levels: u32, width: u32, height: u32 },
    TexSubImage2d { level: u32, width: u32, height: u32 },
    DeleteTexture(u32),
    ClearColor(Vec4),
    VertexAttrib(u32, Vec4),
    DrawTriangles(i32, i32),
    DebugMarker(u32, String),
}

#[derive(Default)]
struct State {
    next_id: u32,
    live: HashMap<ObjectKind, HashSet<u32>>,
    calls: Vec<Call>,
    stages: HashMap<u32, ShaderStage>,
    compiled: HashMap<u32, bool>,
    attached: HashMap<u32, Vec<u32>>,
    linked: HashMap<u32, bool>,
    failing_stages: HashSet<ShaderStage>,
    failing_link: bool,
    refused: HashSet<ObjectKind>,
    uploads: Vec<Vec<f32>>,
}

impl State {
    fn create(&mut self, kind: ObjectKind) -> Result<u32, String> {
        if self.refused.contains(&kind) {
            return Err(format!("cannot create {kind:?}"));
        }
        self.next_id += 1;
        let id = self.next_id;
        self.live.entry(kind).or_default().insert(id);
        Ok(id)
    }

    fn delete(&mut self, kind: ObjectKind, id: u32) {
        let removed = self.live.entry(kind).or_default().remove(&id);
        assert!(removed, "{kind:?} {id} deleted twice or never created");
    }
}

#[derive(Default)]
pub struct RecordingGl {
    state: Mutex<State>,
}

impl RecordingGl {
    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Makes every shader of `stage` report a failed compile.
    pub fn fail_compile(&self, stage: ShaderStage) {
        self.state().failing_stages.insert(stage);
    }

    /// Makes every program report a failed link.
    pub fn fail_link(&self) {
        self.state().failing_link = true;
    }

    /// Makes creation of `kind` objects return an error.
    pub fn refuse_creation(&self, kind: ObjectKind) {
        self.state().refused.insert(kind);
    }

    /// Number of `kind` objects created and not yet deleted.
    pub fn live(&self, kind: ObjectKind) -> usize {
        self.state().live.get(&kind).map_or(0, HashSet::len)
    }

    pub fn live_total(&self) -> usize {
        self.state().live.values().map(HashSet::len).sum()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Texel data passed to each texture upload, in order.
    pub fn uploads(&self) -> Vec<Vec<f32>> {
        self.state().uploads.clone()
    }

    fn record(&self, call: Call) {
        self.state().calls.push(call);
    }
}

impl GraphicsApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type VertexArray = u32;
    type Texture = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut state = self.state();
        let id = state.create(ObjectKind::Shader)?;
        state.stages.insert(id, stage);
        state.calls.push(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        let mut state = self.state();
        let failing = state
            .stages
            .get(&shader)
            .is_some_and(|stage| state.failing_stages.contains(stage));
        state.compiled.insert(shader, !failing);
        state.calls.push(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state().compiled.get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0(1) : error C0000: syntax error\n".to_string()
        }
    }

    fn delete_shader(&self, shader: u32) {
        let mut state = self.state();
        state.delete(ObjectKind::Shader, shader);
        state.calls.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut state = self.state();
        let id = state.create(ObjectKind::Program)?;
        state.calls.push(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state();
        state.attached.entry(program).or_default().push(shader);
        state.calls.push(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state();
        if let Some(attached) = state.attached.get_mut(&program) {
            attached.retain(|s| *s != shader);
        }
        state.calls.push(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let mut state = self.state();
        let shaders_ok = state.attached.get(&program).is_some_and(|shaders| {
            shaders
                .iter()
                .all(|s| state.compiled.get(s).copied().unwrap_or(false))
        });
        let linked = shaders_ok && !state.failing_link;
        state.linked.insert(program, linked);
        state.calls.push(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state().linked.get(&program).copied().unwrap_or(false)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled shader\n".to_string()
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        let mut state = self.state();
        state.delete(ObjectKind::Program, program);
        state.calls.push(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut state = self.state();
        let id = state.create(ObjectKind::VertexArray)?;
        state.calls.push(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut state = self.state();
        state.delete(ObjectKind::VertexArray, vertex_array);
        state.calls.push(Call::DeleteVertexArray(vertex_array));
    }

    fn create_texture(&self) -> Result<u32, String> {
        let mut state = self.state();
        let id = state.create(ObjectKind::Texture)?;
        state.calls.push(Call::CreateTexture(id));
        Ok(id)
    }

    fn bind_texture_2d(&self, texture: Option<u32>) {
        self.record(Call::BindTexture2d(texture));
    }

    fn tex_storage_2d(&self, levels: u32, width: u32, height: u32) {
        self.record(Call::TexStorage2d {
            levels,
            width,
            height,
        });
    }

    fn tex_sub_image_2d(&self, level: u32, width: u32, height: u32, texels: &[f32]) {
        let mut state = self.state();
        state.uploads.push(texels.to_vec());
        state.calls.push(Call::TexSubImage2d {
            level,
            width,
            height,
        });
    }

    fn delete_texture(&self, texture: u32) {
        let mut state = self.state();
        state.delete(ObjectKind::Texture, texture);
        state.calls.push(Call::DeleteTexture(texture));
    }

    fn clear_color_buffer(&self, color: Vec4) {
        self.record(Call::ClearColor(color));
    }

    fn vertex_attrib_4(&self, index: u32, value: Vec4) {
        self.record(Call::VertexAttrib(index, value));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles(first, count));
    }

    fn context_info(&self) -> ContextInfo {
        ContextInfo {
            vendor: "Recorder".to_string(),
            renderer: "RecordingGl".to_string(),
            version: "4.3.0 Core".to_string(),
        }
    }

    fn insert_debug_marker(&self, id: u32, message: &str) {
        self.record(Call::DebugMarker(id, message.to_string()));
    }
}
