use super::{
    types::{GLenum, GLint, GLsizei, GLuint},
    GlCommands,
};
use std::{
    cell::{Cell, RefCell},
    ffi::CStr,
    rc::Rc,
};

/// A GL call as seen by [`RecordingGl`]. Status and log queries are not
/// recorded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(GLenum),
    ShaderSource(GLuint, String),
    CompileShader(GLuint),
    DeleteShader(GLuint),
    CreateProgram,
    AttachShader(GLuint, GLuint),
    DetachShader(GLuint, GLuint),
    LinkProgram(GLuint),
    UseProgram(GLuint),
    BindAttribLocation(GLuint, GLuint, String),
    UniformLocation(GLuint, String),
    Uniform2f(GLint, f32, f32),
    DeleteProgram(GLuint),
    Viewport(GLsizei, GLsizei),
    ClearColor([f32; 4]),
    Clear,
    VertexAttribPointer {
        index: GLuint,
        components: usize,
        vertices: usize,
    },
    EnableVertexAttribArray(GLuint),
    DisableVertexAttribArray(GLuint),
    DrawTriangles(GLint, GLsizei),
}

/// Fake GL that hands out sequential object names and records every call.
pub(crate) struct RecordingGl {
    /// Shared so tests can still inspect calls after the fake is moved or
    /// dropped.
    pub(crate) calls: Rc<RefCell<Vec<Call>>>,
    next_name: Cell<GLuint>,
    pub(crate) fail_create_shader: bool,
    pub(crate) fail_compile: bool,
    pub(crate) fail_link: bool,
    /// Info log reported for any shader or program; `None` means length 0.
    pub(crate) info_log: Option<String>,
    /// Uniform names that resolve to a location.
    pub(crate) uniforms: Vec<&'static str>,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        Self {
            calls: Rc::default(),
            next_name: Cell::new(1),
            fail_create_shader: false,
            fail_compile: false,
            fail_link: false,
            info_log: None,
            uniforms: vec!["u_resolution"],
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_name(&self) -> GLuint {
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        name
    }

    fn info_log_length(&self) -> GLint {
        self.info_log
            .as_ref()
            .map_or(0, |log| log.len() as GLint + 1)
    }

    fn info_log_text(&self, length: GLint) -> String {
        let log = self.info_log.clone().unwrap_or_default();
        log.chars().take((length - 1).max(0) as usize).collect()
    }
}

fn lossy(text: &CStr) -> String {
    text.to_string_lossy().into_owned()
}

impl GlCommands for RecordingGl {
    fn create_shader(&self, kind: GLenum) -> GLuint {
        self.record(Call::CreateShader(kind));
        if self.fail_create_shader {
            0
        } else {
            self.next_name()
        }
    }
    fn shader_source(&self, shader: GLuint, source: &CStr) {
        self.record(Call::ShaderSource(shader, lossy(source)));
    }
    fn compile_shader(&self, shader: GLuint) {
        self.record(Call::CompileShader(shader));
    }
    fn shader_compile_status(&self, _shader: GLuint) -> bool {
        !self.fail_compile
    }
    fn shader_info_log_length(&self, _shader: GLuint) -> GLint {
        self.info_log_length()
    }
    fn shader_info_log(&self, _shader: GLuint, length: GLint) -> String {
        self.info_log_text(length)
    }
    fn delete_shader(&self, shader: GLuint) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> GLuint {
        self.record(Call::CreateProgram);
        self.next_name()
    }
    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(Call::AttachShader(program, shader));
    }
    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(Call::DetachShader(program, shader));
    }
    fn link_program(&self, program: GLuint) {
        self.record(Call::LinkProgram(program));
    }
    fn program_link_status(&self, _program: GLuint) -> bool {
        !self.fail_link
    }
    fn program_info_log_length(&self, _program: GLuint) -> GLint {
        self.info_log_length()
    }
    fn program_info_log(&self, _program: GLuint, length: GLint) -> String {
        self.info_log_text(length)
    }
    fn use_program(&self, program: GLuint) {
        self.record(Call::UseProgram(program));
    }
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr) {
        self.record(Call::BindAttribLocation(program, index, lossy(name)));
    }
    fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
        let name = lossy(name);
        let location = self
            .uniforms
            .iter()
            .position(|uniform| *uniform == name)
            .map_or(-1, |index| index as GLint);
        self.record(Call::UniformLocation(program, name));
        location
    }
    fn uniform_2f(&self, location: GLint, x: f32, y: f32) {
        self.record(Call::Uniform2f(location, x, y));
    }
    fn delete_program(&self, program: GLuint) {
        self.record(Call::DeleteProgram(program));
    }

    fn viewport(&self, width: GLsizei, height: GLsizei) {
        self.record(Call::Viewport(width, height));
    }
    fn clear_color(&self, color: [f32; 4]) {
        self.record(Call::ClearColor(color));
    }
    fn clear_color_buffer(&self) {
        self.record(Call::Clear);
    }
    fn vertex_attrib_floats<const N: usize>(&self, index: GLuint, data: &'static [[f32; N]]) {
        self.record(Call::VertexAttribPointer {
            index,
            components: N,
            vertices: data.len(),
        });
    }
    fn enable_vertex_attrib_array(&self, index: GLuint) {
        self.record(Call::EnableVertexAttribArray(index));
    }
    fn disable_vertex_attrib_array(&self, index: GLuint) {
        self.record(Call::DisableVertexAttribArray(index));
    }
    fn draw_triangles(&self, first: GLint, count: GLsizei) {
        self.record(Call::DrawTriangles(first, count));
    }
}
