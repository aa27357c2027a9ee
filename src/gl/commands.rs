use super::{
    bindings as gl,
    types::{GLchar, GLenum, GLint, GLsizei, GLuint},
    Gl,
};
use std::ffi::CStr;

/// The GL entry points the demo needs.
///
/// Every method assumes the context that loaded the implementation is current
/// on the calling thread.
pub(crate) trait GlCommands {
    fn create_shader(&self, kind: GLenum) -> GLuint;
    fn shader_source(&self, shader: GLuint, source: &CStr);
    fn compile_shader(&self, shader: GLuint);
    fn shader_compile_status(&self, shader: GLuint) -> bool;
    /// Length of the shader info log including the trailing NUL.
    fn shader_info_log_length(&self, shader: GLuint) -> GLint;
    fn shader_info_log(&self, shader: GLuint, length: GLint) -> String;
    fn delete_shader(&self, shader: GLuint);

    fn create_program(&self) -> GLuint;
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn detach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint);
    fn program_link_status(&self, program: GLuint) -> bool;
    fn program_info_log_length(&self, program: GLuint) -> GLint;
    fn program_info_log(&self, program: GLuint, length: GLint) -> String;
    fn use_program(&self, program: GLuint);
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr);
    fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint;
    fn uniform_2f(&self, location: GLint, x: f32, y: f32);
    fn delete_program(&self, program: GLuint);

    fn viewport(&self, width: GLsizei, height: GLsizei);
    fn clear_color(&self, color: [f32; 4]);
    fn clear_color_buffer(&self);
    /// Points `index` at a tightly packed client-side array of `N`-float
    /// vertices.
    fn vertex_attrib_floats<const N: usize>(&self, index: GLuint, data: &'static [[f32; N]]);
    fn enable_vertex_attrib_array(&self, index: GLuint);
    fn disable_vertex_attrib_array(&self, index: GLuint);
    fn draw_triangles(&self, first: GLint, count: GLsizei);
}

fn read_info_log(
    length: GLint,
    read: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    let mut buffer = vec![0u8; length.max(1) as usize];
    let mut written: GLsizei = 0;
    read(buffer.len() as GLsizei, &mut written, buffer.as_mut_ptr().cast());
    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}

impl GlCommands for Gl {
    fn create_shader(&self, kind: GLenum) -> GLuint {
        unsafe { self.CreateShader(kind) }
    }
    fn shader_source(&self, shader: GLuint, source: &CStr) {
        let sources = [source.as_ptr()];
        unsafe { self.ShaderSource(shader, 1, sources.as_ptr(), std::ptr::null()) }
    }
    fn compile_shader(&self, shader: GLuint) {
        unsafe { self.CompileShader(shader) }
    }
    fn shader_compile_status(&self, shader: GLuint) -> bool {
        let mut status = 0;
        unsafe { self.GetShaderiv(shader, gl::COMPILE_STATUS, &mut status) };
        status != 0
    }
    fn shader_info_log_length(&self, shader: GLuint) -> GLint {
        let mut length = 0;
        unsafe { self.GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut length) };
        length
    }
    fn shader_info_log(&self, shader: GLuint, length: GLint) -> String {
        read_info_log(length, |size, written, log| unsafe {
            self.GetShaderInfoLog(shader, size, written, log)
        })
    }
    fn delete_shader(&self, shader: GLuint) {
        unsafe { self.DeleteShader(shader) }
    }

    fn create_program(&self) -> GLuint {
        unsafe { self.CreateProgram() }
    }
    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.AttachShader(program, shader) }
    }
    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.DetachShader(program, shader) }
    }
    fn link_program(&self, program: GLuint) {
        unsafe { self.LinkProgram(program) }
    }
    fn program_link_status(&self, program: GLuint) -> bool {
        let mut status = 0;
        unsafe { self.GetProgramiv(program, gl::LINK_STATUS, &mut status) };
        status != 0
    }
    fn program_info_log_length(&self, program: GLuint) -> GLint {
        let mut length = 0;
        unsafe { self.GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut length) };
        length
    }
    fn program_info_log(&self, program: GLuint, length: GLint) -> String {
        read_info_log(length, |size, written, log| unsafe {
            self.GetProgramInfoLog(program, size, written, log)
        })
    }
    fn use_program(&self, program: GLuint) {
        unsafe { self.UseProgram(program) }
    }
    fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr) {
        unsafe { self.BindAttribLocation(program, index, name.as_ptr()) }
    }
    fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { self.GetUniformLocation(program, name.as_ptr()) }
    }
    fn uniform_2f(&self, location: GLint, x: f32, y: f32) {
        unsafe { self.Uniform2f(location, x, y) }
    }
    fn delete_program(&self, program: GLuint) {
        unsafe { self.DeleteProgram(program) }
    }

    fn viewport(&self, width: GLsizei, height: GLsizei) {
        unsafe { self.Viewport(0, 0, width, height) }
    }
    fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        unsafe { self.ClearColor(r, g, b, a) }
    }
    fn clear_color_buffer(&self) {
        unsafe { self.Clear(gl::COLOR_BUFFER_BIT) }
    }
    fn vertex_attrib_floats<const N: usize>(&self, index: GLuint, data: &'static [[f32; N]]) {
        // No buffer object is bound, so the pointer is read as client memory
        // at draw time. The 'static bound keeps it valid until then.
        unsafe {
            self.VertexAttribPointer(
                index,
                N as GLint,
                gl::FLOAT,
                gl::FALSE,
                0,
                data.as_ptr().cast(),
            )
        }
    }
    fn enable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { self.EnableVertexAttribArray(index) }
    }
    fn disable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { self.DisableVertexAttribArray(index) }
    }
    fn draw_triangles(&self, first: GLint, count: GLsizei) {
        unsafe { self.DrawArrays(gl::TRIANGLES, first, count) }
    }
}
