use crate::{
    error::{Error, Result},
    gl::{bindings as gl, types::GLuint, GlCommands},
};
use std::{ffi::CStr, fmt};

/// Passes the vertex color through and uses `position.xy` as clip space.
pub const VERTEX_SOURCE: &CStr = c"attribute vec4 position;
attribute vec4 color;
varying vec4 v_color;
void main()
{
    v_color = color;
    gl_Position = vec4(position.xyz, 1.0);
}
";

/// Keeps the interpolated color inside a disc of radius 0.2 around the window
/// center and zeroes it elsewhere.
pub const FRAGMENT_SOURCE: &CStr = c"#ifdef GL_ES
precision mediump float;
#endif
varying vec4 v_color;
uniform vec2 u_resolution;

float draw_circle(vec2 coord, float radius) {
    return step(length(coord), radius);
}

void main() {
    vec2 coord = gl_FragCoord.xy / u_resolution;
    vec2 offset = vec2(0.5, 0.5);
    float circle = draw_circle(coord - offset, 0.2);
    vec4 xcolor = circle * v_color;

    gl_FragColor = vec4(xcolor);
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub(crate) fn gl_enum(self) -> gl::types::GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn source(self) -> &'static CStr {
        match self {
            ShaderKind::Vertex => VERTEX_SOURCE,
            ShaderKind::Fragment => FRAGMENT_SOURCE,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        })
    }
}

/// Reads an info log through `length`/`read`, but only when the driver
/// reports more than the terminating NUL.
pub(crate) fn driver_log(length: i32, read: impl FnOnce(i32) -> String) -> Option<String> {
    (length > 1).then(|| read(length))
}

/// Compiles one shader object.
///
/// On failure the shader object is deleted before returning, and the driver's
/// log (when there is one) is written to the error log.
pub(crate) fn compile_shader<G: GlCommands>(
    gl: &G,
    kind: ShaderKind,
    source: &CStr,
) -> Result<GLuint> {
    let shader = gl.create_shader(kind.gl_enum());
    if shader == 0 {
        return Err(Error::ShaderCreation(kind));
    }

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let log = driver_log(gl.shader_info_log_length(shader), |length| {
            gl.shader_info_log(shader, length)
        });
        if let Some(log) = &log {
            log::error!("Error compiling shader:\n{log}");
        }
        gl.delete_shader(shader);
        return Err(Error::ShaderCompilation { kind, log });
    }

    log::debug!("compiled {kind} shader {shader}");
    Ok(shader)
}
