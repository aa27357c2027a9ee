use crate::{
    error::{Error, Result},
    gl::{types::GLuint, GlCommands},
    shader::{compile_shader, driver_log, ShaderKind},
};
use std::ffi::CStr;

/// Attribute slot the `position` stream is bound to.
pub const POSITION_SLOT: GLuint = 0;
/// Attribute slot the `color` stream is bound to.
pub const COLOR_SLOT: GLuint = 1;

const ATTRIBUTES: [(GLuint, &CStr); 2] = [(POSITION_SLOT, c"position"), (COLOR_SLOT, c"color")];

const RESOLUTION_UNIFORM: &CStr = c"u_resolution";

/// The linked shader program, plus the shaders attached to it.
#[derive(Debug)]
pub(crate) struct Program {
    id: GLuint,
    shaders: [GLuint; 2],
}

impl Program {
    /// Compiles both shaders, links them and makes the program current with
    /// `resolution` written to `u_resolution`.
    pub(crate) fn new<G: GlCommands>(gl: &G, resolution: [f32; 2]) -> Result<Self> {
        let vertex = compile_shader(gl, ShaderKind::Vertex, ShaderKind::Vertex.source())?;
        let fragment = match compile_shader(gl, ShaderKind::Fragment, ShaderKind::Fragment.source())
        {
            Ok(fragment) => fragment,
            Err(err) => {
                gl.delete_shader(vertex);
                return Err(err);
            }
        };

        let id = gl.create_program();
        let program = Self {
            id,
            shaders: [vertex, fragment],
        };
        for shader in program.shaders {
            gl.attach_shader(id, shader);
        }

        if let Err(err) = program.link(gl) {
            program.delete(gl);
            return Err(err);
        }

        let location = gl.uniform_location(id, RESOLUTION_UNIFORM);
        if location < 0 {
            log::error!("glGetUniformLocation() failed");
            program.delete(gl);
            return Err(Error::UniformNotFound("u_resolution"));
        }

        let [width, height] = resolution;
        gl.uniform_2f(location, width, height);

        log::info!("linked program {id} (u_resolution = {width}x{height})");
        Ok(program)
    }

    /// Links, activates, then re-links with the fixed attribute slots so the
    /// bindings take effect whatever order the attributes are declared in.
    fn link<G: GlCommands>(&self, gl: &G) -> Result<()> {
        gl.link_program(self.id);
        self.check_link(gl)?;
        gl.use_program(self.id);

        for (slot, name) in ATTRIBUTES {
            gl.bind_attrib_location(self.id, slot, name);
        }
        gl.link_program(self.id);
        self.check_link(gl)?;
        gl.use_program(self.id);

        Ok(())
    }

    fn check_link<G: GlCommands>(&self, gl: &G) -> Result<()> {
        if gl.program_link_status(self.id) {
            return Ok(());
        }

        let log = driver_log(gl.program_info_log_length(self.id), |length| {
            gl.program_info_log(self.id, length)
        });
        if let Some(log) = &log {
            log::error!("Error linking program:\n{log}");
        }
        Err(Error::ProgramLink { log })
    }

    /// Detaches and deletes the shaders, then the program.
    pub(crate) fn delete<G: GlCommands>(self, gl: &G) {
        for shader in self.shaders {
            gl.detach_shader(self.id, shader);
            gl.delete_shader(shader);
        }
        gl.delete_program(self.id);
        log::debug!("deleted program {}", self.id);
    }
}
