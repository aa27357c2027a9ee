use crate::shader::ShaderKind;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop the demo before or during setup.
///
/// None of these are recoverable; the event loop logs the error and exits
/// with a failure status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create {0} shader object")]
    ShaderCreation(ShaderKind),

    #[error("failed to compile {kind} shader")]
    ShaderCompilation {
        kind: ShaderKind,
        /// Driver info log, if it reported one longer than a single character.
        log: Option<String>,
    },

    #[error("failed to link shader program")]
    ProgramLink { log: Option<String> },

    #[error("uniform `{0}` not found in linked program")]
    UniformNotFound(&'static str),

    #[error("no usable GL display configuration: {0}")]
    Display(#[source] Box<dyn std::error::Error>),

    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}
