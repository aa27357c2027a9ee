//! Compiles a GLSL ES vertex/fragment shader pair, links it with fixed
//! attribute slots, and draws a color-interpolated quad masked to a disc.

mod app;
mod config;
mod error;
pub(crate) mod gl;
mod logging;
mod program;
pub mod quad;
mod renderer;
mod shader;
mod window;

pub use {
    app::{run, FAILURE_EXIT_CODE},
    config::AppConfig,
    error::{Error, Result},
    logging::init_logging,
    program::{COLOR_SLOT, POSITION_SLOT},
    renderer::{AppEvent, LoopState},
    shader::{ShaderKind, FRAGMENT_SOURCE, VERTEX_SOURCE},
    window::centered_position,
};
