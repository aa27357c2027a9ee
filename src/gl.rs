pub(crate) mod bindings {
    #![allow(clippy::all)]
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}
pub(crate) mod commands;
pub(crate) mod manager;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod window;

pub(crate) use bindings::{types, Gles2 as Gl};
pub(crate) use commands::GlCommands;
pub(crate) use manager::GlDisplayState;
pub(crate) use window::GlWindowRenderer;
