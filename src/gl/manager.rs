use super::Gl;
use crate::{config::AppConfig, error::Error};

use glutin::{
    config::{Config, ConfigTemplateBuilder},
    context::{ContextApi, ContextAttributesBuilder, NotCurrentContext, Version},
    display::{Display, GetGlDisplay},
    prelude::*,
};
use glutin_winit::DisplayBuilder;
use raw_window_handle::RawWindowHandle;
use std::ffi::CString;
use winit::{
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder},
};

/// The GL display and the framebuffer config picked for it.
pub(crate) struct GlDisplayState {
    pub(crate) gl_config: Config,
    pub(crate) gl_display: Display,
}
impl GlDisplayState {
    pub(crate) fn create_with_winit_window<T>(
        window_target: &EventLoopWindowTarget<T>,
        window_builder: WindowBuilder,
        config: &AppConfig,
    ) -> Result<(Self, Option<Window>), Error> {
        // The template will match only the configurations supporting rendering to
        // windows. Double buffering is the default.
        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(config.depth_bits)
            .with_transparency(cfg!(cgl_backend));

        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(window_target, template, |configs| {
                // glutin only calls the picker with at least one config.
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .unwrap()
            })
            .map_err(Error::Display)?;

        log::info!(
            "picked a config with {} samples and {} depth bits",
            gl_config.num_samples(),
            gl_config.depth_size()
        );

        // XXX The display could be obtained from the any object created by it, so we
        // can query it from the config.
        let gl_display = gl_config.display();

        Ok((
            Self {
                gl_config,
                gl_display,
            },
            window,
        ))
    }

    /// Prefers an OpenGL ES 2.0 context, then a desktop OpenGL 2.1 one. Both
    /// accept client-side vertex arrays and GLSL without a version directive.
    pub(crate) fn try_create_context(
        &self,
        raw_window_handle: RawWindowHandle,
    ) -> glutin::error::Result<NotCurrentContext> {
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(2, 0))))
            .build(Some(raw_window_handle));

        let legacy_context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(2, 1))))
            .build(Some(raw_window_handle));

        unsafe {
            self.gl_display
                .create_context(&self.gl_config, &context_attributes)
                .or_else(|err| {
                    log::warn!("no GLES 2.0 context ({err}), trying OpenGL 2.1");
                    self.gl_display
                        .create_context(&self.gl_config, &legacy_context_attributes)
                })
        }
    }

    /// Loads the GL function table. Must be called with a current context on
    /// WGL.
    pub(crate) fn load_gl(&self) -> Gl {
        Gl::load_with(|symbol| {
            let symbol = CString::new(symbol).unwrap();
            self.gl_display.get_proc_address(symbol.as_c_str()).cast()
        })
    }
}
