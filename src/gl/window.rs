use glutin::{
    config::Config,
    context::{NotCurrentContext, PossiblyCurrentContext},
    display::GetGlDisplay,
    prelude::*,
    surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use raw_window_handle::RawWindowHandle;
use std::num::NonZeroU32;

/// A window surface with the context made current on it.
pub(crate) struct GlWindowRenderer {
    gl_context: Option<PossiblyCurrentContext>,
    // XXX the surface must be dropped before the window.
    surface: Surface<WindowSurface>,
}

impl GlWindowRenderer {
    pub(crate) fn new(
        raw_window_handle: RawWindowHandle,
        not_current_gl_context: NotCurrentContext,
        width: NonZeroU32,
        height: NonZeroU32,
        config: &Config,
    ) -> glutin::error::Result<Self> {
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            width,
            height,
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };
        // Make it current.
        let gl_context = not_current_gl_context.make_current(&surface)?;

        Ok(Self {
            surface,
            gl_context: Some(gl_context),
        })
    }
    fn gl_context(&self) -> Option<&PossiblyCurrentContext> {
        self.gl_context.as_ref()
    }
    /// Swap interval 0 unless `vsync` is set. Failure only costs pacing, so it
    /// is logged and ignored.
    pub(crate) fn set_vsync(&self, vsync: bool) {
        let Some(gl_context) = self.gl_context() else {
            return;
        };
        let interval = if vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(err) = self.surface.set_swap_interval(gl_context, interval) {
            log::warn!("Error setting swap interval {interval:?}: {err}");
        }
    }
    pub(crate) fn swap_buffers(&self) -> glutin::error::Result<()> {
        match self.gl_context() {
            Some(gl_context) => self.surface.swap_buffers(gl_context),
            None => Ok(()),
        }
    }
}
impl Drop for GlWindowRenderer {
    fn drop(&mut self) {
        if let Some(gl_context) = self.gl_context.take() {
            if let Err(err) = gl_context.make_not_current() {
                log::warn!("failed to release GL context: {err}");
            }
        }
    }
}
