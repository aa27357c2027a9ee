use crate::{
    config::AppConfig,
    error::Result,
    gl::{Gl, GlDisplayState, GlWindowRenderer},
    renderer::Renderer,
};
use raw_window_handle::HasRawWindowHandle;
use std::num::NonZeroU32;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::EventLoopWindowTarget,
    window::{Window as WinitWindow, WindowBuilder},
};

/// Top-left corner that centers a window of `window_size` on a monitor.
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (i64::from(monitor) - i64::from(window)) / 2;
    PhysicalPosition::new(
        (i64::from(monitor_position.x) + offset(monitor_size.width, window_size.width)) as i32,
        (i64::from(monitor_position.y) + offset(monitor_size.height, window_size.height)) as i32,
    )
}

fn window_builder<T>(window_target: &EventLoopWindowTarget<T>, config: &AppConfig) -> WindowBuilder {
    let builder = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(config.size)
        .with_resizable(false)
        .with_visible(false);

    match window_target.primary_monitor() {
        Some(monitor) => builder.with_position(centered_position(
            monitor.position(),
            monitor.size(),
            config.size,
        )),
        None => builder,
    }
}

/// What the event loop needs from a window once it exists.
pub(crate) trait RenderWindow {
    /// Draws and presents one frame.
    fn draw(&self) -> Result<()>;
    /// Releases everything the window owns, in dependency order.
    fn teardown(self);
}

/// The demo window: the OS window, its GL surface and context, and the
/// renderer drawing into it.
pub(crate) struct GlWindow {
    renderer: Renderer<Gl>,
    gl: GlWindowRenderer,
    window: WinitWindow,
}
impl GlWindow {
    pub(crate) fn create<T>(
        window_target: &EventLoopWindowTarget<T>,
        config: &AppConfig,
    ) -> Result<Self> {
        let builder = window_builder(window_target, config);
        let (gl_state, window) =
            GlDisplayState::create_with_winit_window(window_target, builder.clone(), config)?;
        let window = match window {
            Some(window) => window,
            None => glutin_winit::finalize_window(window_target, builder, &gl_state.gl_config)?,
        };

        let raw_window_handle = window.raw_window_handle();
        let not_current_gl_context = gl_state.try_create_context(raw_window_handle)?;

        let size = window.inner_size();
        let gl = GlWindowRenderer::new(
            raw_window_handle,
            not_current_gl_context,
            NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN),
            &gl_state.gl_config,
        )?;
        gl.set_vsync(config.vsync);

        // The context is current now, which function loading needs on WGL.
        let renderer = Renderer::new(gl_state.load_gl(), config)?;

        window.set_visible(true);
        log::info!("window ready ({}x{})", size.width, size.height);

        Ok(Self {
            renderer,
            gl,
            window,
        })
    }
}
impl RenderWindow for GlWindow {
    fn draw(&self) -> Result<()> {
        self.renderer.draw();
        self.gl.swap_buffers()?;
        Ok(())
    }

    /// Releases the program, then the context and surface, then the window.
    fn teardown(self) {
        let Self {
            renderer,
            gl,
            window,
        } = self;
        drop(renderer);
        log::debug!("program released");
        drop(gl);
        log::debug!("GL surface released");
        drop(window);
        log::debug!("window closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_on_monitor() {
        let position = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(600, 600),
        );
        assert_eq!(position, PhysicalPosition::new(660, 240));
    }

    #[test]
    fn centers_on_offset_monitor() {
        let position = centered_position(
            PhysicalPosition::new(1920, -200),
            PhysicalSize::new(1280, 1024),
            PhysicalSize::new(600, 600),
        );
        assert_eq!(position, PhysicalPosition::new(2260, 12));
    }

    #[test]
    fn window_larger_than_monitor() {
        let position = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(400, 400),
            PhysicalSize::new(600, 600),
        );
        assert_eq!(position, PhysicalPosition::new(-100, -100));
    }
}
