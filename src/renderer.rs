use crate::{
    config::AppConfig,
    error::Result,
    gl::GlCommands,
    program::{Program, COLOR_SLOT, POSITION_SLOT},
    quad::{COLORS, POSITIONS, VERTEX_COUNT},
};
use winit::event::WindowEvent;

/// Events the demo posts to its own event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// SIGINT or SIGTERM arrived.
    TerminationSignal,
}

/// Whether the render loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminated,
}

impl LoopState {
    /// A close request ends the loop; nothing brings it back.
    pub fn on_window_event(self, event: &WindowEvent<'_>) -> Self {
        match (self, event) {
            (LoopState::Running, WindowEvent::CloseRequested) => LoopState::Terminated,
            (state, _) => state,
        }
    }

    /// A termination signal quits the same way a close request does.
    pub fn on_app_event(self, event: AppEvent) -> Self {
        match event {
            AppEvent::TerminationSignal => LoopState::Terminated,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// Draws the masked quad with the single program it owns.
pub(crate) struct Renderer<G: GlCommands> {
    program: Option<Program>,
    clear_color: [f32; 4],
    gl: G,
}

impl<G: GlCommands> Renderer<G> {
    pub(crate) fn new(gl: G, config: &AppConfig) -> Result<Self> {
        gl.viewport(config.size.width as i32, config.size.height as i32);
        let program = Program::new(&gl, config.resolution())?;

        Ok(Self {
            program: Some(program),
            clear_color: config.clear_color,
            gl,
        })
    }

    /// Records one frame. Presenting it is up to the caller.
    pub(crate) fn draw(&self) {
        let gl = &self.gl;

        gl.clear_color(self.clear_color);
        gl.clear_color_buffer();

        gl.vertex_attrib_floats(POSITION_SLOT, &POSITIONS);
        gl.vertex_attrib_floats(COLOR_SLOT, &COLORS);
        gl.enable_vertex_attrib_array(POSITION_SLOT);
        gl.enable_vertex_attrib_array(COLOR_SLOT);

        gl.draw_triangles(0, VERTEX_COUNT as i32);

        gl.disable_vertex_attrib_array(POSITION_SLOT);
        gl.disable_vertex_attrib_array(COLOR_SLOT);
    }
}

impl<G: GlCommands> Drop for Renderer<G> {
    fn drop(&mut self) {
        if let Some(program) = self.program.take() {
            program.delete(&self.gl);
        }
    }
}
