use crate::{
    config::AppConfig,
    error::{Error, Result},
    renderer::{AppEvent, LoopState},
    window::{GlWindow, RenderWindow},
};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopWindowTarget},
};

/// Exit status for setup and rendering failures.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Opens the window and renders until it is closed or the process receives
/// SIGINT/SIGTERM, then exits with status 0, or with [`FAILURE_EXIT_CODE`] if
/// setup failed.
pub fn run(config: AppConfig) -> ! {
    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();
    forward_termination_signals(&event_loop);
    let mut runtime = Runtime::<GlWindow>::new(config);

    event_loop.run(move |event, window_target, control_flow| {
        runtime.handle_event(event, window_target, control_flow)
    })
}

/// Turns SIGINT/SIGTERM into an [`AppEvent`] so the loop can tear down in
/// order instead of dying in the default signal handler.
fn forward_termination_signals(event_loop: &EventLoop<AppEvent>) {
    let proxy = event_loop.create_proxy();
    let installed = ctrlc::set_handler(move || {
        // Fails only once the loop is gone, when there is nothing to stop.
        let _ = proxy.send_event(AppEvent::TerminationSignal);
    });
    if let Err(err) = installed {
        log::warn!("Error setting termination signal handler: {err}");
    }
}

struct Runtime<W> {
    config: AppConfig,
    state: LoopState,
    window: Option<W>,
    frames: u64,
}
impl<W: RenderWindow> Runtime<W> {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: LoopState::Running,
            window: None,
            frames: 0,
        }
    }

    fn install_window(&mut self, created: Result<W>, control_flow: &mut ControlFlow) {
        match created {
            Ok(window) => self.window = Some(window),
            Err(err) => self.fail(err, control_flow),
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent<'_>, control_flow: &mut ControlFlow) {
        let state = self.state.on_window_event(event);
        self.transition(state, control_flow);
    }

    fn handle_app_event(&mut self, event: AppEvent, control_flow: &mut ControlFlow) {
        log::info!("received {event:?}");
        let state = self.state.on_app_event(event);
        self.transition(state, control_flow);
    }

    fn transition(&mut self, state: LoopState, control_flow: &mut ControlFlow) {
        if self.state.is_running() && !state.is_running() {
            log::info!("quit requested");
            control_flow.set_exit();
        }
        self.state = state;
    }

    fn redraw(&mut self, control_flow: &mut ControlFlow) {
        if !self.state.is_running() {
            return;
        }
        let Some(window) = &self.window else {
            return;
        };
        match window.draw() {
            Ok(()) => self.frames += 1,
            Err(err) => self.fail(err, control_flow),
        }
    }

    fn fail(&mut self, err: Error, control_flow: &mut ControlFlow) {
        log::error!("{err}");
        self.state = LoopState::Terminated;
        control_flow.set_exit_with_code(FAILURE_EXIT_CODE);
    }

    fn teardown(&mut self) {
        if let Some(window) = self.window.take() {
            window.teardown();
        }
        log::info!("rendered {} frames", self.frames);
    }
}
impl Runtime<GlWindow> {
    fn handle_event(
        &mut self,
        event: Event<'_, AppEvent>,
        window_target: &EventLoopWindowTarget<AppEvent>,
        control_flow: &mut ControlFlow,
    ) {
        if self.state.is_running() {
            // No frame pacing: render again as soon as events are drained.
            control_flow.set_poll();
        }

        match event {
            Event::Resumed => {
                if self.window.is_none() && self.state.is_running() {
                    let created = GlWindow::create(window_target, &self.config);
                    self.install_window(created, control_flow);
                }
            }
            Event::WindowEvent { event, .. } => self.handle_window_event(&event, control_flow),
            Event::UserEvent(event) => self.handle_app_event(event, control_flow),
            Event::RedrawEventsCleared => self.redraw(control_flow),
            Event::LoopDestroyed => self.teardown(),
            _ => (),
        }
    }
}
