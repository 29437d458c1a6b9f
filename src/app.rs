//! The frame loop: window and context ownership, event dispatch, teardown.

use std::time::Instant;

use color_eyre::{eyre::eyre, Result};
use glutin::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
    ContextBuilder, PossiblyCurrent, WindowedContext,
};
use tracing::{debug, info};

use crate::renderer::api::GlApi;
use crate::scene::Scene;
use crate::CLEAR_COLOR;

/// One demo application: a window, its GL context, and the scene being
/// driven by the loop.
///
/// Lifecycle is created → loaded → running → closed. The scene's GPU
/// resources are built once during [`App::create`] (the earliest point at
/// which the context is current) and released when the loop winds down. A
/// load failure aborts the whole demo; there is no degraded mode.
pub struct App<S> {
    context: WindowedContext<PossiblyCurrent>,
    gl: glow::Context,
    scene: S,

    /// The time the previous frame was rendered at, for delta-time-driven
    /// animation. Frame pacing itself is the windowing layer's business
    /// (vsync); we only measure it.
    last_frame: Instant,
}

impl<S> App<S>
where
    S: Scene<glow::Context> + 'static,
{
    /// Open a window of the given size, bring up a vsync'd GL context on
    /// it, and load the scene.
    #[tracing::instrument(level = "DEBUG", skip(event_loop, scene))]
    pub fn create(
        title: &str,
        width: u32,
        height: u32,
        event_loop: &EventLoop<()>,
        mut scene: S,
    ) -> Result<Self> {
        debug!("Creating window and GL context");
        let window_builder = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height));
        let context = ContextBuilder::new()
            .with_vsync(true)
            .build_windowed(window_builder, event_loop)?;
        let context = unsafe { context.make_current() }
            .map_err(|(_, e)| eyre!("Failed to make GL context current: {e}"))?;

        debug!("Loading GL function pointers");
        let gl =
            unsafe { glow::Context::from_loader_function(|name| context.get_proc_address(name)) };
        gl.set_clear_color(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2], CLEAR_COLOR[3]);

        info!("Loading scene");
        scene.load(&gl)?;

        Ok(Self {
            context,
            gl,
            scene,
            last_frame: Instant::now(),
        })
    }

    /// Run the event loop until the window is closed or Escape is pressed.
    ///
    /// Never returns. The scene is unloaded (releasing all its GPU
    /// resources) as the loop winds down.
    pub fn run(mut self, event_loop: EventLoop<()>) -> ! {
        info!("Running event loop");
        event_loop.run(move |event, _, control_flow| {
            // Hot loop: poll continuously, let vsync do the pacing.
            *control_flow = ControlFlow::Poll;

            match event {
                Event::MainEventsCleared => self.context.window().request_redraw(),

                Event::RedrawRequested(_) => self.draw_frame(),

                Event::WindowEvent { event, .. } => match event {
                    // The viewport follows the window; nothing else is
                    // rebuilt on resize.
                    WindowEvent::Resized(size) => {
                        self.context.resize(size);
                        self.scene.resize(&self.gl, size.width, size.height);
                    }

                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    }
                    | WindowEvent::CloseRequested => {
                        info!("Close requested");
                        *control_flow = ControlFlow::Exit;
                    }

                    _ => {}
                },

                Event::LoopDestroyed => {
                    info!("Releasing GPU resources");
                    self.scene.unload(&self.gl);
                    info!("Goodbye.");
                }

                _ => {}
            }
        })
    }

    fn draw_frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.gl.clear();
        self.scene.render(&self.gl, dt);
        self.context.swap_buffers().unwrap();
    }
}

/// Install color-eyre and a hierarchical tracing subscriber. Every demo
/// binary calls this first.
pub fn setup_logging() -> Result<()> {
    use tracing_subscriber::{prelude::*, EnvFilter};
    use tracing_tree::HierarchicalLayer;

    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(HierarchicalLayer::new(4).with_bracketed_fields(true))
        .with(EnvFilter::from_default_env())
        .try_init()?;

    Ok(())
}
