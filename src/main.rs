use std::sync::Arc;

use anyhow::{Context, Result};
use arcball::cli::Cli;
use arcball::clock::{control_flow, FixedStep};
use arcball::input::PointerInput;
use arcball::math::axis_angle;
use arcball::replay::{load_script, run_script};
use arcball::{Trackball, TrackballConfig};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Arcball";

struct App {
    window: Option<Arc<Window>>,
    trackball: Trackball,
    input: PointerInput,
    spin_steps: FixedStep,
    initial_size: (u32, u32),
}

impl App {
    fn new(cli: &Cli) -> Self {
        let viewport = cli.viewport();
        Self {
            window: None,
            trackball: Trackball::new(viewport, cli.apply_to(TrackballConfig::default())),
            input: PointerInput::new(),
            spin_steps: FixedStep::default(),
            initial_size: (viewport.width, viewport.height),
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            let (axis, angle) = axis_angle(self.trackball.rotation());
            window.set_title(&format!(
                "{} - axis ({:.2}, {:.2}, {:.2}) angle {:.1}°{}",
                WINDOW_TITLE,
                axis.x,
                axis.y,
                axis.z,
                angle.to_degrees(),
                if self.trackball.is_spinning() { " [spinning]" } else { "" }
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.initial_size;
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::PhysicalSize::new(width, height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.trackball.resize(size.width, size.height);
            self.window = Some(window);
            self.spin_steps.reset();
            self.update_title();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.input.process_event(&mut self.trackball, &event) {
            self.update_title();
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        ..
                    },
                ..
            } => {
                self.trackball.reset();
                self.update_title();
            }
            WindowEvent::RedrawRequested => {
                let mut changed = false;
                for _ in 0..self.spin_steps.tick() {
                    changed |= self.trackball.tick();
                }

                if changed {
                    log::trace!("Rotation matrix: {:?}", self.trackball.matrix());
                    self.update_title();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let spinning = self.trackball.is_spinning();
        if !spinning {
            self.spin_steps.reset();
        }
        event_loop.set_control_flow(control_flow(spinning, &self.spin_steps));

        if spinning && self.spin_steps.is_due() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

fn replay(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.replay else {
        return Ok(());
    };

    let mut script = load_script(path)?;
    script.config = cli.apply_to(script.config);

    let report = run_script(&script);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.replay.is_some() {
        return replay(&cli);
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(&cli);

    println!("Arcball - Controls: drag with left mouse, R to reset, Escape to quit");
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    Ok(())
}
