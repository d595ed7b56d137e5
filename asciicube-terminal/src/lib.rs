/// Terminal front end for the spinning ASCII cube
use anyhow::{Context, Result};
use asciicube_core::{AnimationConfig, CubeRenderer, RenderConfig};
use log::{debug, info};
use std::io::{self, Write};

pub mod input;
pub mod renderer;

pub use input::{CrosstermInput, FramePacer, InputSource, RawModeGuard};
pub use renderer::AsciiDisplay;

/// Lifecycle of the animation driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Terminated,
}

/// Result of a single loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

/// Drives the clear -> draw -> flush -> poll -> advance -> sleep loop
pub struct CubeApp<W: Write, I: InputSource> {
    render_config: RenderConfig,
    renderer: Option<CubeRenderer>,
    display: AsciiDisplay<W>,
    input: I,
    pacer: FramePacer,
    state: DriverState,
    frame_count: u64,
}

impl<W: Write, I: InputSource> CubeApp<W, I> {
    pub fn new(
        render_config: RenderConfig,
        animation: AnimationConfig,
        out: W,
        input: I,
    ) -> Self {
        Self {
            render_config,
            renderer: None,
            display: AsciiDisplay::new(out),
            input,
            pacer: FramePacer::new(animation.frame_delay),
            state: DriverState::Uninitialized,
            frame_count: 0,
        }
    }

    /// Allocate buffers and take over the terminal.
    ///
    /// Buffers come first so a bad window size never touches the terminal.
    pub fn start(&mut self) -> Result<()> {
        if self.state != DriverState::Uninitialized {
            anyhow::bail!("driver already started ({:?})", self.state);
        }

        let renderer = match CubeRenderer::new(&self.render_config) {
            Ok(renderer) => renderer,
            Err(e) => {
                self.state = DriverState::Terminated;
                return Err(e).context("failed to initialize render buffers");
            }
        };
        self.renderer = Some(renderer);

        self.input.acquire_mode();
        if let Err(e) = self.display.begin() {
            self.shutdown();
            return Err(e).context("failed to prepare the terminal");
        }

        self.state = DriverState::Running;
        info!(
            "animation started at {}x{}",
            self.render_config.width, self.render_config.height
        );
        Ok(())
    }

    /// Run one frame. A failed clear aborts before anything is flushed.
    pub fn step(&mut self) -> Result<FrameOutcome> {
        if self.state != DriverState::Running {
            anyhow::bail!("driver is not running ({:?})", self.state);
        }
        let Some(renderer) = self.renderer.as_mut() else {
            anyhow::bail!("driver is running without buffers");
        };

        if let Err(e) = renderer.render_frame() {
            self.shutdown();
            return Err(e).context("failed to render frame");
        }
        if let Err(e) = self.display.present(renderer.store()) {
            self.shutdown();
            return Err(e).context("failed to write frame");
        }
        self.frame_count += 1;

        if self.input.poll_exit_requested() {
            debug!("exit key pressed after {} frames", self.frame_count);
            self.shutdown();
            return Ok(FrameOutcome::Exit);
        }

        renderer.advance();
        self.pacer.wait();
        Ok(FrameOutcome::Continue)
    }

    /// Start and loop until the exit key or an error terminates the driver
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        while self.step()? == FrameOutcome::Continue {}
        Ok(())
    }

    /// Restore the terminal and release buffers. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        if self.state == DriverState::Running {
            // Best effort; the terminal may already be gone
            let _ = self.display.finish();
        }
        self.input.release_mode();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.teardown();
        }
        self.renderer = None;
        self.state = DriverState::Terminated;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn renderer(&self) -> Option<&CubeRenderer> {
        self.renderer.as_ref()
    }

    pub fn display(&self) -> &AsciiDisplay<W> {
        &self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<W: Write, I: InputSource> Drop for CubeApp<W, I> {
    fn drop(&mut self) {
        if self.state != DriverState::Terminated {
            self.shutdown();
        }
    }
}

/// Run the animation on stdout with crossterm input
pub fn run_terminal(render_config: RenderConfig, animation: AnimationConfig) -> Result<()> {
    let stdout = io::stdout();
    let input = CrosstermInput::new(animation.exit_key);
    let mut app = CubeApp::new(render_config, animation, stdout.lock(), input);
    app.run()
}
