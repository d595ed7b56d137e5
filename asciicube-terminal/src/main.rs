/// asciicube - Rotating ASCII Cube
///
/// Renders a spinning cube with a depth-buffered software rasterizer.
/// Controls:
///   - 1: Quit
///   - Ctrl+C: Quit

use anyhow::Result;
use asciicube_core::{AnimationConfig, RenderConfig};

fn main() -> Result<()> {
    env_logger::init();

    let render_config = RenderConfig::default();
    let animation = AnimationConfig::default();
    log::info!(
        "starting {}x{} cube (press {} to quit)",
        render_config.width,
        render_config.height,
        animation.exit_key
    );

    asciicube_terminal::run_terminal(render_config, animation)
}
