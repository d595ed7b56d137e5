/// asciicube core library - rotation, projection and depth-tested rasterization
///
/// This library holds the whole rendering pipeline for the spinning ASCII
/// cube: the closed-form Euler rotation, perspective projection onto a
/// character grid, the char/depth buffer store and the cube surface sampler.
/// Terminal I/O lives in `asciicube-terminal`.

pub mod buffer;
pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod renderer;
pub mod transform;

// Re-export commonly used types
pub use buffer::BufferStore;
pub use config::{AnimationConfig, RenderConfig};
pub use error::RenderError;
pub use geometry::{Cube, Face, Point3D};
pub use projection::{Camera, ScreenSample};
pub use renderer::CubeRenderer;
pub use transform::{RotationState, Transform};
