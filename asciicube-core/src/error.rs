use std::fmt;

/// Failures surfaced by the buffer store and the render context.
///
/// Geometric rejections (points behind the viewer, off-screen samples) are
/// not errors and never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Requested window size lies outside the supported range
    InvalidDimensions { width: usize, height: usize },
    /// The allocator refused the buffers for this window size
    Allocation { width: usize, height: usize },
    /// Buffers were torn down or never allocated
    NotAllocated,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidDimensions { width, height } => {
                write!(f, "unsupported window size {}x{}", width, height)
            }
            RenderError::Allocation { width, height } => {
                write!(f, "failed to allocate buffers for {}x{}", width, height)
            }
            RenderError::NotAllocated => write!(f, "render buffers are not allocated"),
        }
    }
}

impl std::error::Error for RenderError {}
