/// Character and inverse-depth buffers for the ASCII rasterizer
///
/// Both buffers are row-major with `index = x + y * width`. The depth buffer
/// stores `1 / z`, so a larger value is closer to the viewer and a fresh
/// buffer (all zeros) accepts any point in front of the camera.
use log::debug;

use crate::config::{dimensions_supported, BACKGROUND_CHAR};
use crate::error::RenderError;

#[derive(Debug, Clone)]
struct Buffers {
    chars: Vec<u8>,
    depth: Vec<f32>,
}

impl Buffers {
    fn allocate(width: usize, height: usize, background: u8) -> Result<Self, RenderError> {
        let failed = || RenderError::Allocation { width, height };
        let len = width.checked_mul(height).ok_or_else(failed)?;

        let mut chars = Vec::new();
        chars.try_reserve_exact(len).map_err(|_| failed())?;
        chars.resize(len, background);

        let mut depth = Vec::new();
        depth.try_reserve_exact(len).map_err(|_| failed())?;
        depth.resize(len, 0.0);

        Ok(Self { chars, depth })
    }
}

/// Owns the visible-character buffer and the depth buffer for one window
#[derive(Debug, Clone)]
pub struct BufferStore {
    width: usize,
    height: usize,
    background: u8,
    buffers: Option<Buffers>,
}

impl BufferStore {
    /// Create a store with no buffers; call `initialize` before rendering
    pub fn new(background: u8) -> Self {
        Self {
            width: 0,
            height: 0,
            background,
            buffers: None,
        }
    }

    /// Create and allocate a store with the default background
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, RenderError> {
        let mut store = Self::new(BACKGROUND_CHAR);
        store.initialize(width, height)?;
        Ok(store)
    }

    /// Allocate buffers for `width` x `height`, replacing any existing ones.
    ///
    /// The char buffer starts filled with the background and the depth
    /// buffer with zeros.
    pub fn initialize(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        if !dimensions_supported(width, height) {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let buffers = Buffers::allocate(width, height, self.background)?;
        debug!("allocated {}x{} render buffers", width, height);

        self.width = width;
        self.height = height;
        self.buffers = Some(buffers);
        Ok(())
    }

    /// Reallocate for a new window size.
    ///
    /// On any failure the current buffers and dimensions are left as they were.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), RenderError> {
        if !dimensions_supported(new_width, new_height) {
            return Err(RenderError::InvalidDimensions {
                width: new_width,
                height: new_height,
            });
        }
        if self.buffers.is_some() && new_width == self.width && new_height == self.height {
            return Ok(());
        }

        let replacement = Buffers::allocate(new_width, new_height, self.background)?;
        debug!(
            "resized render buffers {}x{} -> {}x{}",
            self.width, self.height, new_width, new_height
        );

        self.width = new_width;
        self.height = new_height;
        self.buffers = Some(replacement);
        Ok(())
    }

    /// Fill the char buffer with the background character
    pub fn clear_frame(&mut self) -> Result<(), RenderError> {
        let background = self.background;
        let buffers = self.buffers.as_mut().ok_or(RenderError::NotAllocated)?;
        buffers.chars.fill(background);
        Ok(())
    }

    /// Zero the depth buffer
    pub fn clear_depth(&mut self) -> Result<(), RenderError> {
        let buffers = self.buffers.as_mut().ok_or(RenderError::NotAllocated)?;
        buffers.depth.fill(0.0);
        Ok(())
    }

    /// Write a character if it lies on screen and is strictly closer than
    /// what is already stored there. Returns whether the pixel changed.
    #[inline]
    pub fn write_pixel(&mut self, screen_x: i32, screen_y: i32, inverse_depth: f32, ch: u8) -> bool {
        let Some(buffers) = self.buffers.as_mut() else {
            return false;
        };
        if screen_x < 0 || screen_y < 0 {
            return false;
        }
        let (x, y) = (screen_x as usize, screen_y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }

        let index = x + y * self.width;
        if inverse_depth > buffers.depth[index] {
            buffers.depth[index] = inverse_depth;
            buffers.chars[index] = ch;
            true
        } else {
            false
        }
    }

    /// Release both buffers. Calling this on a released store does nothing.
    pub fn teardown(&mut self) {
        if self.buffers.take().is_some() {
            debug!("released {}x{} render buffers", self.width, self.height);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_allocated(&self) -> bool {
        self.buffers.is_some()
    }

    /// The char buffer, empty when not allocated
    pub fn frame(&self) -> &[u8] {
        self.buffers.as_ref().map_or(&[], |b| b.chars.as_slice())
    }

    /// The inverse-depth buffer, empty when not allocated
    pub fn depth(&self) -> &[f32] {
        self.buffers.as_ref().map_or(&[], |b| b.depth.as_slice())
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.frame().get(x + y * self.width).copied()
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.depth().get(x + y * self.width).copied()
    }

    /// Iterate the char buffer one row at a time
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects a zero size even for an empty slice
        self.frame().chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    #[test]
    fn test_initialize_fills_background() {
        let store = BufferStore::with_dimensions(80, 22).unwrap();
        assert!(store.is_allocated());
        assert_eq!(store.frame().len(), 80 * 22);
        assert!(store.frame().iter().all(|&c| c == b' '));
        assert!(store.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_initialize_rejects_bounds() {
        let mut store = BufferStore::new(b' ');
        let err = store.initialize(MIN_WINDOW_WIDTH - 1, 22).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidDimensions {
                width: MIN_WINDOW_WIDTH - 1,
                height: 22
            }
        );
        assert!(!store.is_allocated());
    }

    #[test]
    fn test_clear_requires_allocation() {
        let mut store = BufferStore::new(b' ');
        assert_eq!(store.clear_frame(), Err(RenderError::NotAllocated));
        assert_eq!(store.clear_depth(), Err(RenderError::NotAllocated));
    }

    #[test]
    fn test_write_pixel_depth_test() {
        let mut store = BufferStore::with_dimensions(20, 10).unwrap();

        assert!(store.write_pixel(3, 4, 0.02, b'A'));
        assert!(!store.write_pixel(3, 4, 0.01, b'B'));
        assert_eq!(store.char_at(3, 4), Some(b'A'));

        assert!(store.write_pixel(3, 4, 0.03, b'C'));
        assert_eq!(store.char_at(3, 4), Some(b'C'));
        assert_eq!(store.depth_at(3, 4), Some(0.03));
    }

    #[test]
    fn test_write_pixel_equal_depth_keeps_first() {
        let mut store = BufferStore::with_dimensions(20, 10).unwrap();
        assert!(store.write_pixel(5, 5, 0.02, b'A'));
        assert!(!store.write_pixel(5, 5, 0.02, b'B'));
        assert_eq!(store.char_at(5, 5), Some(b'A'));
    }

    #[test]
    fn test_write_pixel_off_screen() {
        let mut store = BufferStore::with_dimensions(20, 10).unwrap();
        assert!(!store.write_pixel(-1, 0, 1.0, b'A'));
        assert!(!store.write_pixel(0, -1, 1.0, b'A'));
        assert!(!store.write_pixel(20, 0, 1.0, b'A'));
        assert!(!store.write_pixel(0, 10, 1.0, b'A'));
        assert!(store.frame().iter().all(|&c| c == b' '));
    }

    #[test]
    fn test_write_pixel_unallocated_is_noop() {
        let mut store = BufferStore::new(b' ');
        assert!(!store.write_pixel(0, 0, 1.0, b'A'));
    }

    #[test]
    fn test_resize_swaps_buffers() {
        let mut store = BufferStore::with_dimensions(20, 10).unwrap();
        store.write_pixel(1, 1, 0.5, b'A');

        store.resize(40, 12).unwrap();
        assert_eq!((store.width(), store.height()), (40, 12));
        assert_eq!(store.frame().len(), 480);
        assert!(store.frame().iter().all(|&c| c == b' '));
        assert!(store.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_resize_same_dimensions_keeps_contents() {
        let mut store = BufferStore::with_dimensions(20, 10).unwrap();
        store.write_pixel(1, 1, 0.5, b'A');
        store.resize(20, 10).unwrap();
        assert_eq!(store.char_at(1, 1), Some(b'A'));
    }

    #[test]
    fn test_resize_invalid_preserves_state() {
        let mut store = BufferStore::with_dimensions(20, 10).unwrap();
        store.write_pixel(2, 3, 0.25, b'F');

        assert!(store.resize(20, MAX_WINDOW_HEIGHT + 1).is_err());
        assert_eq!((store.width(), store.height()), (20, 10));
        assert_eq!(store.char_at(2, 3), Some(b'F'));
        assert_eq!(store.depth_at(2, 3), Some(0.25));
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut store = BufferStore::with_dimensions(20, 10).unwrap();
        store.teardown();
        store.teardown();
        assert!(!store.is_allocated());
        assert!(store.frame().is_empty());
        assert_eq!(store.rows().count(), 0);
    }

    #[test]
    fn test_rows() {
        let mut store = BufferStore::with_dimensions(10, 5).unwrap();
        store.write_pixel(9, 4, 1.0, b'E');
        let rows: Vec<&[u8]> = store.rows().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 10));
        assert_eq!(rows[4][9], b'E');
    }
}
