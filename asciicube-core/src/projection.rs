/// Camera and perspective projection onto the character grid
use nalgebra::Point3;

use crate::buffer::BufferStore;
use crate::config::{DEFAULT_PROJECTION_SCALE, DEFAULT_VIEWER_DISTANCE};
use crate::transform::{RotationState, Transform};

/// A projected sample, before the on-screen and depth checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSample {
    pub x: i32,
    pub y: i32,
    pub inverse_depth: f32,
}

/// Camera sitting at the origin looking down +Z at the rotated cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Added to every rotated Z before the perspective divide
    pub viewer_distance: f32,
    pub scale: f32,
}

impl Camera {
    pub fn new(viewer_distance: f32, scale: f32) -> Self {
        Self {
            viewer_distance,
            scale,
        }
    }

    /// Project a world point to screen space.
    ///
    /// Returns `None` when the translated point sits at or behind the viewer.
    /// X is doubled because terminal cells are about twice as tall as wide.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        rotation: &RotationState,
        width: usize,
        height: usize,
    ) -> Option<ScreenSample> {
        let rotated = Transform::rotate_point(point, rotation);
        let z = rotated.z + self.viewer_distance;
        if z <= 0.0 {
            return None;
        }

        let inverse_depth = 1.0 / z;
        // Integer halves, then truncation toward zero
        let x = ((width / 2) as f32 + self.scale * inverse_depth * rotated.x * 2.0) as i32;
        let y = ((height / 2) as f32 + self.scale * inverse_depth * rotated.y) as i32;

        Some(ScreenSample {
            x,
            y,
            inverse_depth,
        })
    }

    /// Project a surface point and hand it to the depth test.
    ///
    /// Points that are behind the viewer or off screen are silently dropped.
    /// Returns whether a pixel was written.
    pub fn rasterize(
        &self,
        point: &Point3<f32>,
        ch: u8,
        rotation: &RotationState,
        store: &mut BufferStore,
    ) -> bool {
        if !store.is_allocated() {
            return false;
        }

        match self.project_to_screen(point, rotation, store.width(), store.height()) {
            Some(sample) => store.write_pixel(sample.x, sample.y, sample.inverse_depth, ch),
            None => false,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWER_DISTANCE, DEFAULT_PROJECTION_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::default();
        assert_eq!(camera.viewer_distance, 60.0);
        assert_eq!(camera.scale, 40.0);
    }

    #[test]
    fn test_project_center() {
        let camera = Camera::default();
        let sample = camera
            .project_to_screen(&Point3::new(0.0, 0.0, -10.0), &RotationState::zero(), 80, 22)
            .unwrap();
        assert_eq!((sample.x, sample.y), (40, 11));
        assert!((sample.inverse_depth - 1.0 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_doubles_x() {
        let camera = Camera::default();
        // z = 50 -> 40 / 50 * 5.5 = 4.4 rows, 8.8 columns
        let sample = camera
            .project_to_screen(&Point3::new(5.5, 5.5, -10.0), &RotationState::zero(), 80, 22)
            .unwrap();
        assert_eq!((sample.x, sample.y), (48, 15));
    }

    #[test]
    fn test_project_truncates_toward_zero() {
        let camera = Camera::new(60.0, 40.0);
        // width/2 = 5; x offset = 40 / 60 * -4 * 2 = -5.33 -> -0.33 -> 0
        let sample = camera
            .project_to_screen(&Point3::new(-4.0, 0.0, 0.0), &RotationState::zero(), 11, 5)
            .unwrap();
        assert_eq!(sample.x, 0);
        assert_eq!(sample.y, 2);
    }

    #[test]
    fn test_behind_viewer_rejected() {
        let camera = Camera::new(5.0, 40.0);
        let rotation = RotationState::zero();
        assert!(camera
            .project_to_screen(&Point3::new(0.0, 0.0, -5.0), &rotation, 80, 22)
            .is_none());
        assert!(camera
            .project_to_screen(&Point3::new(0.0, 0.0, -9.0), &rotation, 80, 22)
            .is_none());
    }

    #[test]
    fn test_rasterize_behind_viewer_writes_nothing() {
        let camera = Camera::new(5.0, 40.0);
        let mut store = BufferStore::with_dimensions(80, 22).unwrap();
        assert!(!camera.rasterize(
            &Point3::new(0.0, 0.0, -10.0),
            b'A',
            &RotationState::zero(),
            &mut store
        ));
        assert!(store.frame().iter().all(|&c| c == b' '));
        assert!(store.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_rasterize_writes_center() {
        let camera = Camera::default();
        let mut store = BufferStore::with_dimensions(80, 22).unwrap();
        assert!(camera.rasterize(
            &Point3::new(0.0, 0.0, -10.0),
            b'A',
            &RotationState::zero(),
            &mut store
        ));
        assert_eq!(store.char_at(40, 11), Some(b'A'));
    }
}
