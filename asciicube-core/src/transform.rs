/// Euler rotation state and the closed-form point rotation
use nalgebra::Point3;

/// Euler angles in radians, applied X then Y then Z
///
/// Angles are never wrapped; the trigonometric terms are periodic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Add per-axis increments; the animation steps X and Y only
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Sines and cosines of a rotation, computed once per point
#[derive(Debug, Clone, Copy)]
struct Trig {
    sin_x: f32,
    cos_x: f32,
    sin_y: f32,
    cos_y: f32,
    sin_z: f32,
    cos_z: f32,
}

impl Trig {
    fn of(rotation: &RotationState) -> Self {
        let (sin_x, cos_x) = rotation.x.sin_cos();
        let (sin_y, cos_y) = rotation.y.sin_cos();
        let (sin_z, cos_z) = rotation.z.sin_cos();
        Self {
            sin_x,
            cos_x,
            sin_y,
            cos_y,
            sin_z,
            cos_z,
        }
    }

    fn x(&self, p: &Point3<f32>) -> f32 {
        p.y * self.sin_x * self.sin_y * self.cos_z - p.z * self.cos_x * self.sin_y * self.cos_z
            + p.y * self.cos_x * self.sin_z
            + p.z * self.sin_x * self.sin_z
            + p.x * self.cos_y * self.cos_z
    }

    fn y(&self, p: &Point3<f32>) -> f32 {
        p.y * self.cos_x * self.cos_z + p.z * self.sin_x * self.cos_z
            - p.y * self.sin_x * self.sin_y * self.sin_z
            + p.z * self.cos_x * self.sin_y * self.sin_z
            - p.x * self.cos_y * self.sin_z
    }

    fn z(&self, p: &Point3<f32>) -> f32 {
        p.z * self.cos_x * self.cos_y - p.y * self.sin_x * self.cos_y + p.x * self.sin_y
    }
}

/// Point transforms for the renderer
///
/// The X, Y and Z rotations are pre-combined into one formula per axis rather
/// than multiplied as matrices, which keeps the arithmetic in `f32` and in a
/// fixed evaluation order.
pub struct Transform;

impl Transform {
    /// Rotate a point by X, then Y, then Z
    pub fn rotate_point(point: &Point3<f32>, rotation: &RotationState) -> Point3<f32> {
        let trig = Trig::of(rotation);
        Point3::new(trig.x(point), trig.y(point), trig.z(point))
    }

    pub fn rotated_x(point: &Point3<f32>, rotation: &RotationState) -> f32 {
        Trig::of(rotation).x(point)
    }

    pub fn rotated_y(point: &Point3<f32>, rotation: &RotationState) -> f32 {
        Trig::of(rotation).y(point)
    }

    pub fn rotated_z(point: &Point3<f32>, rotation: &RotationState) -> f32 {
        Trig::of(rotation).z(point)
    }
}
