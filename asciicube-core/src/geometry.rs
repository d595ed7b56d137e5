/// Cube surface sampling
use nalgebra::Point3;

use crate::buffer::BufferStore;
use crate::config::{DEFAULT_CUBE_HALF_WIDTH, DEFAULT_SAMPLE_STEP};
use crate::projection::Camera;
use crate::transform::RotationState;

/// A point in world space
pub type Point3D = Point3<f32>;

/// One of the six cube faces, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Right,
    Left,
    Back,
    Bottom,
    Top,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Left,
        Face::Back,
        Face::Bottom,
        Face::Top,
    ];

    /// Character drawn for samples on this face
    pub fn glyph(self) -> u8 {
        match self {
            Face::Front => b'A',
            Face::Right => b'B',
            Face::Left => b'C',
            Face::Back => b'D',
            Face::Bottom => b'E',
            Face::Top => b'F',
        }
    }

    /// Map grid coordinates (u, v) on this face to a world point
    pub fn surface_point(self, u: f32, v: f32, half_width: f32) -> Point3D {
        match self {
            Face::Front => Point3::new(u, v, -half_width),
            Face::Right => Point3::new(half_width, v, u),
            Face::Left => Point3::new(-half_width, v, -u),
            Face::Back => Point3::new(-u, v, half_width),
            Face::Bottom => Point3::new(u, -half_width, -v),
            Face::Top => Point3::new(u, half_width, v),
        }
    }
}

/// An axis-aligned cube centred on the origin, sampled on a regular grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub half_width: f32,
    pub step: f32,
}

impl Cube {
    pub fn new(half_width: f32, step: f32) -> Self {
        Self { half_width, step }
    }

    /// The step must be positive and smaller than the half-width
    pub fn is_valid(&self) -> bool {
        self.step > 0.0 && self.step < self.half_width
    }

    /// Iterate every surface sample as `(face, point)`.
    ///
    /// The outer loop walks `u`, the inner loop `v`, both from `-W` while
    /// `< W`; each grid position yields all six faces in `Face::ALL` order.
    /// An invalid cube yields nothing.
    pub fn sample_points(&self) -> SurfaceSamples {
        SurfaceSamples {
            half_width: self.half_width,
            step: self.step,
            u: -self.half_width,
            v: -self.half_width,
            face: 0,
            done: !self.is_valid(),
        }
    }

    /// Rasterize every surface sample into `store`
    pub fn draw(&self, rotation: &RotationState, camera: &Camera, store: &mut BufferStore) {
        for (face, point) in self.sample_points() {
            camera.rasterize(&point, face.glyph(), rotation, store);
        }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(DEFAULT_CUBE_HALF_WIDTH, DEFAULT_SAMPLE_STEP)
    }
}

/// Iterator over cube surface samples, see [`Cube::sample_points`]
#[derive(Debug, Clone)]
pub struct SurfaceSamples {
    half_width: f32,
    step: f32,
    u: f32,
    v: f32,
    face: usize,
    done: bool,
}

impl Iterator for SurfaceSamples {
    type Item = (Face, Point3D);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let face = Face::ALL[self.face];
        let point = face.surface_point(self.u, self.v, self.half_width);

        self.face += 1;
        if self.face == Face::ALL.len() {
            self.face = 0;
            self.v += self.step;
            if self.v >= self.half_width {
                self.v = -self.half_width;
                self.u += self.step;
                self.done = self.u >= self.half_width;
            }
        }

        Some((face, point))
    }
}
