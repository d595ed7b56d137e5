/// Render context tying buffers, camera, cube and rotation together
use crate::buffer::BufferStore;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::geometry::Cube;
use crate::projection::Camera;
use crate::transform::RotationState;

/// All mutable render state for one cube animation.
///
/// Several renderers can live side by side; nothing here is global.
#[derive(Debug, Clone)]
pub struct CubeRenderer {
    store: BufferStore,
    camera: Camera,
    cube: Cube,
    rotation: RotationState,
    rotation_increment: f32,
}

impl CubeRenderer {
    /// Allocate buffers for the configured window size
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        let mut store = BufferStore::new(config.background);
        store.initialize(config.width, config.height)?;

        Ok(Self {
            store,
            camera: Camera::new(config.viewer_distance, config.projection_scale),
            cube: Cube::new(config.half_width, config.sample_step),
            rotation: RotationState::zero(),
            rotation_increment: config.rotation_increment,
        })
    }

    /// Reset both buffers for a new frame
    pub fn clear(&mut self) -> Result<(), RenderError> {
        self.store.clear_frame()?;
        self.store.clear_depth()
    }

    /// Rasterize the cube at the current rotation
    pub fn draw(&mut self) {
        self.cube.draw(&self.rotation, &self.camera, &mut self.store);
    }

    /// Clear and draw one frame without touching the rotation
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        self.clear()?;
        self.draw();
        Ok(())
    }

    /// Step the X and Y angles forward by the configured increment
    pub fn advance(&mut self) {
        self.rotation
            .rotate(self.rotation_increment, self.rotation_increment, 0.0);
    }

    /// Clear, draw and advance; the unit of work the benchmark times
    pub fn render_one_frame(&mut self) -> Result<(), RenderError> {
        self.render_frame()?;
        self.advance();
        Ok(())
    }

    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        self.store.resize(width, height)
    }

    /// Release the buffers; later frames fail with `NotAllocated`
    pub fn teardown(&mut self) {
        self.store.teardown();
    }

    pub fn store(&self) -> &BufferStore {
        &self.store
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: RotationState) {
        self.rotation = rotation;
    }
}
