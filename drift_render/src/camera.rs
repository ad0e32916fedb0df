//! Field-to-canvas projection
//!
//! Maps world units (origin bottom-left, y up) onto pixel coordinates
//! (origin top-left, y down).

use glam::{Mat3, Vec2};

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub projection: Mat3,
    pub canvas: (u32, u32),
}

impl Camera {
    /// Orthographic camera showing a `width` x `height` field on the whole canvas
    pub fn orthographic(width: f32, height: f32, canvas: (u32, u32)) -> Self {
        let scale = Vec2::new(canvas.0 as f32 / width, -(canvas.1 as f32) / height);
        let translation = Vec2::new(0.0, canvas.1 as f32);
        let projection = Mat3::from_scale_angle_translation(scale, 0.0, translation);
        Self { projection, canvas }
    }

    pub fn to_pixel(&self, world: Vec2) -> Vec2 {
        self.projection.transform_point2(world)
    }

    /// World-space length along x expressed in pixels
    pub fn scale_x(&self, length: f32) -> f32 {
        self.projection.transform_vector2(Vec2::new(length, 0.0)).x
    }
}
