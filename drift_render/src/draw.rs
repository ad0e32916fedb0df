use crate::camera::Camera;
use crate::raster::{fill_disc, fill_rect, fill_triangle, rgb, vline};
use crate::scene::{Marker, MarkerKind, Scene};
use drift_core::Frame;
use glam::Vec2;
use image::RgbaImage;

/// Rasterizes frames of one animation with a fixed scene
pub struct FrameRenderer {
    pub scene: Scene,
    pub camera: Camera,
    background: RgbaImage, // static layer, drawn once
}

impl FrameRenderer {
    pub fn new(scene: Scene) -> Self {
        let camera = Camera::orthographic(scene.field.0, scene.field.1, scene.canvas);
        let background = draw_static_layer(&scene, &camera);
        Self {
            scene,
            camera,
            background,
        }
    }

    /// Draw one frame; the frame itself is only read
    pub fn render(&self, frame: &Frame) -> RgbaImage {
        let mut canvas = self.background.clone();
        for particle in &frame.particles {
            let center = self.camera.to_pixel(particle.pos);
            let color = self.scene.particle_color(particle.state);
            fill_disc(&mut canvas, center, self.scene.particle_radius, color);
        }
        canvas
    }

    pub fn render_all(&self, frames: &[Frame]) -> Vec<RgbaImage> {
        frames.iter().map(|frame| self.render(frame)).collect()
    }
}

fn draw_static_layer(scene: &Scene, camera: &Camera) -> RgbaImage {
    let (w, h) = scene.canvas;
    let mut canvas = RgbaImage::from_pixel(w, h, scene.background);

    let barrier = camera.to_pixel(Vec2::new(scene.barrier_x, 0.0));
    vline(&mut canvas, barrier.x, scene.barrier_thickness, scene.barrier_color);

    let size = camera.scale_x(0.25).max(4.0);
    for marker in &scene.markers {
        draw_marker(&mut canvas, camera.to_pixel(marker.pos), size, marker);
    }
    canvas
}

fn draw_marker(canvas: &mut RgbaImage, at: Vec2, size: f32, marker: &Marker) {
    let half = Vec2::splat(size / 2.0);
    match marker.kind {
        MarkerKind::Tree => {
            fill_rect(
                canvas,
                at + Vec2::new(-size * 0.15, 0.0),
                at + Vec2::new(size * 0.15, size),
                rgb(110, 70, 30),
            );
            fill_disc(canvas, at, size * 0.6, rgb(34, 139, 34));
        }
        MarkerKind::Dwelling => {
            fill_rect(canvas, at - half, at + half, rgb(200, 120, 60));
            fill_triangle(canvas, at - Vec2::new(0.0, size), at.y - half.y, size * 0.7, rgb(150, 40, 40));
        }
        MarkerKind::Livestock => {
            let body = Vec2::new(size * 0.7, size * 0.4);
            fill_rect(canvas, at - body, at + body, rgb(40, 40, 40));
            fill_disc(canvas, at + Vec2::new(-size * 0.2, 0.0), size * 0.2, rgb(245, 245, 245));
        }
        MarkerKind::Water => {
            fill_disc(canvas, at, size * 0.6, rgb(30, 110, 220));
        }
    }
}
