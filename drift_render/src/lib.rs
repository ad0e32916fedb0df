//! Frame renderer and animated-GIF encoder for drift runs

pub mod camera;
pub mod draw;
pub mod encode;
pub mod raster;
pub mod scene;

pub use camera::Camera;
pub use draw::FrameRenderer;
pub use encode::{encode_gif, write_gif, RenderError};
pub use scene::{Marker, MarkerKind, Scene};

use drift_core::{Frame, SimConfig};
use std::path::Path;

/// Render every frame of a run and write the looping animation to `path`
pub fn render_animation(
    config: &SimConfig,
    frames: &[Frame],
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let renderer = FrameRenderer::new(Scene::for_config(config));
    let images = renderer.render_all(frames);
    write_gif(path, images, config.frame_interval_ms)
}
