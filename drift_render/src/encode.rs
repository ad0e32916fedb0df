use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, RgbaImage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("animation has no frames")]
    NoFrames,
    #[error("cannot write animation to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("GIF encoding failed")]
    Encode(#[from] image::ImageError),
}

/// Encode frames as one infinitely looping GIF, `interval_ms` per frame
pub fn encode_gif<W: Write>(
    images: Vec<RgbaImage>,
    interval_ms: u32,
    writer: W,
) -> Result<(), RenderError> {
    if images.is_empty() {
        return Err(RenderError::NoFrames);
    }

    let delay = Delay::from_numer_denom_ms(interval_ms, 1);
    let frames = images
        .into_iter()
        .map(|image| image::Frame::from_parts(image, 0, 0, delay));

    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;
    encoder.encode_frames(frames)?;
    Ok(())
}

/// Encode and write the animation to `path`, creating parent directories
pub fn write_gif(
    path: impl AsRef<Path>,
    images: Vec<RgbaImage>,
    interval_ms: u32,
) -> Result<(), RenderError> {
    if images.is_empty() {
        return Err(RenderError::NoFrames);
    }
    let path = path.as_ref();
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let frame_count = images.len();
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    encode_gif(images, interval_ms, &mut writer)?;
    writer.flush().map_err(io_err)?;

    log::info!(
        "wrote {} frames ({} ms each) to {}",
        frame_count,
        interval_ms,
        path.display()
    );
    Ok(())
}
