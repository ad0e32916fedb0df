use glam::Vec2;
use image::{Rgba, RgbaImage};

pub type Color = Rgba<u8>;

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

/// Fill the axis-aligned box spanning `min..max` (pixels), clipped to the canvas
pub fn fill_rect(canvas: &mut RgbaImage, min: Vec2, max: Vec2, color: Color) {
    let (w, h) = canvas.dimensions();
    let x0 = min.x.floor().clamp(0.0, w as f32) as u32;
    let y0 = min.y.floor().clamp(0.0, h as f32) as u32;
    let x1 = max.x.ceil().clamp(0.0, w as f32) as u32;
    let y1 = max.y.ceil().clamp(0.0, h as f32) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Fill a disc centred on `center`, clipped to the canvas
pub fn fill_disc(canvas: &mut RgbaImage, center: Vec2, radius: f32, color: Color) {
    let (w, h) = canvas.dimensions();
    let x0 = (center.x - radius).floor().max(0.0) as u32;
    let y0 = (center.y - radius).floor().max(0.0) as u32;
    let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(w);
    let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(h);
    let r2 = radius * radius;

    for y in y0..y1 {
        for x in x0..x1 {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            if d.length_squared() <= r2 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill an upward-pointing triangle with apex `apex` and base at `base_y`
pub fn fill_triangle(canvas: &mut RgbaImage, apex: Vec2, base_y: f32, half_base: f32, color: Color) {
    let height = base_y - apex.y;
    if height <= 0.0 {
        return;
    }
    let (w, h) = canvas.dimensions();
    let y0 = apex.y.floor().max(0.0) as u32;
    let y1 = (base_y.ceil().max(0.0) as u32).min(h);

    for y in y0..y1 {
        let t = ((y as f32 + 0.5 - apex.y) / height).clamp(0.0, 1.0);
        let half = half_base * t;
        let x0 = (apex.x - half).floor().max(0.0) as u32;
        let x1 = ((apex.x + half).ceil().max(0.0) as u32).min(w);
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Full-height vertical line of the given thickness centred on `x`
pub fn vline(canvas: &mut RgbaImage, x: f32, thickness: f32, color: Color) {
    let h = canvas.height() as f32;
    let half = thickness / 2.0;
    fill_rect(canvas, Vec2::new(x - half, 0.0), Vec2::new(x + half, h), color);
}
