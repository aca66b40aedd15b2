// In-memory raster surface: an RGBA8 pixel buffer plus a centered, scaled
// user space for drawing. Drawing goes through the transform; pixel
// read/write does not (it is always whole-buffer, device pixels).

use crate::error::Error;
use crate::types::{ColorStop, PixelBuffer, Point, Rgba};

/// Maps user space to device pixels: `device = origin + user * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub origin: Point,
    pub scale: f64,
}

impl Transform {
    #[cfg(test)]
    pub const IDENTITY: Transform = Transform { origin: Point::new(0.0, 0.0), scale: 1.0 };

    /// User (0,0) at the middle of a `width x height` surface.
    pub fn centered(width: u32, height: u32, scale: f64) -> Self {
        Self { origin: Point::new(width as f64 / 2.0, height as f64 / 2.0), scale }
    }

    #[inline]
    pub fn to_device(&self, p: Point) -> Point {
        Point::new(self.origin.x + p.x * self.scale, self.origin.y + p.y * self.scale)
    }

    #[inline]
    pub fn to_user(&self, p: Point) -> Point {
        Point::new((p.x - self.origin.x) / self.scale, (p.y - self.origin.y) / self.scale)
    }
}

pub struct Surface {
    pixels: PixelBuffer,
    transform: Transform,
}

impl Surface {
    /// Allocate a transparent surface. Zero-sized surfaces are refused.
    pub fn new(width: u32, height: u32, transform: Transform) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::SurfaceInit(format!("cannot draw on a {width}x{height} surface")));
        }
        Ok(Self { pixels: PixelBuffer::new(width, height), transform })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[cfg(test)]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Zeroed buffer with this surface's dimensions.
    pub fn create_empty_buffer(&self) -> PixelBuffer {
        PixelBuffer::new(self.width(), self.height())
    }

    /// Wipe everything back to transparent black.
    pub fn clear(&mut self) {
        let raw: &mut [u8] = &mut self.pixels;
        raw.fill(0);
    }

    /// Borrow the current pixels without copying.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Independent snapshot of the current pixels.
    pub fn read_pixels(&self) -> PixelBuffer {
        self.pixels.clone()
    }

    /// Replace the visible image. The buffer must match the surface size.
    pub fn write_pixels(&mut self, buf: PixelBuffer) -> Result<(), Error> {
        if buf.dimensions() != self.pixels.dimensions() {
            return Err(Error::SizeMismatch {
                expected: self.pixels.dimensions(),
                actual: buf.dimensions(),
            });
        }
        self.pixels = buf;
        Ok(())
    }

    /// Fill the disc of radius `r2` around `center` (user space) with a radial
    /// gradient: offset 0 on the circle of radius `r1`, offset 1 at `r2`.
    /// Inside `r1` the first stop's color is used; if `r2 <= r1` every pixel
    /// takes the last stop. Blends source-over.
    /// Visual: a soft round blob; overlapping blobs build up alpha.
    pub fn fill_radial_gradient(
        &mut self,
        center: Point,
        r1: f64,
        r2: f64,
        stops: &[ColorStop],
    ) -> Result<(), Error> {
        if !center.is_finite() || !r1.is_finite() || !r2.is_finite() {
            return Err(Error::NonFinite(format!(
                "radial gradient at ({}, {}) with radii {r1}, {r2}",
                center.x, center.y
            )));
        }
        if stops.is_empty() || r2 <= 0.0 {
            return Ok(()); // nothing to paint
        }

        let (w, h) = self.pixels.dimensions();
        let c = self.transform.to_device(center);
        let reach = r2 * self.transform.scale.abs();

        // Scan just the bounding box of the outer circle, clamped to the surface.
        let x0 = (c.x - reach).floor().max(0.0) as u32;
        let y0 = (c.y - reach).floor().max(0.0) as u32;
        let x1 = (c.x + reach).ceil().min(w as f64) as u32;
        let y1 = (c.y + reach).ceil().min(h as f64) as u32;

        let span = r2 - r1;
        for py in y0..y1 {
            for px in x0..x1 {
                // Sample at the pixel center, measured in user units.
                let u = self.transform.to_user(Point::new(px as f64 + 0.5, py as f64 + 0.5));
                let (dx, dy) = (u.x - center.x, u.y - center.y);
                let d = (dx * dx + dy * dy).sqrt();
                if d > r2 {
                    continue; // outside the clip circle
                }

                let t = if span > 0.0 { ((d - r1) / span).clamp(0.0, 1.0) } else { 1.0 };
                let src = color_at(stops, t as f32);
                let dst = self.pixels.get_pixel_mut(px, py);
                dst.0 = source_over(src, dst.0);
            }
        }
        Ok(())
    }
}

/// Color of a (sorted) stop list at offset `t`; clamps past the ends.
fn color_at(stops: &[ColorStop], t: f32) -> Rgba {
    let first = stops[0];
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let len = b.offset - a.offset;
            if len <= 0.0 {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / len);
        }
    }
    stops[stops.len() - 1].color
}

/// Non-premultiplied source-over of `src` onto an RGBA8 pixel.
#[inline]
fn source_over(src: Rgba, dst: [u8; 4]) -> [u8; 4] {
    let to_f = |v: u8| v as f32 / 255.0;
    let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    let sa = src.a.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return dst;
    }
    let da = to_f(dst[3]);
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let mix = |s: f32, d: u8| (s * sa + to_f(d) * da * (1.0 - sa)) / out_a;
    [
        to_u8(mix(src.r, dst[0])),
        to_u8(mix(src.g, dst[1])),
        to_u8(mix(src.b, dst[2])),
        to_u8(out_a),
    ]
}
