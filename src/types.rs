// Core value types shared by the motion, drawing and threshold code.

use image::{ImageBuffer, Rgba as ImgRgba};

/// Full-surface RGBA8 snapshot, row-major, 4 bytes per pixel (R,G,B,A).
/// `PixelBuffer::new(w, h)` is all zero, i.e. transparent black.
pub type PixelBuffer = ImageBuffer<ImgRgba<u8>, Vec<u8>>;

/// A position in the surface's user space (centered, scaled).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Non-premultiplied color; every channel in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Component-wise linear mix; `t = 0` gives `self`, `t = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let mix = |x: f32, y: f32| x + (y - x) * t;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// One gradient stop. Offset 0 sits on the inner circle, 1 on the outer circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pixel_buffer_is_transparent_black() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.as_raw().len(), 3 * 2 * 4);
        assert!(buf.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn lerp_hits_both_ends_and_middle() {
        let a = Rgba::new(0.0, 0.0, 0.0, 1.0);
        let b = Rgba::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!((a.lerp(b, 0.5).a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn nan_point_is_not_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
