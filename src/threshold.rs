// Alpha threshold: turns the soft, accumulated gradients into a hard mask.
// Visual: blobs get crisp edges and "melt" together where their fades overlap.

use crate::surface::Surface;
use crate::types::PixelBuffer;

/// Snapshot the surface and build a fresh mask from it: alpha is 255 iff the
/// source alpha is strictly above `alpha_cutoff * 255`, else 0. RGB stays 0.
/// The surface itself is not touched.
pub fn threshold(surface: &Surface, alpha_cutoff: f64) -> PixelBuffer {
    let source = surface.read_pixels();
    let out = surface.create_empty_buffer();
    mask_alpha(&source, out, alpha_cutoff)
}

/// Set `out`'s alpha from `src`'s; `out` must be zeroed and the same size.
fn mask_alpha(src: &PixelBuffer, mut out: PixelBuffer, alpha_cutoff: f64) -> PixelBuffer {
    let cutoff = alpha_cutoff * 255.0;
    for (dst, px) in out.pixels_mut().zip(src.pixels()) {
        if f64::from(px.0[3]) > cutoff {
            dst.0[3] = 255;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Transform;

    fn threshold_buffer(src: &PixelBuffer, alpha_cutoff: f64) -> PixelBuffer {
        mask_alpha(src, PixelBuffer::new(src.width(), src.height()), alpha_cutoff)
    }

    /// 256x1 buffer with alpha = x, and some junk in RGB.
    fn ramp() -> PixelBuffer {
        PixelBuffer::from_fn(256, 1, |x, _| image::Rgba([7, 8, 9, x as u8]))
    }

    #[test]
    fn output_alpha_is_binary_and_strict() {
        let out = threshold_buffer(&ramp(), 0.5);
        for (x, _, px) in out.enumerate_pixels() {
            let want = if x as f64 > 127.5 { 255 } else { 0 };
            assert_eq!(px.0, [0, 0, 0, want], "x={x}");
        }
    }

    #[test]
    fn boundary_value_maps_to_transparent() {
        // 51 == 0.2 * 255 exactly
        let out = threshold_buffer(&ramp(), 0.2);
        assert_eq!(out.get_pixel(51, 0).0[3], 0);
        assert_eq!(out.get_pixel(52, 0).0[3], 255);
    }

    #[test]
    fn cutoff_extremes() {
        let all = threshold_buffer(&ramp(), 0.0);
        assert_eq!(all.get_pixel(0, 0).0[3], 0);
        assert!(all.pixels().skip(1).all(|p| p.0[3] == 255));

        let none = threshold_buffer(&ramp(), 1.0);
        assert!(none.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn idempotent_on_own_output() {
        for cutoff in [0.0, 0.1, 0.5, 0.99] {
            let once = threshold_buffer(&ramp(), cutoff);
            let twice = threshold_buffer(&once, cutoff);
            assert_eq!(once, twice, "cutoff={cutoff}");
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let src = ramp();
        let before = src.clone();
        let out = threshold_buffer(&src, 0.5);
        assert_eq!(src, before);
        assert_eq!(out.dimensions(), src.dimensions());
    }

    #[test]
    fn reads_from_surface() {
        let mut s = Surface::new(3, 2, Transform::IDENTITY).unwrap();
        let mut buf = s.create_empty_buffer();
        buf.get_pixel_mut(2, 1).0 = [0, 0, 0, 200];
        buf.get_pixel_mut(0, 0).0 = [0, 0, 0, 100];
        s.write_pixels(buf).unwrap();

        let before = s.read_pixels();
        let out = threshold(&s, 0.5);
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.get_pixel(2, 1).0, [0, 0, 0, 255]);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(s.pixels(), &before);
    }

    #[test]
    fn surface_and_buffer_paths_agree() {
        let mut s = Surface::new(256, 1, Transform::IDENTITY).unwrap();
        s.write_pixels(ramp()).unwrap();
        for cutoff in [0.0, 0.2, 0.5, 1.0] {
            assert_eq!(threshold(&s, cutoff), threshold_buffer(&ramp(), cutoff), "cutoff={cutoff}");
        }
        assert_eq!(s.pixels(), &ramp());
    }
}
