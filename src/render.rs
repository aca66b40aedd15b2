// Paints one metaball onto the surface.

use crate::ball::MetaBall;
use crate::error::Error;
use crate::surface::Surface;
use crate::types::{ColorStop, Point, Rgba};

/// Opaque black at the inner radius, transparent black at the outer radius.
pub const METABALL_STOPS: [ColorStop; 2] = [
    ColorStop { offset: 0.0, color: Rgba::new(0.0, 0.0, 0.0, 1.0) },
    ColorStop { offset: 1.0, color: Rgba::new(0.0, 0.0, 0.0, 0.0) },
];

/// Draw `ball` as a radial gradient at its current position.
/// Does not clear anything first: alpha piles up where balls overlap.
pub fn draw_metaball(surface: &mut Surface, ball: &MetaBall) -> Result<(), Error> {
    surface.fill_radial_gradient(Point::new(ball.x, ball.y), ball.r1, ball.r2, &METABALL_STOPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spirograph::Motion;
    use crate::surface::Transform;

    fn ball_at(x: f64, y: f64, r1: f64, r2: f64) -> MetaBall {
        MetaBall { x, y, r1, r2, motion: Motion::Fixed(Point::new(x, y)) }
    }

    #[test]
    fn paints_black_only() {
        let mut s = Surface::new(100, 100, Transform::centered(100, 100, 20.0)).unwrap();
        draw_metaball(&mut s, &ball_at(0.0, 0.0, 0.5, 2.0)).unwrap();
        for px in s.pixels().pixels() {
            assert_eq!(&px.0[..3], &[0, 0, 0]);
        }
        assert_eq!(s.pixels().get_pixel(50, 50).0[3], 255);
    }

    #[test]
    fn drawn_at_ball_position_in_user_space() {
        let mut s = Surface::new(100, 100, Transform::centered(100, 100, 20.0)).unwrap();
        // user (1, -1) -> device (70, 30)
        draw_metaball(&mut s, &ball_at(1.0, -1.0, 0.0, 0.5)).unwrap();
        assert!(s.pixels().get_pixel(70, 30).0[3] > 200);
        assert_eq!(s.pixels().get_pixel(50, 50).0[3], 0);
    }

    #[test]
    fn second_ball_adds_to_first() {
        let mut s = Surface::new(100, 100, Transform::centered(100, 100, 20.0)).unwrap();
        let b = ball_at(0.0, 0.0, 0.0, 2.0);
        draw_metaball(&mut s, &b).unwrap();
        let once = s.pixels().get_pixel(70, 50).0[3];
        draw_metaball(&mut s, &b).unwrap();
        let twice = s.pixels().get_pixel(70, 50).0[3];
        assert!(once > 0 && twice > once);
    }

    #[test]
    fn nan_ball_fails() {
        let mut s = Surface::new(10, 10, Transform::IDENTITY).unwrap();
        let b = ball_at(f64::NAN, f64::NAN, 0.0, 2.0);
        assert!(matches!(draw_metaball(&mut s, &b), Err(Error::NonFinite(_))));
    }
}
