// Spirograph motion: the curve itself, a per-ball speed wrapper, and the
// `PositionSource` capability the balls are driven by.
// Visual: each ball loops around the center on its own flower-like path.

use crate::types::Point;

/// Anything that can say where a ball is at a given time.
pub trait PositionSource {
    fn at(&self, time: f64) -> Point;
}

/// Raw spirograph curve.
///
/// * `r` - radius of the whole figure (user units), must be > 0
/// * `k` - inner/outer circle ratio, must be in (0,1); `k == 0` divides by zero
/// * `l` - pen distance from the inner circle's center, in [0,1]
///
/// Parameters are not validated; out-of-range values give non-finite points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spirograph {
    pub r: f64,
    pub k: f64,
    pub l: f64,
}

impl Spirograph {
    pub const fn new(r: f64, k: f64, l: f64) -> Self {
        Self { r, k, l }
    }

    /// Bind a per-ball speed (and phase) to this curve.
    pub fn with_speed(self, speed: f64) -> SpiroPath {
        SpiroPath { shape: self, speed, phase: 0.0 }
    }
}

impl PositionSource for Spirograph {
    #[inline]
    fn at(&self, t: f64) -> Point {
        let Self { r, k, l } = *self;
        let inner = (1.0 - k) / k * t;
        Point {
            x: r * ((1.0 - k) * t.cos() + l * k * inner.cos()),
            y: r * ((1.0 - k) * t.sin() + l * k * inner.sin()),
        }
    }
}

/// A spirograph traversed at its own rate: `time ↦ shape(time * speed + phase)`.
/// Negative speed runs the path backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiroPath {
    pub shape: Spirograph,
    pub speed: f64,
    pub phase: f64,
}

impl PositionSource for SpiroPath {
    #[inline]
    fn at(&self, time: f64) -> Point {
        self.shape.at(time * self.speed + self.phase)
    }
}

/// What a ball is bound to. Plain data so it can be inspected and copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Never moves.
    Fixed(Point),
    Spiro(SpiroPath),
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Fixed(Point::default())
    }
}

impl PositionSource for Motion {
    fn at(&self, time: f64) -> Point {
        match self {
            Motion::Fixed(p) => *p,
            Motion::Spiro(path) => path.at(time),
        }
    }
}
