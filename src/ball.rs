// Metaballs: a position plus two radii, moved by a bound `Motion`.

use rand::Rng;
use tracing::debug;

use crate::config::SceneConfig;
use crate::spirograph::{Motion, PositionSource, Spirograph};

/// One blob.
/// Visual: solid black out to `r1`, fading to nothing at `r2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaBall {
    pub x: f64,
    pub y: f64,
    /// Inner radius (user units). Expected `0 <= r1 <= r2`; not checked.
    pub r1: f64,
    /// Outer radius (user units).
    pub r2: f64,
    pub motion: Motion,
}

impl Default for MetaBall {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, r1: 0.0, r2: 1.0, motion: Motion::default() }
    }
}

impl MetaBall {
    pub fn new(r1: f64, r2: f64, motion: Motion) -> Self {
        Self { r1, r2, motion, ..Self::default() }
    }

    /// Move to wherever the motion says we are at `time`.
    /// Depends only on `time`, never on the previous position.
    pub fn update(&mut self, time: f64) {
        let p = self.motion.at(time);
        self.x = p.x;
        self.y = p.y;
    }
}

/// Build the startup pool: random radii, random spirograph, random speed in
/// [-1/D, 1/D) per ball. Nothing is re-randomized after this.
pub fn spawn_balls<R: Rng>(rng: &mut R, cfg: &SceneConfig) -> Vec<MetaBall> {
    let (r1_min, r1_max) = cfg.inner_radius;
    let (r2_min, r2_max) = cfg.outer_radius;

    (0..cfg.num_balls)
        .map(|i| {
            let shape = Spirograph::new(cfg.spirograph_radius, rng.r#gen::<f64>(), rng.r#gen::<f64>());
            let speed = (rng.r#gen::<f64>() * 2.0 - 1.0) / cfg.time_dilation;
            let r1 = r1_min + rng.r#gen::<f64>() * (r1_max - r1_min);
            let r2 = r2_min + rng.r#gen::<f64>() * (r2_max - r2_min);
            debug!(ball = i, k = shape.k, l = shape.l, speed, r1, r2, "spawned metaball");
            MetaBall::new(r1, r2, Motion::Spiro(shape.with_speed(speed)))
        })
        .collect()
}
