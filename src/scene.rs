// The animation driver: owns the ball pool and the surface, and renders one
// frame whenever a scheduler asks for it.
// Visual per frame: clear -> move + paint every ball -> threshold -> show.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::{error, trace, warn};

use crate::ball::{MetaBall, spawn_balls};
use crate::config::SceneConfig;
use crate::error::Error;
use crate::render::draw_metaball;
use crate::surface::{Surface, Transform};
use crate::threshold::threshold;
use crate::types::PixelBuffer;

/// Something that wants to run once per display refresh.
pub trait FrameTask {
    /// Render the frame for `timestamp` (ms since the scheduler started).
    fn frame(&mut self, timestamp: f64) -> Result<(), Error>;

    /// The image to show after the last `frame` call.
    fn image(&self) -> &PixelBuffer;
}

/// Drives a [`FrameTask`] with monotonically non-decreasing timestamps until
/// the scheduler itself decides to stop (e.g. the window was closed).
pub trait FrameScheduler {
    fn run(&mut self, task: &mut dyn FrameTask) -> Result<(), Error>;
}

/// Wall-clock milliseconds since the Unix epoch.
/// A clock set before 1970 yields 0; motion depends only on time differences.
pub fn now_ms() -> f64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64() * 1000.0,
        Err(e) => {
            warn!(%e, "system clock is before the Unix epoch, using 0 as time origin");
            0.0
        }
    }
}

pub struct Scene {
    balls: Vec<MetaBall>,
    surface: Surface,
    alpha_threshold: f64,
    /// Added to every scheduler timestamp before it reaches the balls.
    time_origin: f64,
}

impl Scene {
    /// Fixed pool; it is never grown or shrunk afterwards.
    pub fn new(cfg: &SceneConfig, balls: Vec<MetaBall>, time_origin: f64) -> Result<Self, Error> {
        let transform = Transform::centered(cfg.width, cfg.height, cfg.scale);
        let surface = Surface::new(cfg.width, cfg.height, transform)?;
        Ok(Self { balls, surface, alpha_threshold: cfg.alpha_threshold, time_origin })
    }

    /// Random pool, time origin = now.
    pub fn random<R: Rng>(cfg: &SceneConfig, rng: &mut R) -> Result<Self, Error> {
        let balls = spawn_balls(rng, cfg);
        Self::new(cfg, balls, now_ms())
    }

    pub fn balls(&self) -> &[MetaBall] {
        &self.balls
    }

    #[cfg(test)]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn time_origin(&self) -> f64 {
        self.time_origin
    }

    /// One full frame at absolute `time`.
    pub fn render(&mut self, time: f64) -> Result<(), Error> {
        self.surface.clear();

        // pool order, every frame
        for ball in &mut self.balls {
            ball.update(time);
            draw_metaball(&mut self.surface, ball)?;
        }

        let mask = threshold(&self.surface, self.alpha_threshold);
        self.surface.write_pixels(mask)
    }
}

impl FrameTask for Scene {
    fn frame(&mut self, timestamp: f64) -> Result<(), Error> {
        let time = self.time_origin + timestamp;
        trace!(timestamp, time, "frame");
        self.render(time).inspect_err(|e| error!(%e, time, "frame failed"))
    }

    fn image(&self) -> &PixelBuffer {
        self.surface.pixels()
    }
}

/// Headless scheduler: feeds a fixed list of timestamps, then stops.
#[cfg(test)]
pub struct StepScheduler {
    timestamps: Vec<f64>,
}

#[cfg(test)]
impl StepScheduler {
    pub fn new(timestamps: impl Into<Vec<f64>>) -> Self {
        Self { timestamps: timestamps.into() }
    }

    /// `count` frames spaced `step_ms` apart, starting at 0.
    pub fn every(step_ms: f64, count: usize) -> Self {
        Self::new((0..count).map(|i| i as f64 * step_ms).collect::<Vec<_>>())
    }
}

#[cfg(test)]
impl FrameScheduler for StepScheduler {
    fn run(&mut self, task: &mut dyn FrameTask) -> Result<(), Error> {
        for &ts in &self.timestamps {
            task.frame(ts)?;
        }
        Ok(())
    }
}
