// What you SEE:
// • A white window with ten black blobs.
// • Each blob loops along its own spirograph path, some clockwise, some not.
// • Where two blobs' soft edges overlap they melt into one shape.
// Close the window to quit. There is no other input.

mod ball;
mod config;
mod draw;
mod error;
mod render;
mod scene;
mod spirograph;
mod surface;
mod threshold;
mod types;

use config::{SceneConfig, TARGET_FPS, WINDOW_TITLE};
use draw::{Drawer, WindowScheduler};
use error::Error;
use scene::{FrameScheduler, Scene};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_target(false).init();

    /* --- Scene: random ball pool + surface, time origin = now --- */
    let cfg = SceneConfig::default();
    let mut scene = Scene::random(&cfg, &mut rand::thread_rng())?;
    tracing::info!(
        balls = scene.balls().len(),
        time_origin = scene.time_origin(),
        width = cfg.width,
        height = cfg.height,
        threshold = cfg.alpha_threshold,
        "metaballs starting"
    );

    /* --- Window: shows the thresholded surface every refresh --- */
    let drawer = Drawer::new(WINDOW_TITLE, cfg.width as usize, cfg.height as usize, TARGET_FPS)?;

    /* --- Main loop: runs until the window is closed --- */
    WindowScheduler::new(drawer).run(&mut scene)
}
