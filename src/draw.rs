// Window + the display-refresh scheduler that drives the scene.
// Visual: a white window with black blobs that drift and merge.

use std::time::{Duration, Instant};

use minifb::{Window, WindowOptions};
use tracing::info;

use crate::error::Error;
use crate::scene::{FrameScheduler, FrameTask};
use crate::types::PixelBuffer;

pub struct Drawer {
    window: Window,
    width: usize,
    height: usize,
    screen: Vec<u32>,    // 0x00RRGGBB for minifb, reused every frame
}

impl Drawer {
    /// Open a `width x height` window, capped at `fps` updates per second.
    /// Visual: blank until the first mask is presented.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, width, height, screen: vec![0u32; width * height] })
    }

    /// Push an RGBA image to the screen, laid over a white page.
    pub fn present(&mut self, image: &PixelBuffer) -> Result<(), Error> {
        let actual = image.dimensions();
        if (actual.0 as usize, actual.1 as usize) != (self.width, self.height) {
            return Err(Error::SizeMismatch {
                expected: (self.width as u32, self.height as u32),
                actual,
            });
        }

        for (out, px) in self.screen.iter_mut().zip(image.pixels()) {
            *out = over_white(px.0);
        }

        self.window
            .update_with_buffer(&self.screen, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// False once the window is gone; the scheduler stops there.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

/// Blend one non-premultiplied RGBA pixel over white and pack as 0x00RRGGBB.
#[inline]
fn over_white([r, g, b, a]: [u8; 4]) -> u32 {
    let a = a as u32;
    let ch = |c: u8| (c as u32 * a + 255 * (255 - a) + 127) / 255;
    (ch(r) << 16) | (ch(g) << 8) | ch(b)
}

/// Calls the task once per window refresh until the window goes away.
/// Timestamps are milliseconds since `run` started.
pub struct WindowScheduler {
    drawer: Drawer,
}

impl WindowScheduler {
    pub fn new(drawer: Drawer) -> Self {
        Self { drawer }
    }
}

impl FrameScheduler for WindowScheduler {
    fn run(&mut self, task: &mut dyn FrameTask) -> Result<(), Error> {
        let started = Instant::now();
        let mut last_fps_time = started;
        let mut frames_this_second: u32 = 0;

        while self.drawer.is_open() {
            let now = Instant::now();
            let timestamp = now.duration_since(started).as_secs_f64() * 1000.0;

            task.frame(timestamp)?;
            self.drawer.present(task.image())?;

            // FPS report once per second
            frames_this_second += 1;
            let since = now.duration_since(last_fps_time);
            if since >= Duration::from_secs(1) {
                let fps = frames_this_second as f32 / since.as_secs_f32();
                info!("FPS: {:.1}", fps);
                frames_this_second = 0;
                last_fps_time = now;
            }
        }
        info!("window closed, stopping");
        Ok(())
    }
}
