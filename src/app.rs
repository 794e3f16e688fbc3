use std::time::{Duration, Instant};

use ggez::event::EventHandler;
use ggez::graphics;
use ggez::{Context, GameResult};
use glam::Vec2;
use rand::SeedableRng;
use tracing::info;

use crate::draw::draw_flock;
use crate::flock::Flock;
use crate::panel::{PanelInput, ParameterPanel};
use crate::params::FlockParams;
use crate::theme::Theme;
use crate::util::*;

/// Caps the frame rate by sleeping out whatever is left of each frame.
pub struct FramePacer {
    frame_time: Duration,
    frame_end: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        FramePacer {
            frame_time: Duration::from_secs(1) / target_fps,
            frame_end: Instant::now(),
        }
    }

    /// Time still to wait when `elapsed` has passed since the previous frame ended.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_time.saturating_sub(elapsed)
    }

    pub fn wait(&mut self) {
        let remaining = self.remaining(self.frame_end.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_end = Instant::now();
    }
}

pub struct MainState {
    flock: Flock,
    params: FlockParams,
    panel: ParameterPanel,
    theme: Theme,
    pacer: FramePacer,
}

impl MainState {
    pub fn new(rect_max: Vec2) -> GameResult<MainState> {
        let mut rng = rand_chacha::ChaCha8Rng::from_entropy();
        let flock = Flock::new_random(&mut rng, rect_max);
        let theme = Theme::terminal();
        info!(
            boids = flock.len(),
            width = rect_max.x,
            height = rect_max.y,
            fps = TARGET_FPS,
            "flock initialized"
        );
        Ok(MainState {
            flock,
            params: FlockParams::default(),
            panel: ParameterPanel::new(),
            theme,
            pacer: FramePacer::new(TARGET_FPS),
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        tracy_scope!("update");
        let dt = ctx.time.delta().as_secs_f32();
        self.flock.update(dt, &self.params);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        tracy_scope!("draw");
        let mut canvas = graphics::Canvas::from_frame(ctx, self.theme.background);

        draw_flock(ctx, &mut canvas, &self.flock)?;

        // Edits land in `params` now and are read by the next update.
        let input = PanelInput::from_context(ctx);
        self.panel.interact(&input, &mut self.params);
        self.panel
            .draw(ctx, &mut canvas, &self.params, &self.theme, input.cursor)?;

        canvas.finish(ctx)?;

        // Steering is applied once per frame, so the rate has to stay fixed.
        self.pacer.wait();

        tracy_client::frame_mark();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacer_waits_out_the_rest_of_the_frame() {
        let pacer = FramePacer::new(TARGET_FPS);
        let frame = Duration::from_secs(1) / 60;
        assert_eq!(pacer.remaining(Duration::ZERO), frame);
        assert_eq!(
            pacer.remaining(Duration::from_millis(10)),
            frame - Duration::from_millis(10)
        );
    }

    #[test]
    fn pacer_does_not_wait_after_a_slow_frame() {
        let pacer = FramePacer::new(TARGET_FPS);
        assert_eq!(pacer.remaining(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn wait_holds_the_loop_to_the_target_rate() {
        let mut pacer = FramePacer::new(TARGET_FPS);
        pacer.wait();
        let start = Instant::now();
        for _ in 0..3 {
            pacer.wait();
        }
        // Three frames at 60 FPS take at least 50 ms.
        assert!(start.elapsed() >= Duration::from_millis(49));
    }
}
