use boids_tuner_rs::util::{SCREEN_H, SCREEN_W};
use boids_tuner_rs::MainState;
use ggez::conf::{NumSamples, WindowMode, WindowSetup};
use ggez::event::{self};
use ggez::{ContextBuilder, GameResult};
use glam::Vec2;
use tracing::info;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> GameResult {
    init_tracing();
    tracy_client::Client::start();

    // MainState caps the loop at TARGET_FPS.
    let (ctx, event_loop) = ContextBuilder::new("boids", "Author")
        .window_setup(
            WindowSetup::default()
                .title("Boids")
                .samples(NumSamples::Four)
                .vsync(false),
        )
        .window_mode(WindowMode::default().dimensions(SCREEN_W, SCREEN_H))
        .build()?;

    let state = MainState::new(Vec2::new(SCREEN_W, SCREEN_H))?;
    info!("starting boids");
    event::run(ctx, event_loop, state)
}
