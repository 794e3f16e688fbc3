pub const BOID_COUNT: usize = 100;

pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 450.0;
pub const TARGET_FPS: u32 = 60;

pub const SCREEN_MARGIN: f32 = 50.0;
pub const MAX_SPEED: f32 = 200.0;
pub const MIN_SPEED: f32 = 100.0;
pub const SEPARATION_RANGE: f32 = 20.0;
pub const VISUAL_RANGE: f32 = 40.0;

// Spawn velocity is drawn per axis from [-SPAWN_SPEED, SPAWN_SPEED].
pub const SPAWN_SPEED: i32 = 150;

pub const BOID_HALF_HEIGHT: f32 = 10.0;
pub const BOID_HALF_BASE: f32 = 10.0;

#[cfg(feature = "profile")]
macro_rules! tracy_scope {
    ($name:literal) => {
        let _tracy_span = tracy_client::span!($name);
    };
}

#[cfg(not(feature = "profile"))]
macro_rules! tracy_scope {
    ($name:literal) => {};
}

pub(crate) use tracy_scope;
