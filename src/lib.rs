pub mod app;
pub mod draw;
pub mod flock;
pub mod panel;
pub mod params;
pub mod theme;
pub mod util;

pub use app::MainState;
pub use flock::{Boid, Flock};
pub use params::{FlockParams, Tunable};
