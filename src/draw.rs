use ggez::graphics::{self, Color, DrawMode, DrawParam, MeshBuilder};
use ggez::{Context, GameResult};
use glam::Vec2;

use crate::flock::{Boid, Flock};
use crate::util::*;

pub const BOID_COLOR: Color = Color {
    r: 0.0,
    g: 228.0 / 255.0,
    b: 48.0 / 255.0,
    a: 1.0,
};

/// Facing angle for the boid triangle. The triangle's tip points along -y in
/// local space, hence the quarter turn.
pub fn heading(velocity: Vec2) -> f32 {
    velocity.y.atan2(velocity.x) + std::f32::consts::FRAC_PI_2
}

/// Tip, left and right corners of the triangle drawn for `boid`.
pub fn triangle_vertices(boid: &Boid) -> [Vec2; 3] {
    let rotation = Vec2::from_angle(heading(boid.velocity));
    [
        Vec2::new(0.0, -BOID_HALF_HEIGHT),
        Vec2::new(-BOID_HALF_BASE, BOID_HALF_HEIGHT),
        Vec2::new(BOID_HALF_BASE, BOID_HALF_HEIGHT),
    ]
    .map(|offset| rotation.rotate(offset) + boid.position)
}

pub fn draw_flock<const N: usize>(
    ctx: &mut Context,
    canvas: &mut graphics::Canvas,
    flock: &Flock<N>,
) -> GameResult {
    tracy_scope!("draw_boids");
    if flock.is_empty() {
        return Ok(());
    }

    let mut builder = MeshBuilder::new();
    for boid in flock.boids() {
        builder.polygon(DrawMode::fill(), &triangle_vertices(boid), BOID_COLOR)?;
    }
    let mesh = graphics::Mesh::from_data(ctx, builder.build());
    canvas.draw(&mesh, DrawParam::new());
    Ok(())
}
