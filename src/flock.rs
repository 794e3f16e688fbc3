//! Agent store and the per-frame flocking update.

use glam::Vec2;
use rand::Rng;
use tracing::trace;

use crate::params::FlockParams;
use crate::util::*;

/// A single flocking agent. Its identity is its slot in the [`Flock`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Boid {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Boid { position, velocity }
    }

    fn new_random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        // Whole-pixel positions and whole-unit velocities.
        let position = Vec2::new(
            rng.gen_range(0..=bounds.x as i32) as f32,
            rng.gen_range(0..=bounds.y as i32) as f32,
        );
        let velocity = Vec2::new(
            rng.gen_range(-SPAWN_SPEED..=SPAWN_SPEED) as f32,
            rng.gen_range(-SPAWN_SPEED..=SPAWN_SPEED) as f32,
        );
        Boid::new(position, velocity)
    }

    /// Sum of offsets away from every boid closer than [`SEPARATION_RANGE`].
    ///
    /// Self is not skipped by slot; its zero offset adds nothing.
    #[inline(never)]
    pub fn separation(&self, boids: &[Boid]) -> Vec2 {
        let mut separation = Vec2::ZERO;
        for other in boids {
            if self.position.distance(other.position) < SEPARATION_RANGE {
                separation += self.position - other.position;
            }
        }
        separation
    }

    /// Velocity change steering towards the mean velocity of visible neighbours.
    #[inline(never)]
    pub fn alignment(&self, boids: &[Boid], self_idx: usize, factor: f32) -> Vec2 {
        let mut perceived_velocity = Vec2::ZERO;
        let mut total = 0;

        for (other_idx, other) in boids.iter().enumerate() {
            if other_idx != self_idx && self.position.distance(other.position) < VISUAL_RANGE {
                perceived_velocity += other.velocity;
                total += 1;
            }
        }

        if total > 0 {
            perceived_velocity /= total as f32;
        }
        (perceived_velocity - self.velocity) * factor
    }

    /// Velocity change steering towards the centroid of visible neighbours.
    ///
    /// With no neighbours the centroid falls back to the origin.
    #[inline(never)]
    pub fn cohesion(&self, boids: &[Boid], self_idx: usize, factor: f32) -> Vec2 {
        let mut perceived_centre = Vec2::ZERO;
        let mut total = 0;

        for (other_idx, other) in boids.iter().enumerate() {
            if other_idx != self_idx && self.position.distance(other.position) < VISUAL_RANGE {
                perceived_centre += other.position;
                total += 1;
            }
        }

        if total > 0 {
            perceived_centre /= total as f32;
        }
        (perceived_centre - self.position) * factor
    }

    pub fn avoid_edges(&mut self, bounds: Vec2, turn_factor: f32) {
        if self.position.x < SCREEN_MARGIN {
            self.velocity.x += turn_factor;
        }
        if self.position.x > bounds.x - SCREEN_MARGIN {
            self.velocity.x -= turn_factor;
        }
        if self.position.y < SCREEN_MARGIN {
            self.velocity.y += turn_factor;
        }
        if self.position.y > bounds.y - SCREEN_MARGIN {
            self.velocity.y -= turn_factor;
        }
    }

    /// Rescales the velocity into `[MIN_SPEED, MAX_SPEED]`. A zero velocity has
    /// no direction to rescale along and is left as is.
    pub fn limit_speed(&mut self) {
        let speed = self.velocity.length();
        if speed == 0.0 {
            trace!(position = ?self.position, "zero velocity left unclamped");
            return;
        }

        if speed > MAX_SPEED {
            self.velocity = (self.velocity / speed) * MAX_SPEED;
        } else if speed < MIN_SPEED {
            self.velocity = (self.velocity / speed) * MIN_SPEED;
        }
    }

    /// Applies the five steering stages in order. Each stage sees the
    /// velocity left by the previous one.
    pub(crate) fn steer(
        &mut self,
        self_idx: usize,
        boids: &[Boid],
        bounds: Vec2,
        params: &FlockParams,
    ) {
        self.velocity += self.separation(boids) * params.avoidance_factor;
        self.velocity += self.alignment(boids, self_idx, params.alignment_factor);
        self.velocity += self.cohesion(boids, self_idx, params.centring_factor);
        self.avoid_edges(bounds, params.turn_factor);
        self.limit_speed();
    }

    pub(crate) fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

/// Fixed-size flock. Created once and never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct Flock<const N: usize = BOID_COUNT> {
    boids: [Boid; N],
    bounds: Vec2,
}

impl<const N: usize> Flock<N> {
    pub fn new_random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let boids = std::array::from_fn(|_| Boid::new_random(&mut *rng, bounds));
        Flock { boids, bounds }
    }

    pub fn from_boids(boids: [Boid; N], bounds: Vec2) -> Self {
        Flock { boids, bounds }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boid(&self, idx: usize) -> &Boid {
        &self.boids[idx]
    }

    pub fn boid_mut(&mut self, idx: usize) -> &mut Boid {
        &mut self.boids[idx]
    }

    /// Advances every boid by one step of `dt` seconds, in slot order.
    ///
    /// Boids are written back as soon as they are updated, so a boid later in
    /// the order steers against the already-moved earlier ones. With the
    /// `snapshot_update` feature every boid steers against the state at the
    /// start of the frame instead.
    pub fn update(&mut self, dt: f32, params: &FlockParams) {
        tracy_scope!("update_boids");

        #[cfg(feature = "snapshot_update")]
        let snapshot = self.boids;

        for boid_idx in 0..N {
            #[cfg(feature = "snapshot_update")]
            let neighbours = &snapshot;
            #[cfg(not(feature = "snapshot_update"))]
            let neighbours = &self.boids;

            let mut boid = self.boids[boid_idx];
            boid.steer(boid_idx, neighbours, self.bounds, params);
            boid.integrate(dt);
            self.boids[boid_idx] = boid;
        }
    }
}
