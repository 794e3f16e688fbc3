use boids_tuner_rs::util::{SCREEN_H, SCREEN_W};
use boids_tuner_rs::{Flock, FlockParams};
use divan::Bencher;
use glam::Vec2;
use rand::SeedableRng;

fn main() {
    divan::main();
}

#[divan::bench]
fn update_flock(bencher: Bencher) {
    let mut rng = rand_chacha::ChaCha8Rng::from_seed([0; 32]);
    let mut flock: Flock = Flock::new_random(&mut rng, Vec2::new(SCREEN_W, SCREEN_H));
    let params = FlockParams::default();

    bencher.bench_local(|| flock.update(1.0 / 60.0, &params));
}

#[divan::bench]
fn spawn_flock(bencher: Bencher) {
    let mut rng = rand_chacha::ChaCha8Rng::from_seed([0; 32]);
    bencher.bench_local(|| {
        let flock: Flock = Flock::new_random(&mut rng, Vec2::new(SCREEN_W, SCREEN_H));
        divan::black_box(flock)
    });
}
