// Builds a fresh particle field for a canvas. Randomness comes from the
// caller so that runs can be pinned to a seed.

use crate::palette::Palette;
use crate::particle::Particle;
use crate::store::ParticleStore;
use rand::Rng;
use std::f64::consts::PI;

pub const MIN_RADIUS: u32 = 35;
pub const MAX_RADIUS: u32 = 75;
pub const MOVE_SPEED: f64 = 1.0;

pub fn initialize<R: Rng>(
    width: u32,
    height: u32,
    count: i32,
    palette: Palette,
    rng: &mut R,
) -> ParticleStore {
    let count = count.max(0) as usize;
    let mut particles = Vec::with_capacity(count);
    for i in 0..count {
        let radius = rng.gen_range(MIN_RADIUS, MAX_RADIUS + 1) as f64;
        let angle = rng.gen_range(0.0, 2.0 * PI);
        let vel_x = angle.cos() * MOVE_SPEED;
        let vel_y = angle.sin() * MOVE_SPEED;
        let pos_x = spawn_coordinate(rng, width as f64, radius);
        let pos_y = spawn_coordinate(rng, height as f64, radius);

        let mut p = Particle::new(pos_x, pos_y, vel_x, vel_y, radius);
        p.color_index = i % palette.len();
        p.next_color_index = palette.successor(p.color_index);
        particles.push(p);
    }
    ParticleStore::new(width, height, palette, particles)
}

// Uniform in [radius, extent - radius]; the canvas center when the disc is
// wider than the canvas.
fn spawn_coordinate<R: Rng>(rng: &mut R, extent: f64, radius: f64) -> f64 {
    let span = extent - 2.0 * radius;
    if span < 0.0 {
        extent / 2.0
    } else {
        radius + rng.gen::<f64>() * span
    }
}
