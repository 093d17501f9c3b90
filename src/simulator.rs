// One tick of the particle field: move, bounce off walls, fade colors, then
// resolve overlapping pairs

use crate::particle::Particle;
use crate::settings::{Settings, DEFAULT_FADE_SPEED, DEFAULT_SPEED_MULTIPLIER};
use crate::store::ParticleStore;
use std::mem;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimParams {
    pub speed_multiplier: f64,
    pub fade_speed: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            fade_speed: DEFAULT_FADE_SPEED,
        }
    }
}

impl From<&Settings> for SimParams {
    fn from(settings: &Settings) -> Self {
        SimParams {
            speed_multiplier: settings.speed_multiplier,
            fade_speed: settings.fade_speed,
        }
    }
}

/// Advances every particle by `delta` seconds.
///
/// The order is fixed: integration, wall reflection and fade for each
/// particle, then a single ascending pass over all pairs. A particle caught in
/// several overlaps sees the results of the earlier pairs when the later ones
/// are resolved. Any particle a separation pushed past a wall is finally
/// clamped back inside, position only.
pub fn advance(store: &mut ParticleStore, delta: f64, speed_multiplier: f64, fade_speed: f64) {
    let width = store.width as f64;
    let height = store.height as f64;
    let ParticleStore {
        particles, palette, ..
    } = store;

    for particle in particles.iter_mut() {
        particle.integrate(speed_multiplier, delta);
        particle.reflect(width, height);
        particle.advance_fade(fade_speed, delta, palette);
    }

    resolve_collisions(particles);

    for particle in particles.iter_mut() {
        particle.contain(width, height);
    }
}

pub fn resolve_collisions(particles: &mut [Particle]) {
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = particles.split_at_mut(j);
            collide(&mut head[i], &mut tail[0]);
        }
    }
}

/// Swaps velocities of two overlapping discs and pushes them apart along the
/// line between their centers until they just touch. Coincident centers only
/// swap. Returns whether the pair overlapped.
pub fn collide(a: &mut Particle, b: &mut Particle) -> bool {
    let delta = a.pos - b.pos;
    let dist_sq = glm::length2(&delta);
    let min_dist = a.radius + b.radius;
    if dist_sq >= min_dist * min_dist {
        return false;
    }

    mem::swap(&mut a.vel, &mut b.vel);

    let dist = dist_sq.sqrt();
    if dist > 0.0 {
        let half_overlap = (min_dist - dist) / 2.0;
        let angle = delta.y.atan2(delta.x);
        let push = glm::vec2(angle.cos(), angle.sin()) * half_overlap;
        a.pos += push;
        b.pos -= push;
    }
    true
}
