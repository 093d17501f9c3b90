use crate::color::Color;
use crate::palette::Palette;
use crate::particle::Particle;
use crate::simulator::{self, SimParams};

/// The live particle field: a fixed set of particles, the canvas they bounce
/// inside, and the palette their color indices refer to.
///
/// Built by [`crate::initializer::initialize`] and replaced wholesale when the
/// canvas changes size; nothing is ever added or removed in between.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStore {
    pub(crate) particles: Vec<Particle>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) palette: Palette,
}

/// Read-only view of one particle for a render pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl ParticleStore {
    pub fn new(width: u32, height: u32, palette: Palette, particles: Vec<Particle>) -> ParticleStore {
        ParticleStore {
            particles,
            width,
            height,
            palette,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn color_of(&self, particle: &Particle) -> Color {
        self.palette
            .blend(particle.color_index, particle.next_color_index, particle.fade_t)
    }

    pub fn snapshot(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.particles.iter().map(move |p| ParticleView {
            x: p.pos.x,
            y: p.pos.y,
            radius: p.radius,
            color: self.color_of(p),
        })
    }

    pub fn step(&mut self, delta: f64, params: &SimParams) {
        simulator::advance(self, delta, params.speed_multiplier, params.fade_speed);
    }
}
