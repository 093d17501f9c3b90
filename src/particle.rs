// Simple particle struct to keep track of an individual disc: position,
// velocity, size, and where it is in its color fade

use crate::palette::Palette;
use glm::DVec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color_index: usize,
    pub next_color_index: usize,
    pub fade_t: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: glm::vec2(pos_x, pos_y),
            vel: glm::vec2(vel_x, vel_y),
            radius,
            color_index: 0,
            next_color_index: 1,
            fade_t: 0.0,
        }
    }

    pub fn integrate(&mut self, speed_multiplier: f64, delta: f64) {
        self.pos += self.vel * (speed_multiplier * delta);
    }

    /// Clamps the disc back onto the canvas and flips the velocity component
    /// of any axis whose edge it touched. No sub-step backtracking.
    pub fn reflect(&mut self, width: f64, height: f64) {
        if self.pos.x - self.radius <= 0.0 {
            self.pos.x = self.radius;
            self.vel.x *= -1.0;
        } else if self.pos.x + self.radius >= width {
            self.pos.x = width - self.radius;
            self.vel.x *= -1.0;
        }
        if self.pos.y - self.radius <= 0.0 {
            self.pos.y = self.radius;
            self.vel.y *= -1.0;
        } else if self.pos.y + self.radius >= height {
            self.pos.y = height - self.radius;
            self.vel.y *= -1.0;
        }
    }

    /// Moves the fade forward; on completion the next color becomes current
    /// and the fade restarts towards its cyclic successor.
    pub fn advance_fade(&mut self, fade_speed: f64, delta: f64, palette: &Palette) {
        self.fade_t += fade_speed * delta;
        if self.fade_t >= 1.0 {
            self.fade_t = 0.0;
            self.color_index = self.next_color_index;
            self.next_color_index = palette.successor(self.next_color_index);
        }
    }

    // Position-only clamp, velocity is left alone
    pub fn contain(&mut self, width: f64, height: f64) {
        if self.pos.x < self.radius {
            self.pos.x = self.radius;
        } else if self.pos.x > width - self.radius {
            self.pos.x = width - self.radius;
        }
        if self.pos.y < self.radius {
            self.pos.y = self.radius;
        } else if self.pos.y > height - self.radius {
            self.pos.y = height - self.radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_off_left_wall() {
        let mut p = Particle::new(12.0, 50.0, -5.0, 0.0, 10.0);
        p.integrate(1.0, 1.0);
        assert_eq!(p.pos.x, 7.0);
        p.reflect(100.0, 100.0);
        assert_eq!(p.pos.x, 10.0);
        assert_eq!(p.vel.x, 5.0);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn bounce_off_bottom_edge_keeps_other_component() {
        let mut p = Particle::new(50.0, 85.0, 3.0, 4.0, 10.0);
        p.integrate(2.0, 1.0);
        p.reflect(100.0, 100.0);
        assert_eq!(p.pos, glm::vec2(56.0, 90.0));
        assert_eq!(p.vel, glm::vec2(3.0, -4.0));
    }

    #[test]
    fn touching_an_edge_counts_as_a_bounce() {
        let mut p = Particle::new(90.0, 50.0, 1.0, 0.0, 10.0);
        p.reflect(100.0, 100.0);
        assert_eq!(p.pos.x, 90.0);
        assert_eq!(p.vel.x, -1.0);
    }

    #[test]
    fn corner_hit_flips_both_axes() {
        let mut p = Particle::new(5.0, 5.0, -1.0, -2.0, 10.0);
        p.reflect(100.0, 100.0);
        assert_eq!(p.pos, glm::vec2(10.0, 10.0));
        assert_eq!(p.vel, glm::vec2(1.0, 2.0));
    }

    #[test]
    fn fade_wraps_to_next_color() {
        let palette = Palette::default();
        let mut p = Particle::new(50.0, 50.0, 0.0, 0.0, 10.0);
        p.fade_t = 0.95;
        p.advance_fade(0.1, 1.0, &palette);
        assert_eq!(p.fade_t, 0.0);
        assert_eq!(p.color_index, 1);
        assert_eq!(p.next_color_index, 2);
    }

    #[test]
    fn fade_wraps_around_the_palette_end() {
        let palette = Palette::default();
        let mut p = Particle::new(50.0, 50.0, 0.0, 0.0, 10.0);
        p.color_index = 12;
        p.next_color_index = 13;
        p.fade_t = 0.9;
        p.advance_fade(0.2, 1.0, &palette);
        assert_eq!(p.color_index, 13);
        assert_eq!(p.next_color_index, 0);
    }

    #[test]
    fn contain_clamps_without_touching_velocity() {
        let mut p = Particle::new(-3.0, 120.0, 2.0, 2.0, 10.0);
        p.contain(100.0, 100.0);
        assert_eq!(p.pos, glm::vec2(10.0, 90.0));
        assert_eq!(p.vel, glm::vec2(2.0, 2.0));
    }
}
