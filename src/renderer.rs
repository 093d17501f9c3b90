// Software renderer: keeps an RGBA pixel buffer the size of the canvas, draws
// particles into it as beveled rings, and hands the finished frame to a 2d
// canvas context.

use crate::color::Color;
use crate::store::ParticleView;
use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

pub const OUTER_STROKE: f64 = 6.0;
pub const INNER_STROKE: f64 = 2.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Rings,
    Filled,
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::Rings
    }
}

pub struct Framebuffer {
    width: u32,
    height: u32,
    pixel_data: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Framebuffer {
        Framebuffer {
            width,
            height,
            pixel_data: vec![0x00; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.get_pixel_index(x, y).map(|idx| Color {
            r: self.pixel_data[idx],
            g: self.pixel_data[idx + 1],
            b: self.pixel_data[idx + 2],
            a: self.pixel_data[idx + 3],
        })
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.pixel_data.chunks_exact_mut(4) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
            pixel[3] = color.a;
        }
    }

    /// Paints every pixel whose center lies within `stroke_width / 2` of the
    /// circle of `radius` around (`cx`, `cy`).
    pub fn stroke_ring(&mut self, cx: f64, cy: f64, radius: f64, stroke_width: f64, color: Color) {
        let half = stroke_width / 2.0;
        let outer = radius + half;
        let inner = (radius - half).max(0.0);
        self.paint_annulus(cx, cy, inner, outer, color);
    }

    pub fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.paint_annulus(cx, cy, 0.0, radius, color);
    }

    pub fn draw_particles<I>(&mut self, views: I, mode: RenderMode)
    where
        I: IntoIterator<Item = ParticleView>,
    {
        for view in views {
            match mode {
                RenderMode::Rings => {
                    self.stroke_ring(view.x, view.y, view.radius, OUTER_STROKE, view.color.darken());
                    self.stroke_ring(view.x, view.y, view.radius, INNER_STROKE, view.color.lighten());
                }
                RenderMode::Filled => self.fill_disc(view.x, view.y, view.radius, view.color),
            }
        }
    }

    pub fn present(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let image_data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(self.pixel_data.as_slice()),
            self.width,
            self.height,
        )?;

        ctx.put_image_data(&image_data, 0.0, 0.0)
    }

    fn paint_annulus(&mut self, cx: f64, cy: f64, inner: f64, outer: f64, color: Color) {
        let x_min = (cx - outer).floor() as i32;
        let x_max = (cx + outer).ceil() as i32;
        let y_min = (cy - outer).floor() as i32;
        let y_max = (cy + outer).ceil() as i32;
        let inner_sq = inner * inner;
        let outer_sq = outer * outer;
        for pixel_y in y_min..=y_max {
            for pixel_x in x_min..=x_max {
                let dx = pixel_x as f64 + 0.5 - cx;
                let dy = pixel_y as f64 + 0.5 - cy;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq >= inner_sq && dist_sq <= outer_sq {
                    self.set_pixel(pixel_x, pixel_y, color);
                }
            }
        }
    }

    fn get_pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(((y * self.width as i32 + x) * 4) as usize)
        } else {
            None
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.get_pixel_index(x, y) {
            self.pixel_data[idx] = color.r;
            self.pixel_data[idx + 1] = color.g;
            self.pixel_data[idx + 2] = color.b;
            self.pixel_data[idx + 3] = color.a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::rgb(0, 0, 0);

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = Framebuffer::new(4, 3);
        fb.clear(Color::rgb(1, 2, 3));
        assert_eq!(fb.pixels().len(), 4 * 3 * 4);
        assert!(fb.pixels().chunks(4).all(|p| p == [1, 2, 3, 255]));
    }

    #[test]
    fn ring_leaves_center_untouched() {
        let mut fb = Framebuffer::new(100, 100);
        fb.clear(BLACK);
        let red = Color::rgb(255, 0, 0);
        fb.stroke_ring(50.0, 50.0, 20.0, 2.0, red);
        assert_eq!(fb.get_pixel(50, 50), Some(BLACK));
        // pixel (69, 49) has its center at (69.5, 49.5), 19.5 from the center
        assert_eq!(fb.get_pixel(69, 49), Some(red));
        assert_eq!(fb.get_pixel(49, 29), Some(red));
        assert_eq!(fb.get_pixel(75, 49), Some(BLACK));
    }

    #[test]
    fn beveled_ring_has_dark_outside_and_light_core() {
        let mut fb = Framebuffer::new(100, 100);
        fb.clear(BLACK);
        let color = Color::rgb(100, 60, 200);
        let view = ParticleView {
            x: 50.0,
            y: 50.0,
            radius: 30.0,
            color,
        };
        fb.draw_particles(vec![view], RenderMode::Rings);
        // 2.5 px outside the circle: only the wide outer stroke reaches it
        assert_eq!(fb.get_pixel(82, 49), Some(color.darken()));
        // on the circle: the narrow inner stroke is painted last
        assert_eq!(fb.get_pixel(79, 49), Some(color.lighten()));
        assert_eq!(fb.get_pixel(50, 50), Some(BLACK));
    }

    #[test]
    fn filled_mode_paints_the_center() {
        let mut fb = Framebuffer::new(40, 40);
        fb.clear(BLACK);
        let color = Color::rgb(0, 255, 0);
        let view = ParticleView {
            x: 20.0,
            y: 20.0,
            radius: 10.0,
            color,
        };
        fb.draw_particles(std::iter::once(view), RenderMode::Filled);
        assert_eq!(fb.get_pixel(20, 20), Some(color));
        assert_eq!(fb.get_pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn drawing_off_canvas_is_clipped() {
        let mut fb = Framebuffer::new(10, 10);
        fb.clear(BLACK);
        fb.stroke_ring(-50.0, -50.0, 20.0, 6.0, Color::rgb(9, 9, 9));
        fb.fill_disc(5.0, 5.0, 40.0, Color::rgb(7, 7, 7));
        assert!(fb.pixels().chunks(4).all(|p| p == [7, 7, 7, 255]));
        assert_eq!(fb.get_pixel(10, 0), None);
    }
}
