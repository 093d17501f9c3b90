#[macro_use]
mod utils;

pub mod clock;
pub mod color;
pub mod initializer;
pub mod palette;
pub mod particle;
pub mod renderer;
pub mod settings;
pub mod simulator;
pub mod store;

extern crate nalgebra_glm as glm;

use clock::FrameClock;
use color::Color;
use palette::Palette;
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{Framebuffer, RenderMode};
use settings::{Settings, SettingsError, WebStorage};
use simulator::SimParams;
use store::ParticleStore;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

const BACKGROUND: Color = Color::rgb(0, 0, 0);

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::time_end_with_label(self.name);
    }
}

// Wall-clock seed, so every reinit lays out a different field
#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// A bouncing particle field bound to one canvas.
///
/// The page calls `tick` from its animation frame callback and then `render`
/// (or reads `snapshot` and draws the rings itself).
#[wasm_bindgen]
pub struct BounceField {
    store: ParticleStore,
    settings: Settings,
    clock: FrameClock,
    framebuffer: Framebuffer,
    mode: RenderMode,
    rng: StdRng,
}

#[wasm_bindgen]
impl BounceField {
    pub fn new(width: u32, height: u32) -> BounceField {
        BounceField::build(width, height, Settings::default(), clock_seed())
    }

    pub fn seeded(width: u32, height: u32, seed: u64) -> BounceField {
        BounceField::build(width, height, Settings::default(), seed)
    }

    pub fn with_settings(
        width: u32,
        height: u32,
        num_circles: i32,
        speed_multiplier: f64,
        fade_speed: f64,
    ) -> Result<BounceField, JsValue> {
        let settings = Settings {
            num_circles,
            speed_multiplier,
            fade_speed,
        };
        settings.validate()?;
        Ok(BounceField::build(width, height, settings, clock_seed()))
    }

    pub fn from_local_storage(width: u32, height: u32) -> Result<BounceField, JsValue> {
        let storage = WebStorage::local()?;
        let settings = Settings::load(&storage);
        log!(
            "loaded settings: {} circles, speed {}, fade {}",
            settings.num_circles,
            settings.speed_multiplier,
            settings.fade_speed
        );
        Ok(BounceField::build(width, height, settings, clock_seed()))
    }

    pub fn save_settings(&self) -> Result<(), JsValue> {
        let mut storage = WebStorage::local()?;
        self.settings.save(&mut storage)?;
        Ok(())
    }

    /// Validates and applies new settings. The field is rebuilt so the new
    /// particle count takes effect immediately.
    pub fn apply_settings(
        &mut self,
        num_circles: i32,
        speed_multiplier: f64,
        fade_speed: f64,
    ) -> Result<(), JsValue> {
        self.update_settings(Settings {
            num_circles,
            speed_multiplier,
            fade_speed,
        })?;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.rng = StdRng::seed_from_u64(clock_seed());
        self.reinitialize(width, height);
    }

    /// Advances the field using the time elapsed since the previous tick.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let delta = self.clock.tick(timestamp_ms);
        self.step(delta);
    }

    pub fn step(&mut self, delta: f64) {
        let _timer = Timer::new("BounceField::step");
        self.store.step(delta, &SimParams::from(&self.settings));
    }

    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let _timer = Timer::new("BounceField::render");
        self.draw();
        self.framebuffer.present(ctx)
    }

    /// Flat `[x, y, radius, rgba]` quadruples, one per particle, with the
    /// color packed as `0xRRGGBBAA`.
    pub fn snapshot(&self) -> js_sys::Float64Array {
        let flat = self.snapshot_values();
        js_sys::Float64Array::from(flat.as_slice())
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.mode = if filled {
            RenderMode::Filled
        } else {
            RenderMode::Rings
        };
    }

    pub fn pause(&mut self) {
        self.clock.reset();
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn width(&self) -> u32 {
        self.store.width()
    }

    pub fn height(&self) -> u32 {
        self.store.height()
    }
}

impl BounceField {
    pub fn build(width: u32, height: u32, settings: Settings, seed: u64) -> BounceField {
        let mut rng = StdRng::seed_from_u64(seed);
        let store = initializer::initialize(
            width,
            height,
            settings.num_circles,
            Palette::default(),
            &mut rng,
        );
        BounceField {
            store,
            settings,
            clock: FrameClock::new(),
            framebuffer: Framebuffer::new(width, height),
            mode: RenderMode::default(),
            rng,
        }
    }

    pub fn update_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        self.reinitialize(self.store.width(), self.store.height());
        Ok(())
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn draw(&mut self) {
        self.framebuffer.clear(BACKGROUND);
        self.framebuffer.draw_particles(self.store.snapshot(), self.mode);
    }

    pub fn snapshot_values(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.store.len() * 4);
        for view in self.store.snapshot() {
            flat.extend_from_slice(&[view.x, view.y, view.radius, view.color.to_u32() as f64]);
        }
        flat
    }

    // Replaces the whole field; nothing from the old particles carries over
    fn reinitialize(&mut self, width: u32, height: u32) {
        self.store = initializer::initialize(
            width,
            height,
            self.settings.num_circles,
            Palette::default(),
            &mut self.rng,
        );
        if self.framebuffer.width() != width || self.framebuffer.height() != height {
            self.framebuffer = Framebuffer::new(width, height);
        }
        self.clock.reset();
        log!(
            "field reset to {}x{} with {} particles",
            width,
            height,
            self.store.len()
        );
    }
}
