//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use bouncing_rings::BounceField;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn snapshot_has_four_values_per_particle() {
    let field = BounceField::seeded(640, 480, 17);
    let snapshot = field.snapshot();
    assert_eq!(snapshot.length() as usize, field.particle_count() * 4);
}

#[wasm_bindgen_test]
fn ticks_keep_particles_on_canvas() {
    let mut field = BounceField::seeded(640, 480, 4);
    for frame in 0..240 {
        field.tick(frame as f64 * 16.0);
    }
    let values = field.snapshot().to_vec();
    for p in values.chunks(4) {
        let (x, y, r) = (p[0], p[1], p[2]);
        assert!(x >= r && x <= 640.0 - r);
        assert!(y >= r && y <= 480.0 - r);
    }
}

#[wasm_bindgen_test]
fn invalid_settings_are_reported() {
    assert!(BounceField::with_settings(640, 480, 0, 1.0, 1.0).is_err());
    let mut field = BounceField::seeded(640, 480, 2);
    assert!(field.apply_settings(5, -2.0, 0.5).is_err());
    assert!(field.apply_settings(5, 120.0, 0.5).is_ok());
    assert_eq!(field.particle_count(), 5);
}

#[wasm_bindgen_test]
fn settings_survive_a_reload() {
    let mut field = BounceField::seeded(320, 240, 6);
    field.apply_settings(4, 90.0, 0.25).unwrap();
    field.save_settings().unwrap();
    let reloaded = BounceField::from_local_storage(320, 240).unwrap();
    assert_eq!(reloaded.particle_count(), 4);
}

#[wasm_bindgen_test]
fn renders_into_a_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(320);
    canvas.set_height(240);
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();

    let mut field = BounceField::seeded(320, 240, 12);
    field.tick(0.0);
    assert!(field.render(&ctx).is_ok());
}
