use cgmath::Deg;
use winit::dpi::PhysicalSize;

use drift_ngin::{
    app::surface_extent,
    backdrop::{BackdropConfig, approach},
    camera::Projection,
};

#[test]
fn resize_updates_the_aspect_ratio_exactly() {
    let mut projection = Projection::new(800, 600, Deg(75.0), 0.1, 1000.0);
    assert_eq!(projection.aspect, 800.0 / 600.0);

    projection.resize(1024, 768);
    assert_eq!(projection.aspect, 1024.0 / 768.0);

    projection.resize(333, 777);
    assert_eq!(projection.aspect, 333.0 / 777.0);
}

#[test]
fn surface_extent_keeps_moderate_pixel_ratios() {
    assert_eq!(surface_extent(PhysicalSize::new(1000, 800), 1.0), (1000, 800));
    assert_eq!(surface_extent(PhysicalSize::new(2000, 1600), 2.0), (2000, 1600));
}

#[test]
fn surface_extent_caps_dense_displays_at_ratio_2() {
    // A 3x display is backed as if it were 2x
    assert_eq!(surface_extent(PhysicalSize::new(1000, 800), 3.0), (667, 533));
    assert_eq!(surface_extent(PhysicalSize::new(3000, 2400), 3.0), (2000, 1600));
}

#[test]
fn rotation_approaches_the_pointer_target_without_overshoot() {
    let config = BackdropConfig::default();
    let target = 1.0;
    let mut angle = 0.0;
    for _ in 0..200 {
        let next = approach(angle, target, config.smoothing);
        assert!(next > angle, "the approach must make progress");
        assert!(next < target, "the approach must never overshoot");
        angle = next;
    }
    // After enough frames the angle is essentially on target
    assert!((target - angle) < 1e-4);
}

#[test]
fn approach_works_from_both_sides() {
    let down = approach(2.0, 1.0, 0.05);
    assert!(down < 2.0 && down > 1.0);

    let up = approach(0.0, 1.0, 0.05);
    assert!(up > 0.0 && up < 1.0);

    // Already on target: stays there
    assert_eq!(approach(1.0, 1.0, 0.05), 1.0);
}

#[test]
fn constant_roll_accumulates_per_frame() {
    let config = BackdropConfig::default();
    let mut roll = 0.0f32;
    for _ in 0..10 {
        roll += config.roll;
    }
    assert!((roll - 0.005).abs() < 1e-6);
}
