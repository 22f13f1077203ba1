use drift_ngin::backdrop::{ACCENT_PALETTE, BackdropConfig, NOISE_COLOR, scatter};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn noise_population_stays_in_documented_bounds() {
    let config = BackdropConfig::default();
    let mut rng = StdRng::seed_from_u64(7);

    let placement = scatter(&config.noise_params(), &mut rng);

    assert_eq!(placement.instances.len(), 80);
    for instance in &placement.instances {
        assert!(instance.position.x.abs() <= 35.0);
        assert!(instance.position.y.abs() <= 35.0);
        assert!(instance.position.z.abs() <= 25.0);
        // Scaling is uniform per shape
        assert_eq!(instance.scale.x, instance.scale.y);
        assert_eq!(instance.scale.x, instance.scale.z);
        assert!(instance.scale.x >= 0.5 && instance.scale.x < 2.0);
    }
    for spin in &placement.spins {
        assert!(spin.x >= -0.005 && spin.x < 0.005);
        assert!(spin.y >= -0.005 && spin.y < 0.005);
    }
    for color in &placement.colors {
        assert_eq!(*color, NOISE_COLOR);
    }
}

#[test]
fn accent_population_stays_in_documented_bounds() {
    let config = BackdropConfig::default();
    let mut rng = StdRng::seed_from_u64(23);

    let placement = scatter(&config.accent_params(), &mut rng);

    assert_eq!(placement.instances.len(), 15);
    for instance in &placement.instances {
        assert!(instance.position.x.abs() <= 30.0);
        assert!(instance.position.y.abs() <= 30.0);
        assert!(instance.position.z.abs() <= 20.0);
        // Accents keep their natural size
        assert_eq!(instance.scale.x, 1.0);
    }
    for spin in &placement.spins {
        assert!(spin.x >= -0.015 && spin.x < 0.015);
        assert!(spin.y >= -0.015 && spin.y < 0.015);
    }
    for color in &placement.colors {
        assert!(ACCENT_PALETTE.contains(color));
    }
}

#[test]
fn default_field_counts_sum_to_95() {
    let config = BackdropConfig::default();
    assert_eq!(config.noise_count + config.accent_count, 95);
}

#[test]
fn accents_spin_faster_than_noise() {
    let config = BackdropConfig::default();
    assert!(config.accent_spin > config.noise_spin);
}
