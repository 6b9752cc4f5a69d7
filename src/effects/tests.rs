//! Effects domain: tests for screen shake and knockback parameters.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{KnockbackParams, ScreenShake, ShakeParams};
use crate::movement::SkierTuning;

#[test]
fn test_idle_shake_has_no_offset() {
    let mut shake = ScreenShake::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    assert!(!shake.is_active());
    assert_eq!(shake.advance(0.016, &mut rng), Vec3::ZERO);
}

#[test]
fn test_shake_offset_is_bounded_by_half_magnitude() {
    let mut shake = ScreenShake::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    shake.start(ShakeParams::new(10.0, 0.4));

    for _ in 0..500 {
        let offset = shake.advance(0.01, &mut rng);
        assert!(offset.x.abs() <= 0.2);
        assert!(offset.y.abs() <= 0.2);
        assert_eq!(offset.z, 0.0);
    }
}

#[test]
fn test_shake_returns_to_rest_after_duration() {
    let mut shake = ScreenShake::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    shake.start(ShakeParams::new(0.5, 0.05));

    // Four frames of 0.125 cover the duration
    for _ in 0..4 {
        shake.advance(0.125, &mut rng);
    }
    assert!(!shake.is_active());

    assert_eq!(shake.advance(0.125, &mut rng), Vec3::ZERO);
    assert_eq!(shake.offset(), Vec3::ZERO);
}

#[test]
fn test_overlapping_shakes_keep_longest_and_strongest() {
    let mut shake = ScreenShake::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    shake.start(ShakeParams::new(1.0, 0.1));
    shake.advance(0.25, &mut rng);

    shake.start(ShakeParams::new(0.2, 0.05));

    assert_eq!(shake.magnitude(), 0.1);
    // 0.75 of the first shake remains, which beats the new 0.2
    for _ in 0..2 {
        shake.advance(0.25, &mut rng);
    }
    assert!(shake.is_active());
    shake.advance(0.25, &mut rng);
    assert!(!shake.is_active());
}

#[test]
fn test_negative_shake_values_are_sanitised() {
    let mut shake = ScreenShake::default();
    shake.start(ShakeParams::new(-1.0, -0.3));

    assert!(!shake.is_active());
    assert_eq!(shake.magnitude(), 0.3);
}

#[test]
fn test_knockback_params_from_tuning() {
    let params = KnockbackParams::from_tuning(&SkierTuning::default());
    assert_eq!(params.force, 10.0);
    assert_eq!(params.duration, 0.7);
}
