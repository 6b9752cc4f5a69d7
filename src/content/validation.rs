//! Sanitising of loaded tuning values.

use super::data::{GameTuning, ObstacleSpec};

/// A value that was out of range and has been replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningWarning {
    pub field: String,
    pub value: f32,
    pub corrected: f32,
}

impl std::fmt::Display for TuningWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}' was {}, corrected to {}",
            self.field, self.value, self.corrected
        )
    }
}

/// Helper macro for clamping a field into range and recording the change
macro_rules! clamp_field {
    ($warnings:expr, $field:expr, $value:expr, $min:expr, $max:expr) => {
        let original: f32 = $value;
        let clamped = if original.is_nan() {
            $min
        } else {
            original.clamp($min, $max)
        };
        if clamped != original {
            $warnings.push(TuningWarning {
                field: $field.to_string(),
                value: original,
                corrected: clamped,
            });
            $value = clamped;
        }
    };
}

/// Clamp every numeric tuning value into its valid range.
/// Returns one warning per corrected field, empty if everything was valid.
pub fn sanitize_tuning(tuning: &mut GameTuning) -> Vec<TuningWarning> {
    let mut warnings = Vec::new();
    let max = f32::MAX;

    // Skier
    let skier = &mut tuning.skier;
    clamp_field!(warnings, "skier.max_speed", skier.max_speed, 0.0, max);
    clamp_field!(
        warnings,
        "skier.initial_speed",
        skier.initial_speed,
        0.0,
        skier.max_speed
    );
    clamp_field!(warnings, "skier.acceleration", skier.acceleration, 0.0, max);
    clamp_field!(warnings, "skier.boost_speed", skier.boost_speed, 0.0, max);
    clamp_field!(warnings, "skier.boost_duration", skier.boost_duration, 0.0, max);
    clamp_field!(warnings, "skier.boost_cooldown", skier.boost_cooldown, 0.0, max);
    clamp_field!(warnings, "skier.rotation_speed", skier.rotation_speed, 0.0, max);
    clamp_field!(warnings, "skier.max_turn_angle", skier.max_turn_angle, 0.0, 180.0);
    clamp_field!(warnings, "skier.raycast_distance", skier.raycast_distance, 0.0, max);
    clamp_field!(warnings, "skier.knockback_force", skier.knockback_force, 0.0, max);
    clamp_field!(
        warnings,
        "skier.knockback_duration",
        skier.knockback_duration,
        0.0,
        max
    );
    clamp_field!(warnings, "skier.input_threshold", skier.input_threshold, 0.0, 1.0);

    // Shake
    let shake = &mut tuning.shake;
    clamp_field!(warnings, "shake.collision.duration", shake.collision.duration, 0.0, max);
    clamp_field!(warnings, "shake.collision.magnitude", shake.collision.magnitude, 0.0, max);
    clamp_field!(
        warnings,
        "shake.speed_reducer.duration",
        shake.speed_reducer.duration,
        0.0,
        max
    );
    clamp_field!(
        warnings,
        "shake.speed_reducer.magnitude",
        shake.speed_reducer.magnitude,
        0.0,
        max
    );

    // Audio
    clamp_field!(warnings, "audio.skiing_volume", tuning.audio.skiing_volume, 0.0, 1.0);

    // Course
    for (i, placement) in tuning.course.iter_mut().enumerate() {
        if let ObstacleSpec::SpeedReducer {
            reduction: Some(ref mut reduction),
        } = placement.obstacle
        {
            clamp_field!(warnings, format!("course[{}].reduction", i), *reduction, 0.0, max);
        }
    }

    warnings
}
