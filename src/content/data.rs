//! Data definitions for the tuning file.
//!
//! These structs mirror assets/data/tuning.ron. Every field has a default, so a
//! partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::effects::{KnockbackParams, ShakeParams};
use crate::movement::SkierTuning;
use crate::obstacles::ObstacleKind;

pub const SCHEMA_VERSION: u32 = 1;

/// Speed a rock takes off when its file entry leaves the amount out.
pub const DEFAULT_SPEED_REDUCTION: f32 = 2.0;

// ============================================================================
// Top level (tuning.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    pub schema_version: u32,
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    pub skier: SkierTuning,
    pub shake: ShakeTuning,
    pub audio: AudioTuning,
    pub course: Vec<ObstaclePlacement>,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed: None,
            skier: SkierTuning::default(),
            shake: ShakeTuning::default(),
            audio: AudioTuning::default(),
            course: default_course(),
        }
    }
}

// ============================================================================
// Shake
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShakeTuning {
    /// Shake on hitting a knockback source
    pub collision: ShakeParams,
    /// Gentler shake on hitting a speed reducer
    pub speed_reducer: ShakeParams,
}

impl Default for ShakeTuning {
    fn default() -> Self {
        Self {
            collision: ShakeParams::new(0.2, 0.1),
            speed_reducer: ShakeParams::new(0.2, 0.05),
        }
    }
}

// ============================================================================
// Audio
// ============================================================================

/// Asset paths for sound clips. A missing path leaves that sound silent.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioTuning {
    pub collision_cue: Option<String>,
    pub collect_cue: Option<String>,
    pub skiing_loop: Option<String>,
    pub skiing_volume: f32,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self {
            collision_cue: None,
            collect_cue: None,
            skiing_loop: None,
            skiing_volume: 0.5,
        }
    }
}

// ============================================================================
// Course
// ============================================================================

/// Obstacle kinds as written in the file. Knockback and shake numbers come
/// from the skier and shake sections, so only rocks carry their own value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum ObstacleSpec {
    SpeedReducer { reduction: Option<f32> },
    KnockbackSource,
    CosmeticChanger,
}

impl ObstacleSpec {
    pub fn resolve(&self, skier: &SkierTuning, shake: &ShakeTuning) -> ObstacleKind {
        match *self {
            Self::SpeedReducer { reduction } => ObstacleKind::SpeedReducer {
                reduction: reduction.unwrap_or(DEFAULT_SPEED_REDUCTION).max(0.0),
                shake: shake.speed_reducer,
            },
            Self::KnockbackSource => ObstacleKind::KnockbackSource {
                knockback: KnockbackParams::from_tuning(skier),
                shake: shake.collision,
            },
            Self::CosmeticChanger => ObstacleKind::CosmeticChanger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ObstaclePlacement {
    pub obstacle: ObstacleSpec,
    /// World position of the obstacle's base on the slope
    pub position: [f32; 3],
}

/// Resolved obstacle placements, ready for the course builder.
#[derive(Resource, Debug, Clone, Default)]
pub struct CourseLayout {
    pub obstacles: Vec<(ObstacleKind, Vec3)>,
}

impl CourseLayout {
    pub fn from_tuning(tuning: &GameTuning) -> Self {
        let obstacles = tuning
            .course
            .iter()
            .map(|placement| {
                (
                    placement.obstacle.resolve(&tuning.skier, &tuning.shake),
                    Vec3::from_array(placement.position),
                )
            })
            .collect();
        Self { obstacles }
    }
}

/// A short run with a few of each obstacle staggered down the slope.
pub fn default_course() -> Vec<ObstaclePlacement> {
    let rock = ObstacleSpec::SpeedReducer { reduction: None };
    let tree = ObstacleSpec::KnockbackSource;
    let ice = ObstacleSpec::CosmeticChanger;

    [
        (rock, [-2.0, 0.0, -20.0]),
        (ice, [3.0, 0.0, -35.0]),
        (tree, [0.5, 0.0, -50.0]),
        (rock, [4.0, 0.0, -65.0]),
        (ice, [-4.0, 0.0, -80.0]),
        (tree, [-1.5, 0.0, -95.0]),
        (rock, [1.0, 0.0, -110.0]),
        (ice, [0.0, 0.0, -125.0]),
        (tree, [5.0, 0.0, -140.0]),
    ]
    .into_iter()
    .map(|(obstacle, position)| ObstaclePlacement { obstacle, position })
    .collect()
}
