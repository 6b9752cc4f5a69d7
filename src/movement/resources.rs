//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkierTuning {
    pub initial_speed: f32,
    pub max_speed: f32,
    /// Units per second squared while grounded and not boosting
    pub acceleration: f32,
    pub boost_speed: f32,
    pub boost_duration: f32,
    /// Time after a boost ends during which a new boost is refused
    pub boost_cooldown: f32,
    /// Degrees per second
    pub rotation_speed: f32,
    /// Degrees either side of the spawn heading
    pub max_turn_angle: f32,
    pub raycast_distance: f32,
    pub knockback_force: f32,
    pub knockback_duration: f32,
    /// Minimum stick deflection that counts as steering
    pub input_threshold: f32,
}

impl Default for SkierTuning {
    fn default() -> Self {
        Self {
            initial_speed: 5.0,
            max_speed: 10.0,
            acceleration: 2.0,
            boost_speed: 15.0,
            boost_duration: 3.0,
            boost_cooldown: 5.0,
            rotation_speed: 200.0,
            max_turn_angle: 90.0,
            raycast_distance: 1.0,
            knockback_force: 10.0,
            knockback_duration: 0.7,
            input_threshold: 0.1,
        }
    }
}

impl SkierTuning {
    /// Upper speed bound outside of a boost.
    pub fn speed_cap(&self) -> f32 {
        self.max_speed.max(0.0)
    }

    /// Baseline speed the skier returns to after a boost or a jump.
    pub fn speed_floor(&self) -> f32 {
        self.initial_speed.max(0.0).min(self.speed_cap())
    }

    pub fn max_turn(&self) -> f32 {
        self.max_turn_angle.clamp(0.0, 180.0)
    }
}

#[derive(Resource, Debug, Default)]
pub struct SkierInput {
    /// x = right, y = downhill (forward)
    pub axis: Vec2,
    pub boost_just_pressed: bool,
}
