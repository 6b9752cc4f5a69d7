//! Obstacles domain: obstacle variants, the collision bus and course building.

mod components;
mod cosmetic;
mod events;
mod spawn;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Obstacle, ObstacleKind, ObstacleState, RAINBOW_PALETTE, TouchReaction};
pub use events::{ObstacleTouched, TintRequest};

use bevy::prelude::*;

use crate::core::SkierSet;
use crate::obstacles::cosmetic::apply_tints;
use crate::obstacles::spawn::build_course;
use crate::obstacles::systems::{publish_obstacle_touches, react_to_obstacle_touches};

pub struct ObstaclesPlugin;

impl Plugin for ObstaclesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ObstacleTouched>()
            .add_message::<TintRequest>()
            .add_systems(Startup, build_course)
            .add_systems(
                Update,
                (publish_obstacle_touches, react_to_obstacle_touches)
                    .chain()
                    .in_set(SkierSet::Collisions),
            )
            .add_systems(Update, apply_tints.in_set(SkierSet::Presentation));
    }
}
