//! Movement domain: skier state machine, steering and terrain contact.

mod bootstrap;
mod components;
mod resources;
pub mod steering;
mod systems;

pub use bootstrap::SKIER_SPAWN;
pub use components::{
    BoostRejection, GameLayer, Ground, GroundContact, MotionMode, Skier, SkierState, TickInput,
    VelocityCommand,
};
pub use resources::{SkierInput, SkierTuning};

use bevy::prelude::*;

use crate::core::SkierSet;
use crate::movement::bootstrap::{spawn_skier, spawn_slope};
use crate::movement::systems::{probe_ground, read_input, tick_skier};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkierTuning>()
            .init_resource::<SkierInput>()
            .add_systems(Startup, (spawn_slope, spawn_skier))
            .add_systems(Update, read_input.in_set(SkierSet::Input))
            .add_systems(Update, probe_ground.in_set(SkierSet::Contact))
            .add_systems(Update, tick_skier.in_set(SkierSet::Motion));
    }
}
