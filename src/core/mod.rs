//! Core domain: frame ordering, shared randomness and the follow camera.

mod camera;
mod resources;

pub use resources::SimRng;

use bevy::prelude::*;

use crate::core::camera::{follow_skier, spawn_camera, spawn_light};
use crate::effects::advance_screen_shake;

/// Per-frame ordering of the skier simulation.
///
/// The contact probe always runs before the movement tick, and the movement
/// tick always runs before anything presents the result.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkierSet {
    Input,
    Contact,
    Collisions,
    Effects,
    Motion,
    Presentation,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>()
            .configure_sets(
                Update,
                (
                    SkierSet::Input,
                    SkierSet::Contact,
                    SkierSet::Collisions,
                    SkierSet::Effects,
                    SkierSet::Motion,
                    SkierSet::Presentation,
                )
                    .chain(),
            )
            .add_systems(Startup, (spawn_camera, spawn_light))
            .add_systems(
                Update,
                follow_skier
                    .after(advance_screen_shake)
                    .in_set(SkierSet::Presentation),
            );
    }
}
