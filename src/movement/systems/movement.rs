//! Movement domain: per-frame skier tick and velocity commit.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::steering::input_direction;
use crate::movement::{GroundContact, Skier, SkierInput, SkierState, SkierTuning, TickInput};

pub(crate) fn tick_skier(
    time: Res<Time>,
    input: Res<SkierInput>,
    tuning: Res<SkierTuning>,
    mut query: Query<
        (
            &mut SkierState,
            &GroundContact,
            &mut LinearVelocity,
            &mut Transform,
        ),
        With<Skier>,
    >,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();
    let steer = input_direction(input.axis);

    for (mut state, contact, mut velocity, mut transform) in &mut query {
        let was_controllable = state.is_controllable();
        let was_boosting = state.is_boosting();

        let command = state.tick(
            &tuning,
            TickInput {
                dt,
                now,
                grounded: contact.grounded,
                steer,
            },
        );
        velocity.0 = command.apply(velocity.0);
        transform.look_to(state.forward(), Vec3::Y);

        if !was_controllable && state.is_controllable() {
            info!("Knockback finished, control restored");
        }
        if was_boosting && !state.is_boosting() {
            debug!(
                "Boost finished: speed={:.2}, cooldown={:.2}s",
                state.current_speed(),
                state.boost_cooldown()
            );
        }
    }
}
