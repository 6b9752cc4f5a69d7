//! Effects domain: player-triggered boost.
//!
//! The boost countdown itself runs inside the movement tick; this system only
//! turns the edge-triggered key press into a boost request.

use bevy::prelude::*;

use crate::movement::{Skier, SkierInput, SkierState, SkierTuning};

pub(crate) fn trigger_boost(
    input: Res<SkierInput>,
    tuning: Res<SkierTuning>,
    mut query: Query<&mut SkierState, With<Skier>>,
) {
    if !input.boost_just_pressed {
        return;
    }

    for mut state in &mut query {
        match state.try_boost(&tuning) {
            Ok(()) => info!(
                "Boost activated: speed={:.1}, duration={:.1}s",
                state.current_speed(),
                state.boost_timer()
            ),
            Err(reason) => debug!(
                "Boost refused ({}): timer={:.2}, cooldown={:.2}",
                reason,
                state.boost_timer(),
                state.boost_cooldown()
            ),
        }
    }
}
