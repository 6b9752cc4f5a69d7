//! Effects domain: knockback dispatch.

use avian3d::prelude::*;
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{Skier, SkierState, SkierTuning};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnockbackParams {
    pub force: f32,
    pub duration: f32,
}

impl KnockbackParams {
    pub fn from_tuning(tuning: &SkierTuning) -> Self {
        Self {
            force: tuning.knockback_force,
            duration: tuning.knockback_duration,
        }
    }
}

/// Request to push a skier back along its reversed facing.
#[derive(Debug, Clone, Copy)]
pub struct KnockbackRequest {
    pub skier: Entity,
    pub params: KnockbackParams,
}

impl Message for KnockbackRequest {}

pub(crate) fn dispatch_knockback(
    time: Res<Time>,
    tuning: Res<SkierTuning>,
    mut requests: MessageReader<KnockbackRequest>,
    mut query: Query<(&mut SkierState, &mut LinearVelocity), With<Skier>>,
) {
    let now = time.elapsed_secs();

    for request in requests.read() {
        let Ok((mut state, mut velocity)) = query.get_mut(request.skier) else {
            debug!("Knockback request for unknown skier {:?}", request.skier);
            continue;
        };

        let KnockbackParams { force, duration } = request.params;
        if !state.begin_knockback(now, force, duration, &tuning) {
            debug!("Knockback ignored: one is already running");
            continue;
        }

        if let Some(knockback_velocity) = state.knockback_velocity() {
            velocity.0 = knockback_velocity;
        }

        info!(
            "Knockback started: force={:.1}, duration={:.2}s, velocity={:?}",
            force, duration, velocity.0
        );
    }
}
