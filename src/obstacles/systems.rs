//! Obstacles domain: contact translation and touch reactions.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::PlaySoundCue;
use crate::core::SimRng;
use crate::effects::{KnockbackRequest, ShakeRequest};
use crate::movement::{Skier, SkierState};
use crate::obstacles::{Obstacle, ObstacleTouched, RAINBOW_PALETTE, TintRequest};

/// Turns physics contact starts between the skier and an obstacle into bus messages.
pub(crate) fn publish_obstacle_touches(
    mut collision_events: MessageReader<CollisionStart>,
    mut touches: MessageWriter<ObstacleTouched>,
    obstacles: Query<(), With<Obstacle>>,
    skiers: Query<(), With<Skier>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (obstacle, skier) in pairs {
            if !obstacles.contains(obstacle) || !skiers.contains(skier) {
                continue;
            }
            debug!("Contact: skier {:?} touched obstacle {:?}", skier, obstacle);
            touches.write(ObstacleTouched { obstacle, skier });
        }
    }
}

/// Bus subscriber that runs each obstacle's reaction and forwards its requests.
pub(crate) fn react_to_obstacle_touches(
    mut commands: Commands,
    mut touches: MessageReader<ObstacleTouched>,
    mut sim_rng: ResMut<SimRng>,
    mut obstacles: Query<&mut Obstacle>,
    mut skiers: Query<&mut SkierState, With<Skier>>,
    mut knockbacks: MessageWriter<KnockbackRequest>,
    mut shakes: MessageWriter<ShakeRequest>,
    mut sounds: MessageWriter<PlaySoundCue>,
    mut tints: MessageWriter<TintRequest>,
) {
    for touch in touches.read() {
        let Ok(mut skier) = skiers.get_mut(touch.skier) else {
            debug!("Touch from unknown skier {:?}, skipping", touch.skier);
            continue;
        };
        let Ok(mut obstacle) = obstacles.get_mut(touch.obstacle) else {
            continue;
        };

        let Some(reaction) = obstacle.touch(&mut skier, &mut sim_rng.rng) else {
            debug!("Obstacle {:?} already spent, ignoring touch", touch.obstacle);
            continue;
        };

        info!(
            "Skier touched {}: consumed={}",
            obstacle.kind.label(),
            reaction.consumed
        );
        if let Some(speed) = reaction.speed_after {
            debug!("Speed after {}: {:.2}", obstacle.kind.label(), speed);
        }

        if let Some(params) = reaction.knockback {
            knockbacks.write(KnockbackRequest {
                skier: touch.skier,
                params,
            });
        }
        if let Some(params) = reaction.shake {
            shakes.write(ShakeRequest(params));
        }
        if let Some(cue) = reaction.cue {
            sounds.write(PlaySoundCue(cue));
        }
        if let Some(index) = reaction.tint {
            tints.write(TintRequest {
                skier: touch.skier,
                color: RAINBOW_PALETTE[index],
            });
        }

        if reaction.consumed {
            commands.entity(touch.obstacle).despawn();
        }
    }
}
