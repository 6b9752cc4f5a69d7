//! Movement domain: downward contact probe.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, Skier, SkierTuning};

pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    tuning: Res<SkierTuning>,
    mut query: Query<(Entity, &Transform, &mut GroundContact), With<Skier>>,
) {
    for (entity, transform, mut contact) in &mut query {
        let was_grounded = contact.grounded;

        // Only the ground layer counts; rocks and trees are not traversable
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]);

        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            tuning.raycast_distance.max(0.0),
            true,
            &filter,
        );

        contact.grounded = hit.is_some();
        contact.distance = hit.map(|h| h.distance);

        if contact.grounded && !was_grounded {
            debug!("Landed: ground at {:?}", contact.distance);
        } else if !contact.grounded && was_grounded {
            debug!("Left ground");
        }
    }
}
