//! Obstacles domain: applying tints to the skier's visual parts.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::obstacles::TintRequest;

pub(crate) fn apply_tints(
    mut requests: MessageReader<TintRequest>,
    children: Query<&Children>,
    mut parts: Query<&mut MeshMaterial3d<StandardMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for request in requests.read() {
        let mut painted = 0;

        for part in children.iter_descendants(request.skier) {
            let Ok(mut material) = parts.get_mut(part) else {
                continue;
            };
            // Each part gets its own material; shared handles stay untouched
            let mut tinted = materials.get(&material.0).cloned().unwrap_or_default();
            tinted.base_color = request.color;
            material.0 = materials.add(tinted);
            painted += 1;
        }

        if painted == 0 {
            warn!("Skier {:?} has no mesh parts to tint", request.skier);
        } else {
            debug!("Tinted {} skier parts {:?}", painted, request.color);
        }
    }
}
