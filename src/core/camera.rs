//! Core domain: follow camera with a shake offset layered on top.

use bevy::prelude::*;

use crate::effects::ScreenShake;
use crate::movement::{SKIER_SPAWN, Skier};

#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    /// World-space offset from the skier
    pub offset: Vec3,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 4.0, 9.0),
        }
    }
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    let follow = FollowCamera::default();
    commands.spawn((
        Name::new("Follow Camera"),
        Camera3d::default(),
        Transform::from_translation(SKIER_SPAWN + follow.offset).looking_at(SKIER_SPAWN, Vec3::Y),
        follow,
        ScreenShake::default(),
    ));
}

pub(crate) fn spawn_light(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn follow_skier(
    skiers: Query<&Transform, (With<Skier>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, Option<&ScreenShake>, &mut Transform), Without<Skier>>,
) {
    let Ok(skier) = skiers.single() else {
        return;
    };

    for (follow, shake, mut transform) in &mut cameras {
        transform.translation = skier.translation + follow.offset;
        transform.look_at(skier.translation, Vec3::Y);

        // Shake offsets are in camera space
        if let Some(shake) = shake {
            let offset = transform.rotation * shake.offset();
            transform.translation += offset;
        }
    }
}
