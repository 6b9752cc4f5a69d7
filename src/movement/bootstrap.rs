//! Movement domain: skier and slope spawning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, GroundContact, Skier, SkierState, SkierTuning};

pub const SKIER_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const SKIER_RADIUS: f32 = 0.4;
const SKIER_LENGTH: f32 = 1.0;

/// Slope slab dimensions (width, thickness, length)
const SLOPE_SIZE: Vec3 = Vec3::new(30.0, 1.0, 400.0);

pub(crate) fn spawn_skier(
    mut commands: Commands,
    tuning: Res<SkierTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let transform = Transform::from_translation(SKIER_SPAWN);
    let state = SkierState::new(&tuning, transform.forward().as_vec3());

    info!(
        "Spawning skier: speed={}, max_speed={}, boost_speed={}, max_turn={}",
        state.current_speed(),
        tuning.max_speed,
        tuning.boost_speed,
        tuning.max_turn()
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Name::new("Skier"),
                Skier,
                state,
                GroundContact::default(),
            ),
            transform,
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(SKIER_RADIUS, SKIER_LENGTH),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Skier, [GameLayer::Ground, GameLayer::Obstacle]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Skier Body"),
                Mesh3d(meshes.add(Capsule3d::new(SKIER_RADIUS, SKIER_LENGTH))),
                MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
                Transform::default(),
            ));
            parent.spawn((
                Name::new("Skis"),
                Mesh3d(meshes.add(Cuboid::new(0.6, 0.05, 1.8))),
                MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.25))),
                Transform::from_xyz(0.0, -(SKIER_RADIUS + SKIER_LENGTH / 2.0) + 0.05, 0.0),
            ));
        });
}

pub(crate) fn spawn_slope(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Skier]);

    // Top face at y = 0, running downhill along -Z
    commands.spawn((
        Name::new("Slope"),
        Ground,
        Mesh3d(meshes.add(Cuboid::from_size(SLOPE_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.92, 0.95, 1.0))),
        Transform::from_xyz(0.0, -SLOPE_SIZE.y / 2.0, -SLOPE_SIZE.z / 2.0 + 10.0),
        RigidBody::Static,
        Collider::cuboid(SLOPE_SIZE.x, SLOPE_SIZE.y, SLOPE_SIZE.z),
        ground_layers,
    ));
}
