//! Obstacles domain: building the course at startup.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::CourseLayout;
use crate::movement::GameLayer;
use crate::obstacles::{Obstacle, ObstacleKind};

const ROCK_RADIUS: f32 = 0.8;
const TREE_RADIUS: f32 = 0.35;
const TREE_HEIGHT: f32 = 3.0;
const ICE_SIZE: Vec3 = Vec3::new(2.0, 0.1, 2.0);

pub(crate) fn build_course(
    mut commands: Commands,
    layout: Res<CourseLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let layers = CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Skier]);

    let rock_mesh = meshes.add(Sphere::new(ROCK_RADIUS));
    let rock_material = materials.add(Color::srgb(0.45, 0.42, 0.4));
    let tree_mesh = meshes.add(Cylinder::new(TREE_RADIUS, TREE_HEIGHT));
    let tree_material = materials.add(Color::srgb(0.13, 0.4, 0.18));
    let ice_mesh = meshes.add(Cuboid::from_size(ICE_SIZE));
    let ice_material = materials.add(Color::srgba(0.7, 0.9, 1.0, 0.8));

    for (kind, base) in &layout.obstacles {
        let obstacle = Obstacle::new(*kind);
        let name = Name::new(kind.label());

        match kind {
            // Rocks stay put and are solid
            ObstacleKind::SpeedReducer { .. } => {
                commands.spawn((
                    name,
                    obstacle,
                    Mesh3d(rock_mesh.clone()),
                    MeshMaterial3d(rock_material.clone()),
                    Transform::from_translation(*base + Vec3::Y * ROCK_RADIUS * 0.5),
                    RigidBody::Static,
                    Collider::sphere(ROCK_RADIUS),
                    CollisionEventsEnabled,
                    layers,
                ));
            }
            ObstacleKind::KnockbackSource { .. } => {
                commands.spawn((
                    name,
                    obstacle,
                    Mesh3d(tree_mesh.clone()),
                    MeshMaterial3d(tree_material.clone()),
                    Transform::from_translation(*base + Vec3::Y * TREE_HEIGHT * 0.5),
                    RigidBody::Static,
                    Collider::cylinder(TREE_RADIUS, TREE_HEIGHT),
                    Sensor,
                    CollisionEventsEnabled,
                    layers,
                ));
            }
            ObstacleKind::CosmeticChanger => {
                commands.spawn((
                    name,
                    obstacle,
                    Mesh3d(ice_mesh.clone()),
                    MeshMaterial3d(ice_material.clone()),
                    Transform::from_translation(*base + Vec3::Y * ICE_SIZE.y * 0.5),
                    RigidBody::Static,
                    // Taller than the mesh so the skier passes through the volume
                    Collider::cuboid(ICE_SIZE.x, 1.5, ICE_SIZE.z),
                    Sensor,
                    CollisionEventsEnabled,
                    layers,
                ));
            }
        }
    }

    info!("Course built: {} obstacles", layout.obstacles.len());
}
