//! Debug overlay for tuning runs.
//!
//! Features:
//! - F3: gizmos for the contact probe, current heading and the turn limits
//! - F4: text readout of the skier's movement state

use bevy::prelude::*;

use crate::core::{SimRng, SkierSet};
use crate::movement::steering::rotate_heading;
use crate::movement::{GroundContact, Skier, SkierState, SkierTuning};

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_gizmos: bool,
    /// Whether to show the movement readout
    pub show_info: bool,
}

#[derive(Component)]
pub struct DebugInfoOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_views)
            .add_systems(
                Update,
                (
                    draw_skier_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
                    update_debug_info_overlay,
                )
                    .in_set(SkierSet::Presentation),
            );
    }
}

// ============================================================================
// Systems
// ============================================================================

fn toggle_debug_views(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("Debug gizmos: {}", debug_state.show_gizmos);
    }
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug info overlay: {}", debug_state.show_info);
    }
}

fn draw_skier_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<SkierTuning>,
    skiers: Query<(&Transform, &SkierState, &GroundContact), With<Skier>>,
) {
    for (transform, state, contact) in &skiers {
        let origin = transform.translation;

        // Contact probe, green when it hits ground
        let probe_color = if contact.grounded {
            Color::srgb(0.2, 1.0, 0.2)
        } else {
            Color::srgb(1.0, 0.2, 0.2)
        };
        gizmos.line(
            origin,
            origin + Vec3::NEG_Y * tuning.raycast_distance.max(0.0),
            probe_color,
        );

        gizmos.arrow(
            origin,
            origin + state.forward() * 2.0,
            Color::srgb(1.0, 0.9, 0.2),
        );

        let limit = tuning.max_turn();
        for bound in [-limit, limit] {
            let edge = rotate_heading(state.spawn_forward(), bound);
            gizmos.line(origin, origin + edge * 3.0, Color::srgb(0.4, 0.6, 1.0));
        }
    }
}

/// Update the debug info overlay with the current skier state
fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    sim_rng: Res<SimRng>,
    skiers: Query<&SkierState, With<Skier>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some(state), Ok(mut text)) = (skiers.iter().next(), overlay_query.single_mut()) {
        **text = format!(
            "Speed: {:.2}\nHeading: {:.1}\nMode: {:?}\nGrounded: {}\nBoost cooldown: {:.2}\nSeed: {}",
            state.current_speed(),
            state.heading(),
            state.mode(),
            state.is_grounded(),
            state.boost_cooldown(),
            sim_rng.seed
        );
    }
}

// ============================================================================
// UI Spawning Helpers
// ============================================================================

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
