//! Obstacles domain: tests for obstacle reactions and lifecycle.

use std::collections::HashSet;

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::systems::react_to_obstacle_touches;
use super::{
    Obstacle, ObstacleKind, ObstacleState, ObstacleTouched, RAINBOW_PALETTE, TintRequest,
};
use crate::audio::{PlaySoundCue, SoundCue};
use crate::core::SimRng;
use crate::effects::{
    KnockbackParams, KnockbackRequest, ShakeParams, ShakeRequest, dispatch_knockback,
};
use crate::movement::{Skier, SkierState, SkierTuning, TickInput};

const ROCK_SHAKE: ShakeParams = ShakeParams::new(0.2, 0.05);
const TREE_SHAKE: ShakeParams = ShakeParams::new(0.2, 0.1);

fn rock(reduction: f32) -> Obstacle {
    Obstacle::new(ObstacleKind::SpeedReducer {
        reduction,
        shake: ROCK_SHAKE,
    })
}

fn tree() -> Obstacle {
    Obstacle::new(ObstacleKind::KnockbackSource {
        knockback: KnockbackParams {
            force: 10.0,
            duration: 0.7,
        },
        shake: TREE_SHAKE,
    })
}

fn skier_at_speed(tuning: &SkierTuning, speed: f32) -> SkierState {
    let mut state = SkierState::new(tuning, Vec3::NEG_Z);
    state.set_speed(speed, tuning);
    state
}

#[test]
fn test_speed_reducer_slows_and_stays_armed() {
    let tuning = SkierTuning::default();
    let mut skier = skier_at_speed(&tuning, 3.0);
    let mut obstacle = rock(2.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let reaction = obstacle.touch(&mut skier, &mut rng).unwrap();

    assert_eq!(skier.current_speed(), 1.0);
    assert_eq!(reaction.speed_after, Some(1.0));
    assert_eq!(reaction.shake, Some(ROCK_SHAKE));
    assert!(!reaction.consumed);
    assert_eq!(obstacle.state, ObstacleState::Armed);

    // Still reacts on the next contact, floored at zero
    obstacle.touch(&mut skier, &mut rng).unwrap();
    assert_eq!(skier.current_speed(), 0.0);
}

#[test]
fn test_negative_reduction_counts_as_zero() {
    let tuning = SkierTuning::default();
    let mut skier = skier_at_speed(&tuning, 3.0);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    rock(-5.0).touch(&mut skier, &mut rng).unwrap();

    assert_eq!(skier.current_speed(), 3.0);
}

#[test]
fn test_knockback_source_is_consumed_and_requests_knockback() {
    let tuning = SkierTuning::default();
    let mut skier = skier_at_speed(&tuning, 6.0);
    let mut obstacle = tree();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let reaction = obstacle.touch(&mut skier, &mut rng).unwrap();

    assert!(reaction.consumed);
    assert_eq!(obstacle.state, ObstacleState::Spent);
    assert_eq!(
        reaction.knockback,
        Some(KnockbackParams {
            force: 10.0,
            duration: 0.7
        })
    );
    assert_eq!(reaction.shake, Some(TREE_SHAKE));
    assert_eq!(reaction.cue, Some(SoundCue::Collision));
    // Speed is left to the knockback itself
    assert_eq!(skier.current_speed(), 6.0);
}

#[test]
fn test_knockback_source_reaction_drives_skier_backwards() {
    let tuning = SkierTuning::default();
    let mut skier = skier_at_speed(&tuning, 6.0);
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let forward = skier.forward();

    let reaction = tree().touch(&mut skier, &mut rng).unwrap();
    let params = reaction.knockback.unwrap();
    assert!(skier.begin_knockback(0.0, params.force, params.duration, &tuning));

    let velocity = skier.knockback_velocity().unwrap();
    assert!((velocity.length() - 10.0).abs() < 1e-4);
    assert!(velocity.normalize().dot(forward) < -0.999);

    let tick = |now: f32| TickInput {
        dt: 0.1,
        now,
        grounded: true,
        steer: Vec3::X,
    };
    skier.tick(&tuning, tick(0.6));
    assert!(!skier.is_controllable());
    skier.tick(&tuning, tick(0.7));
    assert!(skier.is_controllable());
}

#[test]
fn test_spent_obstacle_ignores_further_touches() {
    let tuning = SkierTuning::default();
    let mut skier = skier_at_speed(&tuning, 6.0);
    let mut obstacle = tree();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert!(obstacle.touch(&mut skier, &mut rng).is_some());
    assert!(obstacle.touch(&mut skier, &mut rng).is_none());
}

#[test]
fn test_cosmetic_changer_picks_palette_entry_and_is_consumed() {
    let tuning = SkierTuning::default();
    let mut skier = skier_at_speed(&tuning, 6.0);
    let mut obstacle = Obstacle::new(ObstacleKind::CosmeticChanger);
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    let reaction = obstacle.touch(&mut skier, &mut rng).unwrap();

    assert!(reaction.consumed);
    assert!(!obstacle.is_armed());
    assert!(reaction.tint.unwrap() < RAINBOW_PALETTE.len());
    assert_eq!(reaction.cue, Some(SoundCue::Collect));
    assert_eq!(reaction.shake, None);
    assert_eq!(skier.current_speed(), 6.0);
}

#[test]
fn test_cosmetic_changers_draw_independently() {
    let tuning = SkierTuning::default();
    let mut skier = skier_at_speed(&tuning, 6.0);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seen = HashSet::new();

    for _ in 0..200 {
        let mut obstacle = Obstacle::new(ObstacleKind::CosmeticChanger);
        let reaction = obstacle.touch(&mut skier, &mut rng).unwrap();
        seen.insert(reaction.tint.unwrap());
    }

    // 200 draws from 7 entries hit every colour
    assert_eq!(seen.len(), RAINBOW_PALETTE.len());
}

#[test]
fn test_only_speed_reducers_persist() {
    assert!(!rock(1.0).kind.is_consumed_on_touch());
    assert!(tree().kind.is_consumed_on_touch());
    assert!(ObstacleKind::CosmeticChanger.is_consumed_on_touch());
}

#[test]
fn test_speed_reducer_does_not_cancel_a_boost() {
    let tuning = SkierTuning::default();
    let mut skier = SkierState::new(&tuning, Vec3::NEG_Z);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    skier.try_boost(&tuning).unwrap();

    let reaction = rock(2.0).touch(&mut skier, &mut rng).unwrap();

    assert!(skier.is_boosting());
    assert_eq!(skier.current_speed(), tuning.boost_speed);
    assert_eq!(reaction.speed_after, Some(tuning.boost_speed));
    assert_eq!(reaction.shake, Some(ROCK_SHAKE));
}

// -----------------------------------------------------------------------------
// Collision bus wiring
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct SentKnockbacks(Vec<KnockbackRequest>);

fn record_knockbacks(
    mut requests: MessageReader<KnockbackRequest>,
    mut sent: ResMut<SentKnockbacks>,
) {
    sent.0.extend(requests.read().copied());
}

fn bus_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SkierTuning::default())
        .insert_resource(SimRng::seeded(Some(9)))
        .init_resource::<SentKnockbacks>()
        .add_message::<ObstacleTouched>()
        .add_message::<KnockbackRequest>()
        .add_message::<ShakeRequest>()
        .add_message::<PlaySoundCue>()
        .add_message::<TintRequest>()
        .add_systems(
            Update,
            (react_to_obstacle_touches, record_knockbacks, dispatch_knockback).chain(),
        );
    app
}

fn spawn_skier(app: &mut App) -> Entity {
    let state = SkierState::new(&SkierTuning::default(), Vec3::NEG_Z);
    app.world_mut()
        .spawn((Skier, state, LinearVelocity::default()))
        .id()
}

#[test]
fn test_bus_despawns_consumed_obstacles_and_keeps_rocks() {
    let mut app = bus_app();
    let skier = spawn_skier(&mut app);
    let tree_id = app.world_mut().spawn(tree()).id();
    let rock_id = app.world_mut().spawn(rock(2.0)).id();
    let forward = app.world().get::<SkierState>(skier).unwrap().forward();

    // The same contact reported twice in one frame
    app.world_mut().write_message(ObstacleTouched {
        obstacle: tree_id,
        skier,
    });
    app.world_mut().write_message(ObstacleTouched {
        obstacle: tree_id,
        skier,
    });
    app.world_mut().write_message(ObstacleTouched {
        obstacle: rock_id,
        skier,
    });
    app.update();

    assert!(app.world().get::<Obstacle>(tree_id).is_none());
    let remaining = app.world().get::<Obstacle>(rock_id).unwrap();
    assert_eq!(remaining.state, ObstacleState::Armed);

    // Only one knockback for the doubled tree contact
    let sent = &app.world().resource::<SentKnockbacks>().0;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].skier, skier);

    let state = app.world().get::<SkierState>(skier).unwrap();
    assert!(state.is_knocked_back());
    // The rock's reduction landed before the knockback started
    assert_eq!(state.current_speed(), 3.0);

    let velocity = app.world().get::<LinearVelocity>(skier).unwrap().0;
    assert!((velocity - (-forward * 10.0)).length() < 1e-4);
}

#[test]
fn test_bus_skips_touches_from_unknown_skiers() {
    let mut app = bus_app();
    let stranger = app.world_mut().spawn_empty().id();
    let tree_id = app.world_mut().spawn(tree()).id();

    app.world_mut().write_message(ObstacleTouched {
        obstacle: tree_id,
        skier: stranger,
    });
    app.update();

    let obstacle = app.world().get::<Obstacle>(tree_id).unwrap();
    assert!(obstacle.is_armed());
    assert!(app.world().resource::<SentKnockbacks>().0.is_empty());
}

#[test]
fn test_dispatch_ignores_a_second_knockback() {
    let mut app = bus_app();
    let skier = spawn_skier(&mut app);

    app.world_mut().write_message(KnockbackRequest {
        skier,
        params: KnockbackParams {
            force: 10.0,
            duration: 0.7,
        },
    });
    app.update();
    let first = app.world().get::<LinearVelocity>(skier).unwrap().0;
    assert!((first.length() - 10.0).abs() < 1e-4);

    app.world_mut().write_message(KnockbackRequest {
        skier,
        params: KnockbackParams {
            force: 4.0,
            duration: 2.0,
        },
    });
    app.update();

    let state = app.world().get::<SkierState>(skier).unwrap();
    assert!(state.is_knocked_back());
    assert_eq!(app.world().get::<LinearVelocity>(skier).unwrap().0, first);
}
