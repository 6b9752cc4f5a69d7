//! Audio domain: one-shot cues and the looping skiing sound.
//!
//! Audio never feeds back into the simulation. A cue without a loaded clip is
//! reported and skipped.

use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::content::AudioTuning;
use crate::core::SkierSet;
use crate::movement::{Skier, SkierState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Skier slammed into a knockback obstacle
    Collision,
    /// Skier picked up a cosmetic obstacle
    Collect,
}

#[derive(Debug, Clone, Copy)]
pub struct PlaySoundCue(pub SoundCue);

impl Message for PlaySoundCue {}

/// Loaded clips, if any were configured.
#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    pub collision: Option<Handle<AudioSource>>,
    pub collect: Option<Handle<AudioSource>>,
    pub skiing_loop: Option<Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn clip(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        match cue {
            SoundCue::Collision => self.collision.as_ref(),
            SoundCue::Collect => self.collect.as_ref(),
        }
    }
}

/// Marker for the skier's looping ski sound.
#[derive(Component, Debug)]
pub struct SkiingLoop;

/// Whether the ski loop should be audible for this skier state.
pub fn skiing_audible(state: &SkierState) -> bool {
    state.is_grounded() && state.current_speed() > 0.0
}

pub struct AudioCuesPlugin;

impl Plugin for AudioCuesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .init_resource::<AudioTuning>()
            .add_message::<PlaySoundCue>()
            .add_systems(Startup, load_sound_library)
            .add_systems(
                Update,
                (attach_skiing_loop, play_sound_cues, update_skiing_loop)
                    .chain()
                    .in_set(SkierSet::Presentation),
            );
    }
}

fn load_sound_library(
    asset_server: Res<AssetServer>,
    tuning: Res<AudioTuning>,
    mut library: ResMut<SoundLibrary>,
) {
    library.collision = tuning.collision_cue.as_ref().map(|p| asset_server.load(p.clone()));
    library.collect = tuning.collect_cue.as_ref().map(|p| asset_server.load(p.clone()));
    library.skiing_loop = tuning.skiing_loop.as_ref().map(|p| asset_server.load(p.clone()));

    info!(
        "Sound library: collision={}, collect={}, skiing_loop={}",
        library.collision.is_some(),
        library.collect.is_some(),
        library.skiing_loop.is_some()
    );
}

fn attach_skiing_loop(
    mut commands: Commands,
    library: Res<SoundLibrary>,
    tuning: Res<AudioTuning>,
    skiers: Query<Entity, Added<Skier>>,
) {
    for skier in &skiers {
        let Some(clip) = library.skiing_loop.clone() else {
            warn!("No skiing loop configured; skier will ski silently");
            continue;
        };
        commands.entity(skier).with_children(|parent| {
            parent.spawn((
                Name::new("Skiing Loop"),
                SkiingLoop,
                AudioPlayer::new(clip),
                PlaybackSettings::LOOP
                    .paused()
                    .with_volume(Volume::Linear(tuning.skiing_volume)),
            ));
        });
    }
}

fn play_sound_cues(
    mut commands: Commands,
    mut cues: MessageReader<PlaySoundCue>,
    library: Res<SoundLibrary>,
) {
    for PlaySoundCue(cue) in cues.read() {
        let Some(clip) = library.clip(*cue) else {
            warn!("Sound cue {:?} has no clip; skipping", cue);
            continue;
        };
        debug!("Playing sound cue {:?}", cue);
        commands.spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN));
    }
}

fn update_skiing_loop(
    skiers: Query<(&SkierState, &Children), With<Skier>>,
    sinks: Query<&AudioSink, With<SkiingLoop>>,
) {
    for (state, children) in &skiers {
        let audible = skiing_audible(state);
        for child in children.iter() {
            let Ok(sink) = sinks.get(child) else {
                continue;
            };
            if audible && sink.is_paused() {
                sink.play();
            } else if !audible && !sink.is_paused() {
                sink.pause();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::{SoundCue, SoundLibrary, skiing_audible};
    use crate::movement::{SkierState, SkierTuning, TickInput};

    #[test]
    fn test_empty_library_has_no_clips() {
        let library = SoundLibrary::default();
        assert!(library.clip(SoundCue::Collision).is_none());
        assert!(library.clip(SoundCue::Collect).is_none());
    }

    #[test]
    fn test_skiing_loop_follows_ground_contact() {
        let tuning = SkierTuning::default();
        let mut state = SkierState::new(&tuning, Vec3::NEG_Z);
        assert!(!skiing_audible(&state));

        state.tick(
            &tuning,
            TickInput {
                dt: 0.1,
                now: 0.1,
                grounded: true,
                steer: Vec3::ZERO,
            },
        );
        assert!(skiing_audible(&state));

        state.set_speed(0.0, &tuning);
        assert!(!skiing_audible(&state));
    }
}
