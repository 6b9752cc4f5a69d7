//! Obstacles domain: obstacle kinds, lifecycle and touch reactions.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::audio::SoundCue;
use crate::effects::{KnockbackParams, ShakeParams};
use crate::movement::SkierState;

/// Tints a cosmetic changer can paint the skier with.
pub const RAINBOW_PALETTE: [Color; 7] = [
    Color::srgb(1.0, 0.0, 0.0),
    Color::srgb(1.0, 0.5, 0.0),
    Color::srgb(1.0, 0.92, 0.016),
    Color::srgb(0.0, 1.0, 0.0),
    Color::srgb(0.0, 0.0, 1.0),
    Color::srgb(0.29, 0.0, 0.51),
    Color::srgb(0.56, 0.0, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Rock: slows the skier, stays on the slope
    SpeedReducer { reduction: f32, shake: ShakeParams },
    /// Tree: throws the skier back, then disappears
    KnockbackSource {
        knockback: KnockbackParams,
        shake: ShakeParams,
    },
    /// Ice patch: recolours the skier, then disappears
    CosmeticChanger,
}

impl ObstacleKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SpeedReducer { .. } => "speed reducer",
            Self::KnockbackSource { .. } => "knockback source",
            Self::CosmeticChanger => "cosmetic changer",
        }
    }

    pub fn is_consumed_on_touch(&self) -> bool {
        !matches!(self, Self::SpeedReducer { .. })
    }

    /// Runs this kind's reaction against the skier.
    ///
    /// Speed changes go through the skier's own adjustment methods; every other
    /// effect is returned as a request for the collaborators to carry out.
    pub fn on_touch<R: Rng + ?Sized>(&self, skier: &mut SkierState, rng: &mut R) -> TouchReaction {
        let consumed = self.is_consumed_on_touch();
        match *self {
            Self::SpeedReducer { reduction, shake } => {
                let speed = skier.reduce_speed(reduction.max(0.0));
                TouchReaction {
                    consumed,
                    speed_after: Some(speed),
                    shake: Some(shake),
                    ..default()
                }
            }
            Self::KnockbackSource { knockback, shake } => TouchReaction {
                consumed,
                knockback: Some(knockback),
                shake: Some(shake),
                cue: Some(SoundCue::Collision),
                ..default()
            },
            Self::CosmeticChanger => TouchReaction {
                consumed,
                tint: Some(rng.random_range(0..RAINBOW_PALETTE.len())),
                cue: Some(SoundCue::Collect),
                ..default()
            },
        }
    }
}

/// What a touch asks the rest of the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchReaction {
    pub consumed: bool,
    pub speed_after: Option<f32>,
    pub shake: Option<ShakeParams>,
    pub knockback: Option<KnockbackParams>,
    /// Index into `RAINBOW_PALETTE`
    pub tint: Option<usize>,
    pub cue: Option<SoundCue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObstacleState {
    #[default]
    Armed,
    /// Reacted once and is waiting to be despawned
    Spent,
}

#[derive(Component, Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub state: ObstacleState,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind) -> Self {
        Self {
            kind,
            state: ObstacleState::Armed,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state == ObstacleState::Armed
    }

    /// Reacts to a touch if still armed.
    ///
    /// Consumed kinds end `Spent`, so a second contact reported in the same
    /// frame is ignored; persistent kinds go straight back to `Armed`.
    pub fn touch<R: Rng + ?Sized>(
        &mut self,
        skier: &mut SkierState,
        rng: &mut R,
    ) -> Option<TouchReaction> {
        if !self.is_armed() {
            return None;
        }
        let reaction = self.kind.on_touch(skier, rng);
        if reaction.consumed {
            self.state = ObstacleState::Spent;
        }
        Some(reaction)
    }
}
