//! Effects domain: fire-and-forget screen shake.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::SimRng;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeParams {
    pub duration: f32,
    pub magnitude: f32,
}

impl ShakeParams {
    pub const fn new(duration: f32, magnitude: f32) -> Self {
        Self {
            duration,
            magnitude,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShakeRequest(pub ShakeParams);

impl Message for ShakeRequest {}

/// Camera jitter state. The offset is applied in camera space by the camera rig.
#[derive(Component, Debug, Default, Clone)]
pub struct ScreenShake {
    elapsed: f32,
    duration: f32,
    magnitude: f32,
    offset: Vec3,
}

impl ScreenShake {
    /// Starts a shake, or widens a running one to cover the new request.
    pub fn start(&mut self, params: ShakeParams) {
        let duration = params.duration.max(0.0);
        let magnitude = params.magnitude.abs();

        if self.is_active() {
            self.duration = (self.duration - self.elapsed).max(duration);
            self.magnitude = self.magnitude.max(magnitude);
        } else {
            self.duration = duration;
            self.magnitude = magnitude;
        }
        self.elapsed = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Samples this frame's offset; returns to zero once the shake has run out.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Vec3 {
        if !self.is_active() {
            self.offset = Vec3::ZERO;
            return self.offset;
        }

        let x = rng.random_range(-0.5..0.5) * self.magnitude;
        let y = rng.random_range(-0.5..0.5) * self.magnitude;
        self.offset = Vec3::new(x, y, 0.0);
        self.elapsed += dt;
        self.offset
    }
}

pub(crate) fn start_screen_shake(
    mut requests: MessageReader<ShakeRequest>,
    mut cameras: Query<&mut ScreenShake>,
) {
    for ShakeRequest(params) in requests.read() {
        if cameras.is_empty() {
            warn!("Screen shake requested but no camera carries ScreenShake");
            continue;
        }
        for mut shake in &mut cameras {
            shake.start(*params);
            debug!(
                "Screen shake: duration={:.2}s, magnitude={:.2}",
                params.duration,
                shake.magnitude()
            );
        }
    }
}

pub(crate) fn advance_screen_shake(
    time: Res<Time>,
    mut sim_rng: ResMut<SimRng>,
    mut cameras: Query<&mut ScreenShake>,
) {
    let dt = time.delta_secs();
    for mut shake in &mut cameras {
        shake.advance(dt, &mut sim_rng.rng);
    }
}
