//! Movement domain: skier components and the per-tick motion state machine.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::SkierTuning;
use crate::movement::steering::{planar_direction, rotate_heading, steer_heading};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Traversable slope surfaces
    Ground,
    /// The skier body
    Skier,
    /// Rocks, trees, ice patches
    Obstacle,
}

#[derive(Component, Debug)]
pub struct Skier;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Result of the downward contact probe, refreshed every frame.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact {
    pub grounded: bool,
    pub distance: Option<f32>,
}

/// Which rule owns the skier's velocity this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MotionMode {
    /// Steering and acceleration drive the skier.
    #[default]
    Steady,
    /// Speed pinned to the boost speed until the timer runs out.
    Boosting { timer: f32 },
    /// Velocity forced along a fixed direction until `ends_at`; no control.
    KnockedBack {
        ends_at: f32,
        direction: Vec3,
        force: f32,
    },
}

/// Velocity the movement tick wants committed to the physics body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocityCommand {
    /// Horizontal velocity only. The vertical component stays with physics.
    Planar(Vec3),
    /// Replaces the whole velocity.
    Override(Vec3),
}

impl VelocityCommand {
    pub fn apply(self, current: Vec3) -> Vec3 {
        match self {
            Self::Planar(v) => Vec3::new(v.x, current.y, v.z),
            Self::Override(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostRejection {
    AlreadyBoosting,
    CoolingDown,
    KnockedBack,
    Disabled,
}

impl std::fmt::Display for BoostRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::AlreadyBoosting => "already boosting",
            Self::CoolingDown => "boost cooling down",
            Self::KnockedBack => "knocked back",
            Self::Disabled => "boost duration is not positive",
        };
        f.write_str(reason)
    }
}

/// Everything one tick needs from the outside world.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub dt: f32,
    /// Simulation clock, used for knockback deadlines
    pub now: f32,
    pub grounded: bool,
    /// Desired ground-plane direction, length = stick deflection
    pub steer: Vec3,
}

/// Movement state owned by the skier.
///
/// Speed, heading and the timed override effects all live here so that a
/// single `tick` decides who writes the velocity.
#[derive(Component, Debug, Clone)]
pub struct SkierState {
    current_speed: f32,
    spawn_forward: Vec3,
    /// Yaw offset from `spawn_forward`, degrees
    heading: f32,
    is_grounded: bool,
    mode: MotionMode,
    boost_cooldown: f32,
}

impl SkierState {
    pub fn new(tuning: &SkierTuning, spawn_forward: Vec3) -> Self {
        Self {
            current_speed: tuning.speed_floor(),
            spawn_forward: planar_direction(spawn_forward).unwrap_or(Vec3::NEG_Z),
            heading: 0.0,
            is_grounded: false,
            mode: MotionMode::Steady,
            boost_cooldown: 0.0,
        }
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn forward(&self) -> Vec3 {
        rotate_heading(self.spawn_forward, self.heading)
    }

    pub fn spawn_forward(&self) -> Vec3 {
        self.spawn_forward
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn is_boosting(&self) -> bool {
        matches!(self.mode, MotionMode::Boosting { .. })
    }

    pub fn is_knocked_back(&self) -> bool {
        matches!(self.mode, MotionMode::KnockedBack { .. })
    }

    pub fn is_controllable(&self) -> bool {
        !self.is_knocked_back()
    }

    pub fn boost_timer(&self) -> f32 {
        match self.mode {
            MotionMode::Boosting { timer } => timer,
            _ => 0.0,
        }
    }

    pub fn boost_cooldown(&self) -> f32 {
        self.boost_cooldown
    }

    /// Velocity a running knockback forces on the body.
    pub fn knockback_velocity(&self) -> Option<Vec3> {
        match self.mode {
            MotionMode::KnockedBack {
                direction, force, ..
            } => Some(direction * force),
            _ => None,
        }
    }

    /// Advances the skier by one frame and returns the velocity to commit.
    ///
    /// Order: groundedness, knockback expiry, steering, speed, velocity.
    pub fn tick(&mut self, tuning: &SkierTuning, input: TickInput) -> VelocityCommand {
        self.is_grounded = input.grounded;
        let released = self.expire_knockback(input.now);

        if !self.is_boosting() {
            self.boost_cooldown = (self.boost_cooldown - input.dt).max(0.0);
        }

        if self.is_controllable()
            && input.grounded
            && input.steer.length() >= tuning.input_threshold
        {
            let max_step = tuning.rotation_speed.max(0.0) * input.dt;
            self.heading = steer_heading(
                self.heading,
                self.forward(),
                input.steer,
                tuning.max_turn(),
                max_step,
            );
        }

        if input.grounded {
            match self.mode {
                MotionMode::Boosting { timer } => {
                    let timer = timer - input.dt;
                    if timer <= 0.0 {
                        self.end_boost(tuning);
                    } else {
                        self.mode = MotionMode::Boosting { timer };
                    }
                }
                _ => self.accelerate(tuning, input.dt),
            }
        }

        if released {
            return VelocityCommand::Override(Vec3::ZERO);
        }
        if let Some(velocity) = self.knockback_velocity() {
            return VelocityCommand::Override(velocity);
        }

        if input.grounded {
            VelocityCommand::Planar(self.forward() * self.current_speed)
        } else {
            // Airborne skiers lose their run-up; a boost is only suspended.
            if !self.is_boosting() {
                self.current_speed = tuning.speed_floor();
            }
            VelocityCommand::Planar(Vec3::ZERO)
        }
    }

    pub fn try_boost(&mut self, tuning: &SkierTuning) -> Result<(), BoostRejection> {
        match self.mode {
            MotionMode::Boosting { .. } => Err(BoostRejection::AlreadyBoosting),
            MotionMode::KnockedBack { .. } => Err(BoostRejection::KnockedBack),
            MotionMode::Steady if self.boost_cooldown > 0.0 => Err(BoostRejection::CoolingDown),
            MotionMode::Steady if tuning.boost_duration <= 0.0 => Err(BoostRejection::Disabled),
            MotionMode::Steady => {
                self.mode = MotionMode::Boosting {
                    timer: tuning.boost_duration,
                };
                self.current_speed = tuning.boost_speed.max(0.0);
                Ok(())
            }
        }
    }

    /// Starts a knockback away from the current facing.
    ///
    /// Returns false when a knockback is already running; the running one is
    /// left untouched. An active boost is ended first.
    pub fn begin_knockback(
        &mut self,
        now: f32,
        force: f32,
        duration: f32,
        tuning: &SkierTuning,
    ) -> bool {
        if self.is_knocked_back() {
            return false;
        }
        if self.is_boosting() {
            self.end_boost(tuning);
        }
        self.mode = MotionMode::KnockedBack {
            ends_at: now + duration.max(0.0),
            direction: -self.forward(),
            force: force.max(0.0),
        };
        true
    }

    /// Lowers speed by `amount` (negative amounts count as zero), floored at 0.
    ///
    /// A running boost keeps its pinned speed and the reduction is dropped.
    pub fn reduce_speed(&mut self, amount: f32) -> f32 {
        if !self.is_boosting() {
            self.current_speed = (self.current_speed - amount.max(0.0)).max(0.0);
        }
        self.current_speed
    }

    #[cfg(test)]
    pub(crate) fn set_speed(&mut self, speed: f32, tuning: &SkierTuning) -> f32 {
        if !self.is_boosting() {
            self.current_speed = speed.max(0.0).min(tuning.speed_cap());
        }
        self.current_speed
    }

    fn accelerate(&mut self, tuning: &SkierTuning, dt: f32) {
        self.current_speed = (self.current_speed + tuning.acceleration * dt)
            .max(tuning.speed_floor())
            .min(tuning.speed_cap());
    }

    fn end_boost(&mut self, tuning: &SkierTuning) {
        self.mode = MotionMode::Steady;
        self.current_speed = tuning.speed_floor();
        self.boost_cooldown = tuning.boost_cooldown.max(0.0);
    }

    fn expire_knockback(&mut self, now: f32) -> bool {
        match self.mode {
            MotionMode::KnockedBack { ends_at, .. } if now >= ends_at => {
                self.mode = MotionMode::Steady;
                true
            }
            _ => false,
        }
    }
}
