//! Obstacles domain: collision bus messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Published when the skier starts touching an obstacle.
///
/// Readers look `skier` up in their own queries, so a reader that does not
/// own that skier simply finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleTouched {
    pub obstacle: Entity,
    pub skier: Entity,
}

impl Message for ObstacleTouched {}

/// Request to recolour every visual part of a skier.
#[derive(Debug, Clone, Copy)]
pub struct TintRequest {
    pub skier: Entity,
    pub color: Color,
}

impl Message for TintRequest {}
