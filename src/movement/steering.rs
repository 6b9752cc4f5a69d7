//! Heading math for the skier.
//!
//! All angles are yaw degrees about +Y. Positive angles turn counter-clockwise
//! when seen from above, which matches `Quat::from_rotation_y`.

use bevy::prelude::*;

/// Flattens a vector onto the ground plane and normalizes it.
pub fn planar_direction(v: Vec3) -> Option<Vec3> {
    Vec3::new(v.x, 0.0, v.z).try_normalize()
}

/// Maps stick input onto the ground plane. Stick up is downhill (-Z).
pub fn input_direction(axis: Vec2) -> Vec3 {
    Vec3::new(axis.x, 0.0, -axis.y).clamp_length_max(1.0)
}

/// Signed yaw from `from` to `to`, in degrees within [-180, 180].
pub fn signed_angle_deg(from: Vec3, to: Vec3) -> f32 {
    let (Some(from), Some(to)) = (planar_direction(from), planar_direction(to)) else {
        return 0.0;
    };
    from.cross(to).y.atan2(from.dot(to)).to_degrees()
}

pub fn rotate_heading(spawn_forward: Vec3, heading: f32) -> Vec3 {
    Quat::from_rotation_y(heading.to_radians()) * spawn_forward
}

/// Next heading offset (from spawn-forward) when steering toward `desired`.
///
/// The target is clamped to `±max_turn` around the spawn heading as a whole,
/// so repeated steering can never walk past the limit. The heading then moves
/// toward the target by at most `max_step` degrees.
pub fn steer_heading(
    heading: f32,
    forward: Vec3,
    desired: Vec3,
    max_turn: f32,
    max_step: f32,
) -> f32 {
    let target = (heading + signed_angle_deg(forward, desired)).clamp(-max_turn, max_turn);
    heading + (target - heading).clamp(-max_step, max_step)
}
