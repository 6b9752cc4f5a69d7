//! Effects domain: timed overrides (boost, knockback) and the screen shake trigger.

mod boost;
mod knockback;
mod shake;
#[cfg(test)]
mod tests;

pub use knockback::{KnockbackParams, KnockbackRequest};
pub use shake::{ScreenShake, ShakeParams, ShakeRequest};
pub(crate) use knockback::dispatch_knockback;
pub(crate) use shake::advance_screen_shake;

use bevy::prelude::*;

use crate::core::SkierSet;
use crate::effects::boost::trigger_boost;
use crate::effects::shake::start_screen_shake;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<KnockbackRequest>()
            .add_message::<ShakeRequest>()
            // Knockback first so a same-frame boost press is refused, not wasted
            .add_systems(
                Update,
                (dispatch_knockback, trigger_boost)
                    .chain()
                    .in_set(SkierSet::Effects),
            )
            .add_systems(
                Update,
                (start_screen_shake, advance_screen_shake)
                    .chain()
                    .in_set(SkierSet::Presentation),
            );
    }
}
