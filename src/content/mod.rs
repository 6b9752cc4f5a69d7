//! Content domain: tuning file loading, sanitising and the course layout.

mod data;
mod loader;
mod validation;

pub use data::{AudioTuning, CourseLayout};

use data::{GameTuning, SCHEMA_VERSION};
use loader::{TUNING_PATH, load_tuning};
use validation::sanitize_tuning;

use bevy::prelude::*;
use std::path::Path;

use crate::core::SimRng;

/// Loads tuning before any other plugin builds, so their `init_resource`
/// calls find the configured values already in place.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = load_or_default(Path::new(TUNING_PATH));
        let course = CourseLayout::from_tuning(&tuning);
        let rng = SimRng::seeded(tuning.seed);

        info!(
            "Tuning ready: seed={}, obstacles={}",
            rng.seed,
            course.obstacles.len()
        );

        app.insert_resource(rng)
            .insert_resource(tuning.skier)
            .insert_resource(tuning.audio)
            .insert_resource(course);
    }
}

/// Load and sanitise the tuning file, falling back to defaults on any error.
fn load_or_default(path: &Path) -> GameTuning {
    let mut tuning = match load_tuning(path) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", path.display());
            tuning
        }
        Err(e) => {
            error!("{}; using built-in defaults", e);
            GameTuning::default()
        }
    };

    if tuning.schema_version != SCHEMA_VERSION {
        warn!(
            "Tuning schema version {} differs from supported {}",
            tuning.schema_version, SCHEMA_VERSION
        );
    }

    for warning in sanitize_tuning(&mut tuning) {
        warn!("{}", warning);
    }

    tuning
}
