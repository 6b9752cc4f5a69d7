//! Loader for the tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::GameTuning;

/// Tuning file read at startup, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningFormat {
    Ron,
    Json,
}

impl TuningFormat {
    /// Picks the format from the file extension; anything but `.json` is RON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Ron,
        }
    }
}

/// Parse tuning text. `file` is only used for error reporting.
pub fn parse_tuning(
    contents: &str,
    format: TuningFormat,
    file: &str,
) -> Result<GameTuning, ContentLoadError> {
    let parsed = match format {
        TuningFormat::Ron => ron_options()
            .from_str::<GameTuning>(contents)
            .map_err(|e| e.to_string()),
        TuningFormat::Json => serde_json::from_str::<GameTuning>(contents).map_err(|e| e.to_string()),
    };

    parsed.map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load a tuning file from disk, RON or JSON by extension.
pub fn load_tuning(path: &Path) -> Result<GameTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, TuningFormat::from_path(path), &file_name)
}
