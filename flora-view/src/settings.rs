//! Optional JSON configuration file for the viewer.

use std::{fs, path::Path};

use anyhow::Context;
use flora_core::config::SceneConfig;

/// Reads and validates a [`SceneConfig`] from a JSON file.
///
/// Missing fields take their default values.
///
/// ### Parameters
/// - `path` - Path to the JSON file.
///
/// ### Returns
/// - `Ok(config)` if the file was read, parsed and validated.
/// - `Err` describing which of these steps failed.
pub fn load(path: &Path) -> anyhow::Result<SceneConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: SceneConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(config)
}

/// Loads the config at `path` if one is given, falling back to defaults
/// with a warning when it cannot be used.
pub fn load_or_default(path: Option<&Path>) -> SceneConfig {
    let Some(path) = path else {
        return SceneConfig::default();
    };
    match load(path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("{err:#}; using default config");
            SceneConfig::default()
        }
    }
}
