use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skinsight_engine::EngineConfig;

/// Current config version. Bump this when changing the shape of an
/// existing field, and convert older files in [`load_config`].
pub const CURRENT_VERSION: u32 = 1;

fn current_version() -> u32 {
    CURRENT_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinsightConfig {
    /// Schema version. Missing means current.
    #[serde(default = "current_version")]
    pub config_version: u32,
    #[serde(default)]
    pub engine: EngineConfig,
    /// Pause before the result is shown, mirroring the web app's
    /// "analyzing" screen. 0 disables it.
    #[serde(default)]
    pub thinking_delay_ms: u64,
}

impl Default for SkinsightConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            engine: EngineConfig::default(),
            thinking_delay_ms: 0,
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("skinsight"))
}

/// `<platform config dir>/skinsight/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<SkinsightConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SkinsightConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(u64::from(CURRENT_VERSION));
    if on_disk_version > u64::from(CURRENT_VERSION) {
        return Err(eyre::eyre!(
            "config_version {on_disk_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update skinsight."
        ));
    }

    let config: SkinsightConfig = serde_json::from_value(json)?;
    Ok(config)
}

pub fn save_config(config: &SkinsightConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent directory", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config(path: &Path) -> eyre::Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
