use super::defaults::{
    CONFIG_PATH, CURRENTS_BUILD_DIR_ENV, DEFAULT_CURRENTS_BUILD_DIR, DEFAULT_MATLAB_BINARY,
    DEFAULT_MESHLAB_SERVER_BINARY, ENV_PATH, MATLAB_BINARY_ENV, MESHLAB_SERVER_ENV,
};
use super::error::ConfigError;
use super::paths::ToolPaths;
use super::quoting::strip_shell_quotes;
use dotenvy::from_filename;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, warn};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub matlab_binary: Option<String>,
    pub currents_build_dir: Option<String>,
    pub meshlab_server_binary: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load the tool locations from a file path (or the default path if None).
/// A missing file falls back to the built-in defaults; per-tool environment
/// variables override whatever the file layer produced.
pub fn load_config(path: Option<&Path>) -> Result<ToolPaths, ConfigError> {
    ensure_env_loaded();
    let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));
    let raw = read_config(config_path)?;
    Ok(build(raw))
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading tool location configuration file");
    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Configuration file not found; using built-in defaults");
            Ok(RawConfig::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn build(raw: RawConfig) -> ToolPaths {
    ToolPaths::new(
        resolve(MATLAB_BINARY_ENV, raw.matlab_binary, DEFAULT_MATLAB_BINARY),
        resolve(
            CURRENTS_BUILD_DIR_ENV,
            raw.currents_build_dir,
            DEFAULT_CURRENTS_BUILD_DIR,
        ),
        resolve(
            MESHLAB_SERVER_ENV,
            raw.meshlab_server_binary,
            DEFAULT_MESHLAB_SERVER_BINARY,
        ),
    )
}

/// env var > file value > built-in default, quote-stripped in every case.
fn resolve(env_key: &str, file_value: Option<String>, default: &str) -> PathBuf {
    let value = match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(var = env_key, "Overriding tool location from environment");
            value
        }
        _ => file_value.unwrap_or_else(|| default.to_string()),
    };
    PathBuf::from(strip_shell_quotes(&value))
}
