//! Built-in tool locations, used when no config file or environment
//! override is present. The Windows defaults carry embedded shell quotes
//! exactly as operators tend to write them; the loader strips those.

pub const DEFAULT_CONFIG_PATH: &str = "config/tools.toml";
pub const CONFIG_PATH: &str = DEFAULT_CONFIG_PATH;
pub const ENV_PATH: &str = "config/.env";

pub const DEFAULT_MATLAB_BINARY: &str = r#""C:\Program Files\MATLAB\R2024a\bin\matlab""#;
pub const DEFAULT_CURRENTS_BUILD_DIR: &str = "./currents_build";
pub const DEFAULT_MESHLAB_SERVER_BINARY: &str = r#""C:\Program Files\VCG\MeshLab\meshlabserver""#;

/// Environment variables that override the corresponding config keys.
pub const MATLAB_BINARY_ENV: &str = "MATLAB_BIN_PATH";
pub const CURRENTS_BUILD_DIR_ENV: &str = "CURRENTS_BUILD_PATH";
pub const MESHLAB_SERVER_ENV: &str = "MESHLABSERVER_PATH";
