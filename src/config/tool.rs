use super::error::ConfigError;
use super::quoting;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The closed set of external tools the pipeline shells out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    MatlabBinary,
    CurrentsBuildDir,
    MeshlabServerBinary,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        ToolName::MatlabBinary,
        ToolName::CurrentsBuildDir,
        ToolName::MeshlabServerBinary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::MatlabBinary => "matlab_binary",
            ToolName::CurrentsBuildDir => "currents_build_dir",
            ToolName::MeshlabServerBinary => "meshlab_server_binary",
        }
    }

    /// Kind is fixed per name; it is not configurable.
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolName::MatlabBinary | ToolName::MeshlabServerBinary => ToolKind::Executable,
            ToolName::CurrentsBuildDir => ToolKind::Directory,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "matlab_binary" => Ok(ToolName::MatlabBinary),
            "currents_build_dir" => Ok(ToolName::CurrentsBuildDir),
            "meshlab_server_binary" => Ok(ToolName::MeshlabServerBinary),
            other => Err(ConfigError::UnknownTool {
                name: other.to_string(),
            }),
        }
    }
}

/// What a configured path is expected to point at on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Executable,
    Directory,
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolKind::Executable => f.write_str("executable"),
            ToolKind::Directory => f.write_str("directory"),
        }
    }
}

/// A named external-tool location. The path is stored raw and unquoted;
/// quoting happens only when a command string is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocation {
    pub name: ToolName,
    pub path: PathBuf,
}

impl ToolLocation {
    pub(super) fn new(name: ToolName, path: PathBuf) -> Self {
        Self { name, path }
    }

    pub fn kind(&self) -> ToolKind {
        self.name.kind()
    }

    /// The path rendered as a single shell argument for this platform,
    /// quoted only when it contains whitespace.
    pub fn command_string(&self) -> String {
        quoting::quote_for_platform(&self.path)
    }
}
