pub mod defaults;
pub mod error;
pub mod loader;
pub mod paths;
pub mod quoting;
pub mod serializer;
pub mod tool;

/// Default config file path - can be overridden via CLI argument
pub const CONFIG_PATH: &str = defaults::DEFAULT_CONFIG_PATH;

pub use error::{ConfigError, PathFailure, PathProblem, ValidationReport};
pub use paths::ToolPaths;
pub use tool::{ToolKind, ToolLocation, ToolName};
