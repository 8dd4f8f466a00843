use super::tool::ToolName;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating tool locations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown tool name '{name}'")]
    UnknownTool { name: String },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Validation(ValidationReport),
}

/// Every path problem found by a validation pass, so an operator can fix
/// all of them in one edit instead of being told one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub failures: Vec<PathFailure>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} misconfigured tool path{}:",
            self.failures.len(),
            if self.failures.len() == 1 { "" } else { "s" }
        )?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFailure {
    pub name: ToolName,
    pub path: PathBuf,
    pub problem: PathProblem,
}

impl fmt::Display for PathFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} ({})", self.name, self.path, self.problem)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProblem {
    Missing,
    NotAFile,
    NotADirectory,
    NotExecutable,
}

impl fmt::Display for PathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathProblem::Missing => f.write_str("does not exist"),
            PathProblem::NotAFile => f.write_str("not a regular file"),
            PathProblem::NotADirectory => f.write_str("not a directory"),
            PathProblem::NotExecutable => f.write_str("not executable"),
        }
    }
}
