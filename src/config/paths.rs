use super::defaults::{
    DEFAULT_CURRENTS_BUILD_DIR, DEFAULT_MATLAB_BINARY, DEFAULT_MESHLAB_SERVER_BINARY,
};
use super::error::{ConfigError, PathFailure, PathProblem, ValidationReport};
use super::quoting::strip_shell_quotes;
use super::tool::{ToolKind, ToolLocation, ToolName};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The external-tool locations the pipeline depends on, resolved once at
/// startup. Immutable after load; pass by reference to consumers rather
/// than reading it as ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    matlab_binary: ToolLocation,
    currents_build_dir: ToolLocation,
    meshlab_server_binary: ToolLocation,
}

impl ToolPaths {
    /// Load from a config file path (or the default path if None), with
    /// environment-variable overrides applied on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    pub(super) fn new(matlab: PathBuf, currents_build: PathBuf, meshlab: PathBuf) -> Self {
        Self {
            matlab_binary: ToolLocation::new(ToolName::MatlabBinary, matlab),
            currents_build_dir: ToolLocation::new(ToolName::CurrentsBuildDir, currents_build),
            meshlab_server_binary: ToolLocation::new(ToolName::MeshlabServerBinary, meshlab),
        }
    }

    /// Lookup by string identifier. Unknown names are a programmer error
    /// and fail immediately.
    pub fn get(&self, name: &str) -> Result<&ToolLocation, ConfigError> {
        let name: ToolName = name.parse()?;
        Ok(self.location(name))
    }

    pub fn location(&self, name: ToolName) -> &ToolLocation {
        match name {
            ToolName::MatlabBinary => &self.matlab_binary,
            ToolName::CurrentsBuildDir => &self.currents_build_dir,
            ToolName::MeshlabServerBinary => &self.meshlab_server_binary,
        }
    }

    pub fn matlab_binary(&self) -> &ToolLocation {
        &self.matlab_binary
    }

    pub fn currents_build_dir(&self) -> &ToolLocation {
        &self.currents_build_dir
    }

    pub fn meshlab_server_binary(&self) -> &ToolLocation {
        &self.meshlab_server_binary
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolLocation> {
        ToolName::ALL.iter().map(|name| self.location(*name))
    }

    /// Check every configured path against the file system, aggregating all
    /// failures into one report. Executables must exist as regular files
    /// (with an execute bit on Unix); directories must exist as directories.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut failures = Vec::new();
        for location in self.iter() {
            debug!(tool = %location.name, path = %location.path.display(), "Checking tool path");
            if let Some(problem) = check_location(location) {
                failures.push(PathFailure {
                    name: location.name,
                    path: location.path.clone(),
                    problem,
                });
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(ValidationReport { failures }))
        }
    }

    /// Render the effective configuration as a TOML document.
    pub fn to_raw_toml(&self) -> String {
        super::serializer::to_raw_toml_string(self)
    }
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self::new(
            PathBuf::from(strip_shell_quotes(DEFAULT_MATLAB_BINARY)),
            PathBuf::from(strip_shell_quotes(DEFAULT_CURRENTS_BUILD_DIR)),
            PathBuf::from(strip_shell_quotes(DEFAULT_MESHLAB_SERVER_BINARY)),
        )
    }
}

fn check_location(location: &ToolLocation) -> Option<PathProblem> {
    let path = &location.path;
    match location.kind() {
        ToolKind::Directory => {
            if !path.exists() {
                Some(PathProblem::Missing)
            } else if !path.is_dir() {
                Some(PathProblem::NotADirectory)
            } else {
                None
            }
        }
        ToolKind::Executable => {
            if !path.exists() {
                Some(PathProblem::Missing)
            } else if !path.is_file() {
                Some(PathProblem::NotAFile)
            } else if !is_executable(path) {
                Some(PathProblem::NotExecutable)
            } else {
                None
            }
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

// Windows has no execute bit; existence as a regular file is the best
// check available without invoking the binary.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod");
    }

    #[cfg(not(unix))]
    fn make_executable(_path: &Path) {}

    fn valid_paths(dir: &Path) -> ToolPaths {
        let matlab = dir.join("matlab");
        let meshlab = dir.join("meshlabserver");
        let currents = dir.join("currents_build");
        fs::write(&matlab, "#!/bin/sh\n").expect("write matlab stub");
        fs::write(&meshlab, "#!/bin/sh\n").expect("write meshlab stub");
        fs::create_dir(&currents).expect("create currents dir");
        make_executable(&matlab);
        make_executable(&meshlab);
        ToolPaths::new(matlab, currents, meshlab)
    }

    #[test]
    fn get_returns_nonempty_paths_for_all_names() {
        let paths = ToolPaths::default();
        for name in ToolName::ALL {
            let location = paths.get(name.as_str()).expect("known name");
            assert!(!location.path.as_os_str().is_empty());
            assert_eq!(location.name, name);
        }
    }

    #[test]
    fn get_fails_for_unknown_name() {
        let paths = ToolPaths::default();
        let err = paths.get("unknown_tool").expect_err("must fail");
        assert!(matches!(err, ConfigError::UnknownTool { .. }));
    }

    #[test]
    fn validate_reports_every_missing_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ToolPaths::new(
            dir.path().join("no-matlab"),
            dir.path().join("no-currents"),
            dir.path().join("no-meshlab"),
        );
        let err = paths.validate().expect_err("must fail");
        match err {
            ConfigError::Validation(report) => {
                assert_eq!(report.failures.len(), 3);
                let names: Vec<_> = report.failures.iter().map(|f| f.name).collect();
                assert_eq!(names, ToolName::ALL);
                assert!(
                    report
                        .failures
                        .iter()
                        .all(|f| f.problem == PathProblem::Missing)
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_accepts_real_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = valid_paths(dir.path());
        paths.validate().expect("validation succeeds");
    }

    #[test]
    fn validate_rejects_file_where_directory_expected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut paths = valid_paths(dir.path());
        let file_as_dir = dir.path().join("not_a_dir");
        fs::write(&file_as_dir, "plain file").expect("write");
        paths = ToolPaths::new(
            paths.matlab_binary.path.clone(),
            file_as_dir,
            paths.meshlab_server_binary.path.clone(),
        );
        let err = paths.validate().expect_err("must fail");
        match err {
            ConfigError::Validation(report) => {
                assert_eq!(report.failures.len(), 1);
                assert_eq!(report.failures[0].name, ToolName::CurrentsBuildDir);
                assert_eq!(report.failures[0].problem, PathProblem::NotADirectory);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn validate_rejects_non_executable_binary() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = valid_paths(dir.path());
        fs::set_permissions(
            &paths.matlab_binary.path,
            fs::Permissions::from_mode(0o644),
        )
        .expect("chmod");
        let err = paths.validate().expect_err("must fail");
        match err {
            ConfigError::Validation(report) => {
                assert_eq!(report.failures.len(), 1);
                assert_eq!(report.failures[0].problem, PathProblem::NotExecutable);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn quoted_config_value_resolves_after_stripping() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spaced = dir.path().join("Program Files");
        fs::create_dir(&spaced).expect("mkdir");
        let binary = spaced.join("meshlabserver");
        fs::write(&binary, "#!/bin/sh\n").expect("write");
        make_executable(&binary);

        // Value as an operator would write it, with embedded quotes.
        let quoted = format!("\"{}\"", binary.display());
        let stripped = PathBuf::from(crate::config::quoting::strip_shell_quotes(&quoted));
        let location = ToolLocation::new(ToolName::MeshlabServerBinary, stripped);
        assert!(check_location(&location).is_none());
    }
}
