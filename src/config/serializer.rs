use super::paths::ToolPaths;
use super::tool::ToolName;

/// Render the tool locations as a TOML document. Paths are written raw;
/// backslashes and quotes are escaped for TOML, not for any shell.
pub fn to_raw_toml_string(paths: &ToolPaths) -> String {
    let escape = |value: &str| value.replace('\\', "\\\\").replace('"', "\\\"");
    let mut raw = String::from("# External tool locations for the exoShape pipeline.\n");
    raw.push_str("# Each value may be overridden by MATLAB_BIN_PATH,\n");
    raw.push_str("# CURRENTS_BUILD_PATH, or MESHLABSERVER_PATH.\n\n");
    for name in ToolName::ALL {
        let location = paths.location(name);
        raw.push_str(&format!(
            "{} = \"{}\"  # {}\n",
            name,
            escape(&location.path.to_string_lossy()),
            name.kind(),
        ));
    }
    raw
}
