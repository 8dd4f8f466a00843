pub mod cli;
pub mod config;

pub use cli::{Cli, RunMode};
pub use config::{ConfigError, ToolKind, ToolLocation, ToolName, ToolPaths};

use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting exoshape-tools");
    debug!(mode = ?cli.mode, config = ?cli.config, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    match cli.mode {
        RunMode::Check => check(config_path),
        RunMode::Show => show(config_path),
        RunMode::Init => init_config(config_path),
    }
}

fn check(config_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let paths = ToolPaths::load(config_path)?;
    for location in paths.iter() {
        println!(
            "{:<22} {:<11} {}",
            location.name,
            location.kind(),
            location.path.display()
        );
    }
    match paths.validate() {
        Ok(()) => {
            info!("All tool paths resolved");
            println!("ok: all tool paths resolved");
            Ok(())
        }
        Err(err) => {
            error!(%err, "Tool path validation failed");
            eprintln!("{err}");
            Err(err.into())
        }
    }
}

fn show(config_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let paths = ToolPaths::load(config_path)?;
    print!("{}", paths.to_raw_toml());
    Ok(())
}

fn init_config(config_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let target = config_path.unwrap_or_else(|| Path::new(config::CONFIG_PATH));
    if target.exists() {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("refusing to overwrite existing config at {}", target.display()),
        )));
    }
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(target, ToolPaths::default().to_raw_toml())?;
    info!(path = %target.display(), "Wrote starter configuration");
    println!("wrote {}", target.display());
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
