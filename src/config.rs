use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    FileFormat,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::WrapWidth;
use crate::VERSION;

const ENV_PREFIX: &str = "COWSAY";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),
}

// Values that may come from the config file or the environment.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    wrap: Option<i64>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub message: String,
    pub wrap: WrapWidth,
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            message: String::new(),
            wrap: WrapWidth::DEFAULT,
            config_file: None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cowsay", version = VERSION, about = "A talking cow written in Rust", long_about = None)]
pub struct CliArgs {
    /// The message to display in the speech bubble
    #[arg(required_unless_present = "debug_config")]
    pub message: Vec<String>,

    /// Maximum line length in the speech bubble
    #[arg(short, long, allow_negative_numbers = true)]
    pub wrap: Option<i64>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

/// Resolves the configuration: args > environment > file > defaults.
pub fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).try_parsing(true);
    let env_map: Map<String, Value> = env_source.collect()?;

    build_config(args, Some(env_map))
}

/// The default config file location, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cowsay-rs").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

// Separate from `load_config` so tests can inject overrides instead of env vars
fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<Config, ConfigError> {
    let config_file = match &args.config {
        Some(path) if !path.exists() => return Err(ConfigError::FileNotFound(path.clone())),
        Some(path) => Some(path.clone()),
        None => default_config_path().filter(|path| path.exists()),
    };

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file {
        debug!("reading configuration from {}", path.display());
        config_builder = config_builder.add_source(File::from(path.clone()).format(FileFormat::Toml));
    }

    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            debug!("configuration override for {}", key);
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    let config = Config {
        message: args.message.join(" "),
        wrap: args
            .wrap
            .or(loaded_sources.wrap)
            .map(WrapWidth::from)
            .unwrap_or_default(),
        config_file,
    };

    debug!("resolved wrap width {}", config.wrap.get());
    Ok(config)
}
