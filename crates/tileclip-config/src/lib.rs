//! Configuration for the tileclip workspace.
//!
//! Settings persist to disk as a RON file, accept CLI overrides via clap, and
//! stay forward/backward compatible through `#[serde(default)]`.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, ClippingConfig, Config, DebugConfig, config_path, default_config_dir,
};
pub use error::ConfigError;
