//! Tile clipping demo.
//!
//! Loads the configuration, initializes logging, then drives the clipping tool
//! through a scripted session over two in-memory tilesets and logs which tiles
//! end up excluded.
//!
//! Run with: `cargo run -p tileclip-demo -- --log-level debug`

mod scene;
mod session;

use std::path::PathBuf;

use clap::Parser;
use tileclip_config::{CliArgs, Config, default_config_dir};
use tileclip_core::{ClippingTool, MaterialParameterCollection};
use tracing::{error, info};

use crate::session::Session;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".tileclip"));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    tileclip_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let limits = config.clipping.limits();
    info!(
        "Clipping limits: {} plane(s), {} box(es)",
        limits.max_planes(),
        limits.max_boxes()
    );

    let tool = ClippingTool::new(limits, MaterialParameterCollection::new());
    match Session::new(tool).run() {
        Ok(reports) => {
            for report in &reports {
                info!(label = report.label, excluded = ?report.excluded, "Step finished");
            }
            info!("Clipping session completed: {} step(s)", reports.len());
        }
        Err(e) => {
            error!("Clipping session aborted: {e}");
            std::process::exit(1);
        }
    }
}
