//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// CLI values override settings loaded from `tileclip.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tileclip", about = "Tile clipping and exclusion demo")]
pub struct CliArgs {
    /// Maximum number of clipping planes.
    #[arg(long)]
    pub max_planes: Option<usize>,

    /// Maximum number of clipping boxes.
    #[arg(long)]
    pub max_boxes: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(max) = args.max_planes {
            self.clipping.max_planes = max;
        }
        if let Some(max) = args.max_boxes {
            self.clipping.max_boxes = max;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            max_boxes: Some(4),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.clipping.max_boxes, 4);
        assert_eq!(config.debug.log_level, "debug");
        assert_eq!(config.clipping.max_planes, 32);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from(["tileclip", "--max-planes", "6", "--config", "/tmp/tc"]);
        assert_eq!(args.max_planes, Some(6));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/tc")));
        assert!(args.max_boxes.is_none());
    }
}
