pub mod batch;
pub mod config;
pub mod info;
pub mod overlay;

use std::path::Path;

use anyhow::{Context, Result};
use loupe_core::config::OverlayConfig;
use loupe_core::record::PhotoRecord;

/// Load the viewer config from `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<OverlayConfig> {
    match path {
        Some(path) => OverlayConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display())),
        None => Ok(OverlayConfig::default()),
    }
}

pub fn load_record(path: &Path) -> Result<PhotoRecord> {
    PhotoRecord::load(path)
        .with_context(|| format!("Failed to read photo record {}", path.display()))
}

/// Directory that image sources in a record file are relative to.
pub fn base_dir(record_path: &Path) -> &Path {
    record_path.parent().unwrap_or_else(|| Path::new("."))
}
