use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use loupe_core::config::OverlayConfig;
use loupe_core::geometry::Size;
use loupe_core::view::ViewSlot;
use rayon::prelude::*;
use tracing::warn;

use super::overlay::{render_overlay, resolve_native_size, ViewArg};

#[derive(Args)]
pub struct BatchArgs {
    /// Directory of photo record JSON files
    pub dir: PathBuf,

    /// Overlay to draw (defaults to the config's default view)
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Rendered image width; height follows the native aspect ratio
    #[arg(long, default_value = "800")]
    pub width: f64,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for the SVG files
    #[arg(short, long, default_value = "overlays")]
    pub output: PathBuf,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let slot = args.view.map(ViewSlot::from).unwrap_or(config.default_view);
    let records = list_records(&args.dir)?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    println!(
        "Rendering {} overlays for {} photo records...",
        slot,
        records.len()
    );

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Rendering [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let failures: Vec<(PathBuf, anyhow::Error)> = records
        .par_iter()
        .filter_map(|path| {
            let result = render_one(path, &config, slot, args.width, &args.output);
            pb.inc(1);
            result.err().map(|err| (path.clone(), err))
        })
        .collect();
    pb.finish();

    for (path, err) in &failures {
        warn!(path = %path.display(), error = %err, "Photo record skipped");
        eprintln!("  {}: {:#}", path.display(), err);
    }
    println!(
        "Rendered {} of {} overlays to {}",
        records.len() - failures.len(),
        records.len(),
        args.output.display()
    );

    Ok(())
}

/// Every `*.json` file directly inside `dir`, sorted by path.
fn list_records(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;
    let mut records = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            records.push(path);
        }
    }
    records.sort();
    Ok(records)
}

fn render_one(
    path: &Path,
    config: &OverlayConfig,
    slot: ViewSlot,
    width: f64,
    out_dir: &Path,
) -> Result<()> {
    let record = super::load_record(path)?;
    // Overlays only apply to the side the analyses were run on.
    let side = config.overlay_side;
    let native = resolve_native_size(&record, side, super::base_dir(path), None)?;
    let display = Size::new(width, width * native.height / native.width).validated()?;

    let overlay = render_overlay(&record, config, slot, side, display, native);
    let key = record.key();
    let output = out_dir.join(format!("{}_{}.svg", key.map_square, key.photo));
    std::fs::write(&output, &overlay.svg)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
