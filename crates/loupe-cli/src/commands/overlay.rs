use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use loupe_core::config::OverlayConfig;
use loupe_core::dispatch::dispatch;
use loupe_core::geometry::Size;
use loupe_core::overlay::to_svg;
use loupe_core::record::{image_native_size, DisplaySide, PhotoRecord};
use loupe_core::view::{ViewSlot, ViewState};
use tracing::info;

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewArg {
    None,
    Perspective,
    Foreground,
    Detection,
}

impl From<ViewArg> for ViewSlot {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::None => ViewSlot::None,
            ViewArg::Perspective => ViewSlot::Perspective,
            ViewArg::Foreground => ViewSlot::Foreground,
            ViewArg::Detection => ViewSlot::Detection,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SideArg {
    Cleaned,
    Front,
    Back,
    Binder,
}

impl From<SideArg> for DisplaySide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Cleaned => DisplaySide::Cleaned,
            SideArg::Front => DisplaySide::Front,
            SideArg::Back => DisplaySide::Back,
            SideArg::Binder => DisplaySide::Binder,
        }
    }
}

#[derive(Args)]
pub struct OverlayArgs {
    /// Photo record JSON file
    pub file: PathBuf,

    /// Overlay to draw (defaults to the config's default view)
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Side being shown (defaults to the config's overlay side)
    #[arg(long, value_enum)]
    pub side: Option<SideArg>,

    /// Rendered image size as WxH (defaults to the native size)
    #[arg(long, value_parser = parse_size)]
    pub display: Option<Size>,

    /// Intrinsic image size as WxH
    #[arg(long, value_parser = parse_size)]
    pub native: Option<Size>,

    /// Image file to read the intrinsic size from
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output SVG path
    #[arg(short, long, default_value = "overlay.svg")]
    pub output: PathBuf,
}

pub fn run(args: &OverlayArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let record = super::load_record(&args.file)?;
    let base_dir = super::base_dir(&args.file);

    let side = args.side.map(DisplaySide::from).unwrap_or(config.overlay_side);
    let slot = args.view.map(ViewSlot::from).unwrap_or(config.default_view);

    let native = match args.native {
        Some(size) => size,
        None => resolve_native_size(&record, side, base_dir, args.image.as_deref())?,
    };
    let display = args.display.unwrap_or(native);

    let overlay = render_overlay(&record, &config, slot, side, display, native);
    std::fs::write(&args.output, &overlay.svg)
        .with_context(|| format!("Failed to write overlay to {}", args.output.display()))?;

    println!(
        "{} ({} shapes on {} side, {}x{}) saved to {}",
        slot,
        overlay.shapes,
        side,
        display.width,
        display.height,
        args.output.display()
    );
    Ok(())
}

/// An overlay serialized to SVG.
pub struct RenderedOverlay {
    pub svg: String,
    pub shapes: usize,
}

/// Render `record` as if its `side` image had just loaded at `display`.
pub fn render_overlay(
    record: &PhotoRecord,
    config: &OverlayConfig,
    slot: ViewSlot,
    side: DisplaySide,
    display: Size,
    native: Size,
) -> RenderedOverlay {
    let photo = record.key();
    let mut view = ViewState::new(config.overlay_side);
    view.open_photo(photo, side);
    view.select_slot(slot);
    view.frames.image_loaded(photo, display, native);

    let rendered = dispatch(&record.analyses, &view, photo);
    info!(%photo, %slot, shapes = rendered.overlay.len(), "Overlay rendered");

    RenderedOverlay {
        svg: to_svg(&rendered.overlay, display.width, display.height, &config.style),
        shapes: rendered.overlay.len(),
    }
}

/// Native size from the record, else from the header of the side's image.
pub fn resolve_native_size(
    record: &PhotoRecord,
    side: DisplaySide,
    base_dir: &Path,
    image: Option<&Path>,
) -> Result<Size> {
    if let Some(size) = record.native_size() {
        return Ok(size.validated()?);
    }
    let path = match image {
        Some(path) => path.to_path_buf(),
        None => record.source_path(side, base_dir).with_context(|| {
            format!("Photo {} has no {side} image; pass --native or --image", record.key())
        })?,
    };
    image_native_size(&path)
        .with_context(|| format!("Failed to read image size from {}", path.display()))
}

/// Parse `WxH`, e.g. `1000x800`.
fn parse_size(text: &str) -> std::result::Result<Size, String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{text}'"))?;
    let width: f64 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let height: f64 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    Size::new(width, height).validated().map_err(|e| e.to_string())
}
