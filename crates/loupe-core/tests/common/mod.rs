#![allow(dead_code)]

use loupe_core::geometry::{ImageFrame, Size};
use loupe_core::record::{AnalysisRecord, DisplaySide, PhotoKey};
use loupe_core::view::{ViewSlot, ViewState};

pub const PHOTO: PhotoKey = PhotoKey {
    map_square: 5,
    photo: 11,
};

pub fn frame(display_w: f64, display_h: f64, native_w: f64, native_h: f64) -> ImageFrame {
    ImageFrame::new(Size::new(display_w, display_h), Size::new(native_w, native_h))
}

pub fn record(name: &str, result: serde_json::Value) -> AnalysisRecord {
    AnalysisRecord::new(name, result.to_string())
}

/// A view on `PHOTO`, showing `side`, with `slot` selected and the image
/// loaded at `display` over `native`.
pub fn loaded_view(slot: ViewSlot, side: DisplaySide, display: Size, native: Size) -> ViewState {
    let mut view = ViewState::new(DisplaySide::Cleaned);
    view.open_photo(PHOTO, side);
    view.select_slot(slot);
    assert!(view.frames.image_loaded(PHOTO, display, native));
    view
}

/// Perspective view at half size: native 1000x800 shown at 500x400.
pub fn half_size_view(slot: ViewSlot) -> ViewState {
    loaded_view(
        slot,
        DisplaySide::Cleaned,
        Size::new(500.0, 400.0),
        Size::new(1000.0, 800.0),
    )
}
