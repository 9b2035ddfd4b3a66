use std::path::PathBuf;

use loupe_core::config::OverlayConfig;
use loupe_core::record::{DisplaySide, PhotoKey, PhotoRecord};

/// Results sent from loader threads back to the UI thread.
pub enum LoadResult {
    RecordLoaded {
        path: PathBuf,
        record: Box<PhotoRecord>,
    },
    /// A decoded side image. `photo` and `side` identify the request so
    /// that late arrivals for a previous photo can be dropped.
    ImageLoaded {
        photo: PhotoKey,
        side: DisplaySide,
        image: egui::ColorImage,
    },
    ConfigImported {
        path: PathBuf,
        config: OverlayConfig,
    },
    Error {
        message: String,
    },
}
