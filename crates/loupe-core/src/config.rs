use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::DisplaySide;
use crate::view::ViewSlot;

/// Viewer configuration, usually loaded from TOML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Side the analyses were computed against; overlays show only there.
    #[serde(default)]
    pub overlay_side: DisplaySide,
    /// View selected when a photo is opened.
    #[serde(default)]
    pub default_view: ViewSlot,
    #[serde(default)]
    pub style: OverlayStyle,
}

impl OverlayConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Colors and strokes used when drawing overlays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub line_color: [u8; 3],
    pub marker_color: [u8; 3],
    pub mask_color: [u8; 3],
    /// Fill opacity of mask blocks in [0.0, 1.0].
    pub mask_opacity: f32,
    pub box_color: [u8; 3],
    pub label_color: [u8; 3],
    pub stroke_width: f32,
    pub label_size: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_color: [255, 0, 0],
            marker_color: [255, 255, 0],
            mask_color: [0, 120, 255],
            mask_opacity: 0.4,
            box_color: [0, 255, 0],
            label_color: [255, 255, 255],
            stroke_width: 2.0,
            label_size: 12.0,
        }
    }
}
