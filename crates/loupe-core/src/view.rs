use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::ImageFrame;
use crate::record::{DisplaySide, PhotoKey};
use crate::resize::FrameTracker;

/// The single overlay kind currently shown. `None` shows no overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSlot {
    #[default]
    None,
    Perspective,
    Foreground,
    Detection,
}

impl ViewSlot {
    pub const ALL: &[Self] = &[
        Self::None,
        Self::Perspective,
        Self::Foreground,
        Self::Detection,
    ];

    pub fn index(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Perspective => 1,
            Self::Foreground => 2,
            Self::Detection => 3,
        }
    }

    /// Unknown indices select nothing.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Perspective,
            2 => Self::Foreground,
            3 => Self::Detection,
            _ => Self::None,
        }
    }

    /// Status line under the view selector.
    pub fn status_text(self) -> &'static str {
        match self {
            Self::None => "Nothing selected",
            Self::Perspective => "Perspective selected",
            Self::Foreground => "Foreground selected",
            Self::Detection => "Detection selected",
        }
    }
}

impl fmt::Display for ViewSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Select..."),
            Self::Perspective => write!(f, "Perspective Lines"),
            Self::Foreground => write!(f, "Foreground Mask"),
            Self::Detection => write!(f, "Object Detection"),
        }
    }
}

/// Per-view mutable state owned by the host and passed into dispatch.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub active_slot: ViewSlot,
    pub display_side: DisplaySide,
    /// The side the analyses were computed against.
    pub overlay_side: DisplaySide,
    pub frames: FrameTracker,
}

impl ViewState {
    pub fn new(overlay_side: DisplaySide) -> Self {
        Self {
            overlay_side,
            ..Default::default()
        }
    }

    /// Switch to a new photo: invalidates the frame and shows `side`.
    pub fn open_photo(&mut self, photo: PhotoKey, side: DisplaySide) {
        self.frames.reset(photo);
        self.display_side = side;
    }

    pub fn select_slot(&mut self, slot: ViewSlot) {
        self.active_slot = slot;
    }

    /// Showing another side swaps the image, so the old frame is dropped
    /// until the new image reports its load.
    pub fn select_side(&mut self, side: DisplaySide) {
        if side != self.display_side {
            self.frames.invalidate();
        }
        self.display_side = side;
    }

    pub fn overlays_visible(&self) -> bool {
        self.display_side == self.overlay_side
    }

    /// True when an overlay declaring `slot` should be drawn right now.
    pub fn shows_slot(&self, slot: ViewSlot) -> bool {
        slot != ViewSlot::None && slot == self.active_slot && self.overlays_visible()
    }

    pub fn frame(&self) -> Option<ImageFrame> {
        self.frames.frame()
    }
}
