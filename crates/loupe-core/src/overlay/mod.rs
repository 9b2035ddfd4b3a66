pub mod detection;
pub mod mask;
pub mod perspective;
pub mod svg;

use serde_json::Value;

use crate::geometry::{ImageFrame, Point, Rect};
use crate::payload::{DetectionPayload, MaskPayload, PerspectivePayload};

pub use svg::to_svg;

/// A primitive positioned in display coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Line { from: Point, to: Point },
    Circle { center: Point, radius: f64 },
    /// Unfilled rectangle outline.
    Rect(Rect),
    /// Filled foreground mask block.
    Square(Rect),
    /// Rectangle grouped with a text label anchored at `anchor`.
    LabeledRect {
        rect: Rect,
        label: String,
        anchor: Point,
    },
}

/// Which renderer draws an overlay kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayRenderer {
    Perspective,
    ForegroundMask,
    Detection,
}

/// A payload parsed for one of the overlay renderers.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayPayload {
    Perspective(PerspectivePayload),
    ForegroundMask(MaskPayload),
    Detection(DetectionPayload),
}

impl OverlayRenderer {
    pub fn parse(self, value: &Value) -> OverlayPayload {
        match self {
            Self::Perspective => OverlayPayload::Perspective(PerspectivePayload::from_value(value)),
            Self::ForegroundMask => OverlayPayload::ForegroundMask(MaskPayload::from_value(value)),
            Self::Detection => OverlayPayload::Detection(DetectionPayload::from_value(value)),
        }
    }
}

impl OverlayPayload {
    /// Render into display coordinates. Empty when the frame is not drawable.
    pub fn render(&self, frame: &ImageFrame) -> Vec<Drawable> {
        match self {
            Self::Perspective(p) => perspective::render(p, frame),
            Self::ForegroundMask(m) => mask::render(m, frame),
            Self::Detection(d) => detection::render(d, frame),
        }
    }
}
