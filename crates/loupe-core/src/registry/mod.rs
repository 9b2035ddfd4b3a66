//! Static registries mapping analysis kinds to their presentation.
//!
//! There are two independent tables. The text table gives a display name
//! and optional formatter; the overlay table gives a renderer and the view
//! slot that activates it. A kind may appear in either, both, or neither.

mod kind;

pub use kind::AnalysisKind;

use crate::format::Formatter;
use crate::overlay::OverlayRenderer;
use crate::view::ViewSlot;

/// Text panel presentation of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextEntry {
    pub display_name: &'static str,
    pub formatter: Option<Formatter>,
}

/// Overlay presentation of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayEntry {
    pub display_name: &'static str,
    pub renderer: OverlayRenderer,
    pub view_slot: ViewSlot,
}

/// How the dispatch loop treats a kind outside of the generic tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Generic text entry (or raw fallback).
    Text,
    /// Overlay only; never a generic text entry.
    Overlay,
    /// Overlay plus the "Objects Detected" histogram entry.
    OverlayWithHistogram,
    /// Ranked similarity list.
    SimilarityList,
    /// Not shown anywhere.
    Suppressed,
}

pub fn text_entry(kind: AnalysisKind) -> Option<TextEntry> {
    use AnalysisKind::*;
    let (display_name, formatter) = match kind {
        WhitespacePercentage => ("% whitespace", Some(Formatter::Percentage)),
        PhotographerCaptionLength => ("Length of photographer caption", None),
        ForegroundPercentage => ("% foreground", Some(Formatter::Percentage)),
        VanishingPoint => ("Perspective Lines", None),
        VanishingPointCoordinate => ("Vanishing Point Coordinate", Some(Formatter::Coordinate)),
        CombinedIndoor => ("Indoor photo", Some(Formatter::YesNo)),
        CourtyardFrame => ("Courtyard framing", Some(Formatter::YesNo)),
        MeanDetail => ("Mean detail", Some(Formatter::Integer)),
        LocalVariance => ("Local variance", Some(Formatter::Integer)),
        ForegroundMask | ObjectDetection | Similarity | GradientAnalysis | FeatureVector => {
            return None
        }
    };
    Some(TextEntry {
        display_name,
        formatter,
    })
}

pub fn overlay_entry(kind: AnalysisKind) -> Option<OverlayEntry> {
    let (display_name, renderer, view_slot) = match kind {
        AnalysisKind::VanishingPoint => (
            "Perspective Lines",
            OverlayRenderer::Perspective,
            ViewSlot::Perspective,
        ),
        AnalysisKind::ForegroundMask => (
            "Foreground Mask",
            OverlayRenderer::ForegroundMask,
            ViewSlot::Foreground,
        ),
        AnalysisKind::ObjectDetection => (
            "Object Detection",
            OverlayRenderer::Detection,
            ViewSlot::Detection,
        ),
        _ => return None,
    };
    Some(OverlayEntry {
        display_name,
        renderer,
        view_slot,
    })
}

pub fn presentation(kind: AnalysisKind) -> Presentation {
    match kind {
        AnalysisKind::ObjectDetection => Presentation::OverlayWithHistogram,
        AnalysisKind::Similarity => Presentation::SimilarityList,
        AnalysisKind::GradientAnalysis | AnalysisKind::FeatureVector => Presentation::Suppressed,
        other if overlay_entry(other).is_some() => Presentation::Overlay,
        _ => Presentation::Text,
    }
}

pub fn resolve_text(name: &str) -> Option<TextEntry> {
    AnalysisKind::from_name(name).and_then(text_entry)
}

pub fn resolve_overlay(name: &str) -> Option<OverlayEntry> {
    AnalysisKind::from_name(name).and_then(overlay_entry)
}

/// The overlay entry that declares `slot`, if any.
pub fn overlay_for_slot(slot: ViewSlot) -> Option<(AnalysisKind, OverlayEntry)> {
    AnalysisKind::ALL
        .iter()
        .copied()
        .filter_map(|kind| overlay_entry(kind).map(|entry| (kind, entry)))
        .find(|(_, entry)| entry.view_slot == slot)
}

/// Label used for a record in the panel: the registered name, else the raw name.
pub fn panel_label(name: &str) -> String {
    let kind = AnalysisKind::from_name(name);
    kind.and_then(text_entry)
        .map(|e| e.display_name)
        .or_else(|| kind.and_then(overlay_entry).map(|e| e.display_name))
        .map(str::to_string)
        .unwrap_or_else(|| name.to_string())
}
