//! Turns a photo's analysis records into overlay drawables and panel entries.

use serde_json::Value;
use tracing::{debug, warn};

use crate::consts::{
    EMPTY_LIST_PLACEHOLDER, OBJECTS_DETECTED_LABEL, PARSE_FAILURE_PLACEHOLDER,
    SIMILAR_PHOTOS_LABEL,
};
use crate::format::{format_score, value_text};
use crate::overlay::{Drawable, OverlayPayload};
use crate::payload::{similarity_entries, DetectionPayload};
use crate::record::{AnalysisRecord, PhotoKey};
use crate::registry::{self, AnalysisKind, OverlayEntry, Presentation};
use crate::view::ViewState;

/// Value shown for one panel entry.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelValue {
    Text(String),
    Lines(Vec<String>),
}

impl PanelValue {
    /// The value as display lines.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => vec![text.as_str()],
            Self::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

/// One entry of the info panel. `key` is the index of the source record.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelEntry {
    pub key: usize,
    pub label: String,
    pub value: PanelValue,
}

impl PanelEntry {
    fn text(key: usize, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            value: PanelValue::Text(value.into()),
        }
    }
}

/// Everything one dispatch pass produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rendered {
    pub overlay: Vec<Drawable>,
    pub entries: Vec<PanelEntry>,
}

/// Render every record of `photo` against the current view.
///
/// Records are handled independently: a record whose result fails to
/// parse gets a placeholder entry and the rest still render.
pub fn dispatch(records: &[AnalysisRecord], view: &ViewState, photo: PhotoKey) -> Rendered {
    let mut rendered = Rendered::default();
    for (key, record) in records.iter().enumerate() {
        dispatch_record(key, record, view, photo, &mut rendered);
    }
    rendered
}

fn dispatch_record(
    key: usize,
    record: &AnalysisRecord,
    view: &ViewState,
    photo: PhotoKey,
    out: &mut Rendered,
) {
    let Some(kind) = AnalysisKind::from_name(&record.name) else {
        debug!(name = %record.name, "Unknown analysis, showing raw value");
        out.entries
            .push(PanelEntry::text(key, &record.name, &record.result));
        return;
    };

    let value: Value = match serde_json::from_str(&record.result) {
        Ok(value) => value,
        Err(err) => {
            warn!(name = %record.name, error = %err, "Analysis result is not valid JSON");
            out.entries.push(PanelEntry::text(
                key,
                placeholder_label(kind),
                PARSE_FAILURE_PLACEHOLDER,
            ));
            return;
        }
    };

    match registry::presentation(kind) {
        Presentation::Overlay => render_overlay(kind, &value, view, out),
        Presentation::OverlayWithHistogram => {
            render_overlay(kind, &value, view, out);
            let payload = DetectionPayload::from_value(&value);
            out.entries.push(PanelEntry {
                key,
                label: OBJECTS_DETECTED_LABEL.to_string(),
                value: label_histogram(&payload),
            });
        }
        Presentation::SimilarityList => out.entries.push(PanelEntry {
            key,
            label: SIMILAR_PHOTOS_LABEL.to_string(),
            value: similarity_list(&value, photo),
        }),
        Presentation::Suppressed => debug!(name = %record.name, "Analysis suppressed"),
        Presentation::Text => {
            let (label, text) = match registry::text_entry(kind) {
                Some(entry) => (
                    entry.display_name.to_string(),
                    entry
                        .formatter
                        .map(|f| f.apply(&value))
                        .unwrap_or_else(|| value_text(&value)),
                ),
                None => (record.name.clone(), value_text(&value)),
            };
            out.entries.push(PanelEntry::text(key, label, text));
        }
    }
}

fn render_overlay(kind: AnalysisKind, value: &Value, view: &ViewState, out: &mut Rendered) {
    let Some(OverlayEntry {
        renderer,
        view_slot,
        ..
    }) = registry::overlay_entry(kind)
    else {
        return;
    };
    if !view.shows_slot(view_slot) {
        return;
    }
    let Some(frame) = view.frame() else {
        debug!(%kind, "Overlay selected but image frame not loaded yet");
        return;
    };

    let payload: OverlayPayload = renderer.parse(value);
    let drawables = payload.render(&frame);
    debug!(%kind, count = drawables.len(), "Overlay rendered");
    out.overlay.extend(drawables);
}

fn placeholder_label(kind: AnalysisKind) -> String {
    match registry::presentation(kind) {
        Presentation::OverlayWithHistogram => OBJECTS_DETECTED_LABEL.to_string(),
        Presentation::SimilarityList => SIMILAR_PHOTOS_LABEL.to_string(),
        _ => registry::panel_label(kind.name()),
    }
}

/// `label: count` lines in label order, or `None` when nothing was detected.
pub fn label_histogram(payload: &DetectionPayload) -> PanelValue {
    if payload.labels.is_empty() {
        return PanelValue::Text(EMPTY_LIST_PLACEHOLDER.to_string());
    }
    PanelValue::Lines(
        payload
            .labels
            .iter()
            .map(|(label, count)| format!("{label}: {count}"))
            .collect(),
    )
}

/// Neighbours in reverse input order, skipping `photo` itself.
pub fn similarity_list(value: &Value, photo: PhotoKey) -> PanelValue {
    let lines: Vec<String> = similarity_entries(value)
        .into_iter()
        .rev()
        .filter(|e| PhotoKey::new(e.map_square, e.photo) != photo)
        .map(|e| format!("({}, {}): {}", e.map_square, e.photo, format_score(e.score)))
        .collect();
    if lines.is_empty() {
        PanelValue::Text(EMPTY_LIST_PLACEHOLDER.to_string())
    } else {
        PanelValue::Lines(lines)
    }
}
