//! Typed payloads for the structured analysis kinds.
//!
//! Each payload is built from an already-parsed `serde_json::Value`.
//! Missing or mis-shaped sub-fields fall back to empty defaults, and a
//! malformed element inside a list is skipped rather than discarding the
//! whole list.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::geometry::Point;

/// A perspective line in native coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "LineRepr")]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LineRepr {
    Object {
        #[serde(alias = "1_x")]
        x1: f64,
        #[serde(alias = "1_y")]
        y1: f64,
        #[serde(alias = "2_x")]
        x2: f64,
        #[serde(alias = "2_y")]
        y2: f64,
    },
    Flat([f64; 4]),
    Endpoints([[f64; 2]; 2]),
}

impl From<LineRepr> for LineSegment {
    fn from(repr: LineRepr) -> Self {
        match repr {
            LineRepr::Object { x1, y1, x2, y2 } => Self::new(x1, y1, x2, y2),
            LineRepr::Flat([x1, y1, x2, y2]) => Self::new(x1, y1, x2, y2),
            LineRepr::Endpoints([[x1, y1], [x2, y2]]) => Self::new(x1, y1, x2, y2),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<PointRepr> for Point {
    fn from(repr: PointRepr) -> Self {
        match repr {
            PointRepr::Object { x, y } => Point::new(x, y),
            PointRepr::Pair([x, y]) => Point::new(x, y),
        }
    }
}

/// One 20x20 native-pixel foreground block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CellRepr")]
pub struct MaskCell {
    pub row: u32,
    pub col: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Object { row: u32, col: u32 },
    Pair([u32; 2]),
}

impl From<CellRepr> for MaskCell {
    fn from(repr: CellRepr) -> Self {
        match repr {
            CellRepr::Object { row, col } => Self { row, col },
            CellRepr::Pair([row, col]) => Self { row, col },
        }
    }
}

/// An object-detection box in native coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionBox {
    pub x: f64,
    pub y: f64,
    #[serde(alias = "w")]
    pub width: f64,
    #[serde(alias = "h")]
    pub height: f64,
    #[serde(default)]
    pub label: String,
}

/// Perspective lines plus an optional vanishing point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerspectivePayload {
    pub lines: Vec<LineSegment>,
    pub vanishing_point: Option<Point>,
}

impl PerspectivePayload {
    pub fn from_value(value: &Value) -> Self {
        let lines = lenient_list(value.get("line_coords"), "line_coords");
        let vanishing_point = value
            .get("vanishing_point_coord")
            .filter(|v| !v.is_null())
            .and_then(|v| serde_json::from_value::<PointRepr>(v.clone()).ok())
            .map(Point::from);
        Self {
            lines,
            vanishing_point,
        }
    }
}

/// Foreground blocks of a mask.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaskPayload {
    pub cells: Vec<MaskCell>,
}

impl MaskPayload {
    /// Accepts a bare array of cells or an object with a `mask` array.
    pub fn from_value(value: &Value) -> Self {
        let cells = match value {
            Value::Array(_) => lenient_list(Some(value), "mask"),
            Value::Object(_) => lenient_list(value.get("mask"), "mask"),
            _ => Vec::new(),
        };
        Self { cells }
    }
}

/// Detection boxes plus the per-label count histogram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionPayload {
    pub boxes: Vec<DetectionBox>,
    /// Sorted by label.
    pub labels: BTreeMap<String, u64>,
}

impl DetectionPayload {
    /// Without a `labels` map the histogram is counted from the boxes.
    pub fn from_value(value: &Value) -> Self {
        let boxes: Vec<DetectionBox> = lenient_list(value.get("boxes"), "boxes");
        let labels = match value.get("labels").and_then(Value::as_object) {
            Some(map) => map
                .iter()
                .filter_map(|(label, count)| Some((label.clone(), count_of(count)?)))
                .collect(),
            None => {
                let mut counts = BTreeMap::new();
                for b in boxes.iter().filter(|b| !b.label.is_empty()) {
                    *counts.entry(b.label.clone()).or_insert(0) += 1;
                }
                counts
            }
        };
        Self { boxes, labels }
    }
}

/// One ranked neighbour in a similarity list, given as `[map_square, photo, score]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, i64, f64)")]
pub struct SimilarityEntry {
    pub map_square: i64,
    pub photo: i64,
    pub score: f64,
}

impl From<(i64, i64, f64)> for SimilarityEntry {
    fn from((map_square, photo, score): (i64, i64, f64)) -> Self {
        Self {
            map_square,
            photo,
            score,
        }
    }
}

/// Parse `[[map_square, photo, score], ...]`.
pub fn similarity_entries(value: &Value) -> Vec<SimilarityEntry> {
    lenient_list(Some(value), "similarity")
}

fn count_of(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
}

fn lenient_list<T: DeserializeOwned>(value: Option<&Value>, field: &str) -> Vec<T> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let parsed: Vec<T> = items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();
    if parsed.len() != items.len() {
        warn!(
            field,
            skipped = items.len() - parsed.len(),
            "Skipped malformed payload elements"
        );
    }
    parsed
}
