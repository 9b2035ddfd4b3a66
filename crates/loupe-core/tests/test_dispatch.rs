use serde_json::json;

use loupe_core::dispatch::{dispatch, PanelValue};
use loupe_core::geometry::{Point, Size};
use loupe_core::overlay::Drawable;
use loupe_core::record::{AnalysisRecord, DisplaySide, PhotoKey};
use loupe_core::view::{ViewSlot, ViewState};

mod common;
use common::{half_size_view, loaded_view, record, PHOTO};

fn text(value: &str) -> PanelValue {
    PanelValue::Text(value.to_string())
}

fn perspective_record() -> AnalysisRecord {
    record(
        "find_vanishing_point",
        json!({
            "line_coords": [{"x1": 100, "y1": 100, "x2": 900, "y2": 700}],
            "vanishing_point_coord": {"x": 500, "y": 400}
        }),
    )
}

fn mask_record() -> AnalysisRecord {
    record("foreground_mask", json!([[0, 0], [1, 1]]))
}

// ---------------------------------------------------------------------------
// Text entries
// ---------------------------------------------------------------------------

#[test]
fn test_whitespace_percentage_truncates() {
    let view = ViewState::default();
    let out = dispatch(&[record("whitespace_percentage", json!(42.9))], &view, PHOTO);
    assert_eq!(out.entries.len(), 1);
    assert_eq!(out.entries[0].label, "% whitespace");
    assert_eq!(out.entries[0].value, text("42%"));
}

#[test]
fn test_unknown_name_shows_raw_name_and_result() {
    let view = ViewState::default();
    let records = [AnalysisRecord::new("mystery.analysis", "[1, 2, 3]")];
    let out = dispatch(&records, &view, PHOTO);
    assert_eq!(out.entries[0].label, "mystery.analysis");
    assert_eq!(out.entries[0].value, text("[1, 2, 3]"));
}

#[test]
fn test_known_without_formatter_shows_value() {
    let view = ViewState::default();
    let out = dispatch(&[record("photographer_caption_length", json!(27))], &view, PHOTO);
    assert_eq!(out.entries[0].label, "Length of photographer caption");
    assert_eq!(out.entries[0].value, text("27"));
}

#[test]
fn test_dotted_name_exact_match() {
    let view = ViewState::default();
    let records = [
        record("indoor_analysis.combined_indoor", json!(true)),
        record("indoor_analysis", json!(true)),
    ];
    let out = dispatch(&records, &view, PHOTO);
    assert_eq!(out.entries[0].label, "Indoor photo");
    assert_eq!(out.entries[0].value, text("Yes"));
    assert_eq!(out.entries[1].label, "indoor_analysis");
    assert_eq!(out.entries[1].value, text("true"));
}

#[test]
fn test_vanishing_point_coordinate_entry() {
    let view = ViewState::default();
    let records = [record(
        "find_vanishing_point.vanishing_point_coord",
        json!([[512.6, 300.1]]),
    )];
    let out = dispatch(&records, &view, PHOTO);
    assert_eq!(out.entries[0].label, "Vanishing Point Coordinate");
    assert_eq!(out.entries[0].value, text("(512, 300)"));
}

#[test]
fn test_suppressed_kinds_emit_nothing() {
    let view = ViewState::default();
    let records = [
        record("gradient_analysis", json!([[0.1, 0.2]])),
        record("resnet18_feature_vector", json!([0.3, 0.4])),
    ];
    let out = dispatch(&records, &view, PHOTO);
    assert!(out.entries.is_empty());
    assert!(out.overlay.is_empty());
}

#[test]
fn test_entry_keys_follow_record_positions() {
    let view = ViewState::default();
    let records = [
        record("whitespace_percentage", json!(10)),
        record("gradient_analysis", json!([])),
        record("mean_detail", json!(3.3)),
    ];
    let out = dispatch(&records, &view, PHOTO);
    let keys: Vec<usize> = out.entries.iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![0, 2]);
}

// ---------------------------------------------------------------------------
// Parse failures
// ---------------------------------------------------------------------------

#[test]
fn test_parse_failure_is_isolated_to_one_record() {
    let view = ViewState::default();
    let records = [
        AnalysisRecord::new("whitespace_percentage", "{not json"),
        record("foreground_percentage", json!(12.2)),
        AnalysisRecord::new("mystery", "nope"),
    ];
    let out = dispatch(&records, &view, PHOTO);
    assert_eq!(out.entries.len(), 3);
    assert_eq!(out.entries[0].label, "% whitespace");
    assert_eq!(out.entries[0].value, text("N/A"));
    assert_eq!(out.entries[1].value, text("12%"));
    assert_eq!(out.entries[2].label, "mystery");
    assert_eq!(out.entries[2].value, text("nope"));
}

#[test]
fn test_unknown_kind_with_invalid_json_shows_raw_result() {
    let view = ViewState::default();
    let records = [AnalysisRecord::new("edge_density", "{broken: 1")];
    let out = dispatch(&records, &view, PHOTO);
    assert_eq!(out.entries.len(), 1);
    assert_eq!(out.entries[0].label, "edge_density");
    assert_eq!(out.entries[0].value, text("{broken: 1"));
}

#[test]
fn test_parse_failure_for_overlay_kind_shows_placeholder() {
    let view = half_size_view(ViewSlot::Perspective);
    let records = [AnalysisRecord::new("find_vanishing_point", "")];
    let out = dispatch(&records, &view, PHOTO);
    assert!(out.overlay.is_empty());
    assert_eq!(out.entries[0].label, "Perspective Lines");
    assert_eq!(out.entries[0].value, text("N/A"));
}

// ---------------------------------------------------------------------------
// Overlay selection
// ---------------------------------------------------------------------------

#[test]
fn test_active_slot_renders_only_its_overlay() {
    let view = half_size_view(ViewSlot::Perspective);
    let out = dispatch(&[perspective_record(), mask_record()], &view, PHOTO);
    assert_eq!(
        out.overlay,
        vec![
            Drawable::Line {
                from: Point::new(50.0, 50.0),
                to: Point::new(450.0, 350.0),
            },
            Drawable::Circle {
                center: Point::new(250.0, 200.0),
                radius: 10.0,
            },
        ]
    );
    assert!(out.entries.is_empty(), "overlay kinds emit no text entries");
}

#[test]
fn test_slot_none_renders_no_overlay() {
    let view = half_size_view(ViewSlot::None);
    let out = dispatch(&[perspective_record(), mask_record()], &view, PHOTO);
    assert!(out.overlay.is_empty());
    assert!(out.entries.is_empty());
}

#[test]
fn test_foreground_slot_on_other_side_renders_nothing() {
    let view = loaded_view(
        ViewSlot::Foreground,
        DisplaySide::Front,
        Size::new(500.0, 400.0),
        Size::new(1000.0, 800.0),
    );
    let out = dispatch(&[mask_record(), perspective_record()], &view, PHOTO);
    assert!(out.overlay.is_empty());
}

#[test]
fn test_foreground_slot_on_cleaned_side_renders_mask() {
    let view = half_size_view(ViewSlot::Foreground);
    let out = dispatch(&[mask_record()], &view, PHOTO);
    assert_eq!(out.overlay.len(), 2);
}

#[test]
fn test_overlay_waits_for_image_load() {
    let mut view = ViewState::default();
    view.open_photo(PHOTO, DisplaySide::Cleaned);
    view.select_slot(ViewSlot::Perspective);
    let out = dispatch(&[perspective_record()], &view, PHOTO);
    assert!(out.overlay.is_empty());
}

#[test]
fn test_overlay_rescales_after_resize() {
    let mut view = half_size_view(ViewSlot::Perspective);
    assert!(view.frames.resized(Size::new(1000.0, 800.0)));
    let out = dispatch(&[perspective_record()], &view, PHOTO);
    assert_eq!(
        out.overlay[0],
        Drawable::Line {
            from: Point::new(100.0, 100.0),
            to: Point::new(900.0, 700.0),
        }
    );
}

// ---------------------------------------------------------------------------
// Detection histogram
// ---------------------------------------------------------------------------

#[test]
fn test_detection_empty_boxes_histogram_none() {
    let view = half_size_view(ViewSlot::Detection);
    let out = dispatch(&[record("yolo_model", json!({"boxes": []}))], &view, PHOTO);
    assert!(out.overlay.is_empty());
    assert_eq!(out.entries.len(), 1);
    assert_eq!(out.entries[0].label, "Objects Detected");
    assert_eq!(out.entries[0].value, text("None"));
}

#[test]
fn test_detection_histogram_shown_without_overlay() {
    let view = ViewState::default();
    let value = json!({
        "boxes": [{"x": 1, "y": 1, "width": 2, "height": 2, "label": "person"}],
        "labels": {"person": 3, "bicycle": 1}
    });
    let out = dispatch(&[record("yolo_model", value)], &view, PHOTO);
    assert!(out.overlay.is_empty());
    assert_eq!(
        out.entries[0].value,
        PanelValue::Lines(vec!["bicycle: 1".into(), "person: 3".into()])
    );
}

#[test]
fn test_detection_overlay_and_histogram_together() {
    let view = half_size_view(ViewSlot::Detection);
    let value = json!({
        "boxes": [{"x": 100, "y": 100, "width": 100, "height": 100, "label": "car"}],
        "labels": {"car": 1}
    });
    let out = dispatch(&[record("yolo_model", value)], &view, PHOTO);
    assert_eq!(out.overlay.len(), 2);
    assert_eq!(out.entries[0].value, PanelValue::Lines(vec!["car: 1".into()]));
}

// ---------------------------------------------------------------------------
// Similarity list
// ---------------------------------------------------------------------------

#[test]
fn test_similarity_excludes_self_and_reverses() {
    let view = ViewState::default();
    let value = json!([[5, 10, 0.8], [5, 11, 0.95], [7, 3, 0.5]]);
    let out = dispatch(&[record("resnet18_cosine_similarity", value)], &view, PHOTO);
    assert_eq!(out.entries[0].label, "Similar photos");
    assert_eq!(
        out.entries[0].value,
        PanelValue::Lines(vec!["(7, 3): 50%".into(), "(5, 10): 80%".into()])
    );
}

#[test]
fn test_similarity_single_neighbour() {
    let view = ViewState::default();
    let value = json!([[5, 10, 0.8], [5, 11, 0.95]]);
    let out = dispatch(&[record("resnet18_cosine_similarity", value)], &view, PHOTO);
    assert_eq!(out.entries[0].value, PanelValue::Lines(vec!["(5, 10): 80%".into()]));
}

#[test]
fn test_similarity_skips_malformed_rows() {
    let view = ViewState::default();
    let value = json!([[5, 10, 0.8], [5.0, 12, 0.7], "junk", [7, 3]]);
    let entries = loupe_core::payload::similarity_entries(&value);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].photo, 10);

    let out = dispatch(&[record("resnet18_cosine_similarity", value)], &view, PHOTO);
    assert_eq!(out.entries[0].value, PanelValue::Lines(vec!["(5, 10): 80%".into()]));
}

#[test]
fn test_similarity_only_self_is_none() {
    let view = ViewState::default();
    let value = json!([[5, 11, 1.0]]);
    let out = dispatch(&[record("resnet18_cosine_similarity", value)], &view, PHOTO);
    assert_eq!(out.entries[0].value, text("None"));
}

#[test]
fn test_similarity_other_photo_keeps_all() {
    let view = ViewState::default();
    let value = json!([[5, 10, 0.8], [5, 11, 0.95]]);
    let out = dispatch(
        &[record("resnet18_cosine_similarity", value)],
        &view,
        PhotoKey::new(1, 1),
    );
    assert_eq!(
        out.entries[0].value,
        PanelValue::Lines(vec!["(5, 11): 95%".into(), "(5, 10): 80%".into()])
    );
}
