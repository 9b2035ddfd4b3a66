use loupe_core::format::Formatter;
use loupe_core::overlay::OverlayRenderer;
use loupe_core::registry::{
    overlay_for_slot, presentation, resolve_overlay, resolve_text, AnalysisKind, Presentation,
};
use loupe_core::view::ViewSlot;

#[test]
fn test_every_kind_roundtrips_through_its_name() {
    for &kind in AnalysisKind::ALL {
        assert_eq!(AnalysisKind::from_name(kind.name()), Some(kind));
    }
}

#[test]
fn test_names_are_unique() {
    let mut names: Vec<&str> = AnalysisKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), AnalysisKind::ALL.len());
}

#[test]
fn test_unknown_and_partial_names() {
    assert!(AnalysisKind::from_name("indoor_analysis").is_none());
    assert!(AnalysisKind::from_name("Whitespace_Percentage").is_none());
    assert!(resolve_text("nothing").is_none());
    assert!(resolve_overlay("nothing").is_none());
}

#[test]
fn test_text_entries() {
    let entry = resolve_text("whitespace_percentage").unwrap();
    assert_eq!(entry.display_name, "% whitespace");
    assert_eq!(entry.formatter, Some(Formatter::Percentage));

    let entry = resolve_text("photographer_caption_length").unwrap();
    assert_eq!(entry.formatter, None);
}

#[test]
fn test_overlay_entries() {
    let entry = resolve_overlay("find_vanishing_point").unwrap();
    assert_eq!(entry.renderer, OverlayRenderer::Perspective);
    assert_eq!(entry.view_slot, ViewSlot::Perspective);

    let entry = resolve_overlay("foreground_mask").unwrap();
    assert_eq!(entry.view_slot, ViewSlot::Foreground);

    let entry = resolve_overlay("yolo_model").unwrap();
    assert_eq!(entry.renderer, OverlayRenderer::Detection);
    assert_eq!(entry.view_slot, ViewSlot::Detection);
}

#[test]
fn test_each_slot_has_exactly_one_overlay() {
    for &slot in ViewSlot::ALL.iter().filter(|s| **s != ViewSlot::None) {
        let owners = AnalysisKind::ALL
            .iter()
            .filter_map(|&k| loupe_core::registry::overlay_entry(k))
            .filter(|e| e.view_slot == slot)
            .count();
        assert_eq!(owners, 1, "slot {slot:?}");
        assert!(overlay_for_slot(slot).is_some());
    }
    assert!(overlay_for_slot(ViewSlot::None).is_none());
}

#[test]
fn test_presentation() {
    assert_eq!(presentation(AnalysisKind::VanishingPoint), Presentation::Overlay);
    assert_eq!(
        presentation(AnalysisKind::ObjectDetection),
        Presentation::OverlayWithHistogram
    );
    assert_eq!(presentation(AnalysisKind::Similarity), Presentation::SimilarityList);
    assert_eq!(presentation(AnalysisKind::GradientAnalysis), Presentation::Suppressed);
    assert_eq!(presentation(AnalysisKind::MeanDetail), Presentation::Text);
}

#[test]
fn test_view_slot_indices_and_labels() {
    for &slot in ViewSlot::ALL {
        assert_eq!(ViewSlot::from_index(slot.index()), slot);
    }
    assert_eq!(ViewSlot::from_index(9), ViewSlot::None);
    assert_eq!(ViewSlot::None.to_string(), "Select...");
    assert_eq!(ViewSlot::Foreground.status_text(), "Foreground selected");
}
