use std::io::Write;

use loupe_core::record::{DisplaySide, PhotoKey, PhotoRecord};

const PHOTO_JSON: &str = r#"{
    "number": 11,
    "map_square_number": 5,
    "photographer_name": "A. Martin",
    "photographer_number": null,
    "photographer_caption": "",
    "alt": "Street corner",
    "cleaned_src": "5_11_cleaned.jpg",
    "front_src": "5_11_front.jpg",
    "back_src": null,
    "binder_src": "",
    "native_width": 1000,
    "native_height": 800,
    "analyses": [
        {"name": "whitespace_percentage", "result": "42.9"},
        {"name": "yolo_model", "result": "{\"boxes\": []}"}
    ]
}"#;

#[test]
fn test_parse_photo_record() {
    let record = PhotoRecord::from_json_str(PHOTO_JSON).unwrap();
    assert_eq!(record.key(), PhotoKey::new(5, 11));
    assert_eq!(record.analyses.len(), 2);
    assert_eq!(record.analyses[0].name, "whitespace_percentage");
    assert_eq!(record.analyses[0].result, "42.9");
}

#[test]
fn test_available_sides_in_display_order() {
    let record = PhotoRecord::from_json_str(PHOTO_JSON).unwrap();
    assert_eq!(
        record.available_sides(),
        vec![DisplaySide::Cleaned, DisplaySide::Front]
    );
    assert_eq!(record.default_side(), Some(DisplaySide::Cleaned));
}

#[test]
fn test_no_sides() {
    let record = PhotoRecord::from_json_str(r#"{"number": 1, "map_square_number": 2}"#).unwrap();
    assert!(record.available_sides().is_empty());
    assert!(record.default_side().is_none());
    assert!(record.analyses.is_empty());
    assert!(record.native_size().is_none());
}

#[test]
fn test_metadata_placeholders() {
    let record = PhotoRecord::from_json_str(PHOTO_JSON).unwrap();
    let entries = record.metadata_entries();
    assert_eq!(entries[0], ("Map Square", "5".to_string()));
    assert_eq!(entries[1], ("Photo number", "11".to_string()));
    assert_eq!(entries[2], ("Photographer name", "A. Martin".to_string()));
    assert_eq!(entries[3], ("Photographer number", "Unknown".to_string()));
    assert_eq!(entries[4], ("Photographer caption", "None".to_string()));
}

#[test]
fn test_native_size_from_record() {
    let record = PhotoRecord::from_json_str(PHOTO_JSON).unwrap();
    let size = record.native_size().unwrap();
    assert_eq!(size.width, 1000.0);
    assert_eq!(size.height, 800.0);
}

#[test]
fn test_analysis_size_prefers_record() {
    let record = PhotoRecord::from_json_str(PHOTO_JSON).unwrap();
    let decoded = loupe_core::geometry::Size::new(500.0, 400.0);
    let size = record.analysis_size(decoded);
    assert_eq!(size.width, 1000.0);
    assert_eq!(size.height, 800.0);
}

#[test]
fn test_analysis_size_falls_back_to_decoded() {
    let decoded = loupe_core::geometry::Size::new(500.0, 400.0);

    let record = PhotoRecord::from_json_str(r#"{"number": 1, "map_square_number": 2}"#).unwrap();
    assert_eq!(record.analysis_size(decoded), decoded);

    let zero = PhotoRecord::from_json_str(
        r#"{"number": 1, "map_square_number": 2, "native_width": 0, "native_height": 800}"#,
    )
    .unwrap();
    assert_eq!(zero.analysis_size(decoded), decoded);
}

#[test]
fn test_source_path_resolves_against_base_dir() {
    let record = PhotoRecord::from_json_str(PHOTO_JSON).unwrap();
    let path = record
        .source_path(DisplaySide::Front, std::path::Path::new("/data/photos"))
        .unwrap();
    assert_eq!(path, std::path::PathBuf::from("/data/photos/5_11_front.jpg"));
    assert!(record
        .source_path(DisplaySide::Binder, std::path::Path::new("/data"))
        .is_none());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(PHOTO_JSON.as_bytes()).expect("write record");
    file.flush().expect("flush");

    let record = PhotoRecord::load(file.path()).unwrap();
    assert_eq!(record.number, 11);
}

#[test]
fn test_load_invalid_json_errors() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"{ not json").expect("write record");
    file.flush().expect("flush");

    let err = PhotoRecord::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON"), "got: {err}");
}

#[test]
fn test_side_labels() {
    assert_eq!(DisplaySide::Cleaned.side_label(), "Cleaned Side");
    assert_eq!(DisplaySide::Binder.to_string(), "Binder");
}
