/// Side length (native pixels) of one foreground mask block.
pub const MASK_CELL_SIZE: f64 = 20.0;

/// Radius of the vanishing point marker, in display units. Not scaled with the frame.
pub const VANISHING_POINT_RADIUS: f64 = 10.0;

/// Upward offset (display units) of a detection label from the top edge of its box.
pub const DETECTION_LABEL_OFFSET: f64 = 5.0;

/// Text shown when a record's result could not be parsed.
pub const PARSE_FAILURE_PLACEHOLDER: &str = "N/A";

/// Text shown for an empty histogram or list.
pub const EMPTY_LIST_PLACEHOLDER: &str = "None";

/// Text shown for missing photographer metadata.
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

/// Sentinel produced when integer coercion fails.
pub const NOT_A_NUMBER: &str = "NaN";

/// Panel label of the detection label histogram.
pub const OBJECTS_DETECTED_LABEL: &str = "Objects Detected";

/// Panel label of the ranked similarity list.
pub const SIMILAR_PHOTOS_LABEL: &str = "Similar photos";
