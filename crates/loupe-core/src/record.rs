use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{EMPTY_LIST_PLACEHOLDER, UNKNOWN_PLACEHOLDER};
use crate::error::Result;
use crate::geometry::Size;

/// One pre-computed analysis attached to a photo.
///
/// `result` is kept as the serialized string it arrived as; it is parsed
/// per record at dispatch time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub name: String,
    pub result: String,
}

impl AnalysisRecord {
    pub fn new(name: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result: result.into(),
        }
    }
}

/// Identifies a photo by map square and photo number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoKey {
    pub map_square: i64,
    pub photo: i64,
}

impl PhotoKey {
    pub fn new(map_square: i64, photo: i64) -> Self {
        Self { map_square, photo }
    }
}

impl fmt::Display for PhotoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.map_square, self.photo)
    }
}

/// Physical face or version of a photographed item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySide {
    #[default]
    Cleaned,
    Front,
    Back,
    Binder,
}

impl DisplaySide {
    pub const ALL: &[Self] = &[Self::Cleaned, Self::Front, Self::Back, Self::Binder];

    /// Button caption, e.g. "Front Side".
    pub fn side_label(&self) -> String {
        format!("{self} Side")
    }
}

impl fmt::Display for DisplaySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleaned => write!(f, "Cleaned"),
            Self::Front => write!(f, "Front"),
            Self::Back => write!(f, "Back"),
            Self::Binder => write!(f, "Binder"),
        }
    }
}

/// Photo metadata as served by the photo endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub number: i64,
    pub map_square_number: i64,
    #[serde(default)]
    pub photographer_name: Option<String>,
    #[serde(default)]
    pub photographer_number: Option<i64>,
    #[serde(default)]
    pub photographer_caption: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub cleaned_src: Option<String>,
    #[serde(default)]
    pub front_src: Option<String>,
    #[serde(default)]
    pub back_src: Option<String>,
    #[serde(default)]
    pub binder_src: Option<String>,
    /// Intrinsic pixel size of the analyzed image, when the record carries it.
    #[serde(default)]
    pub native_width: Option<f64>,
    #[serde(default)]
    pub native_height: Option<f64>,
    #[serde(default)]
    pub analyses: Vec<AnalysisRecord>,
}

impl PhotoRecord {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let record = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            analyses = record.analyses.len(),
            "Photo record loaded"
        );
        Ok(record)
    }

    pub fn key(&self) -> PhotoKey {
        PhotoKey::new(self.map_square_number, self.number)
    }

    pub fn source(&self, side: DisplaySide) -> Option<&str> {
        let src = match side {
            DisplaySide::Cleaned => self.cleaned_src.as_deref(),
            DisplaySide::Front => self.front_src.as_deref(),
            DisplaySide::Back => self.back_src.as_deref(),
            DisplaySide::Binder => self.binder_src.as_deref(),
        };
        src.filter(|s| !s.is_empty())
    }

    /// Source of `side` resolved against the directory holding the record file.
    pub fn source_path(&self, side: DisplaySide, base_dir: &Path) -> Option<PathBuf> {
        self.source(side).map(|src| base_dir.join(src))
    }

    /// Sides with an image, in cleaned/front/back/binder order.
    pub fn available_sides(&self) -> Vec<DisplaySide> {
        DisplaySide::ALL
            .iter()
            .copied()
            .filter(|&side| self.source(side).is_some())
            .collect()
    }

    /// The side shown when the photo is first opened.
    pub fn default_side(&self) -> Option<DisplaySide> {
        self.available_sides().first().copied()
    }

    pub fn native_size(&self) -> Option<Size> {
        match (self.native_width, self.native_height) {
            (Some(w), Some(h)) => Some(Size::new(w, h)),
            _ => None,
        }
    }

    /// The size analyses were computed at: the record's declared size when
    /// usable, else `decoded` (the pixel size of the loaded image).
    pub fn analysis_size(&self, decoded: Size) -> Size {
        self.native_size()
            .and_then(|size| size.validated().ok())
            .unwrap_or(decoded)
    }

    /// Fixed metadata rows shown above the analysis entries.
    pub fn metadata_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Map Square", self.map_square_number.to_string()),
            ("Photo number", self.number.to_string()),
            (
                "Photographer name",
                self.photographer_name
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string()),
            ),
            (
                "Photographer number",
                self.photographer_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string()),
            ),
            (
                "Photographer caption",
                self.photographer_caption
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| EMPTY_LIST_PLACEHOLDER.to_string()),
            ),
        ]
    }
}

/// Read the intrinsic size of an image file from its header.
pub fn image_native_size(path: &Path) -> Result<Size> {
    let (w, h) = image::image_dimensions(path)?;
    Size::new(w as f64, h as f64).validated()
}
