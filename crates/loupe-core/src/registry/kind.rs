use std::fmt;

/// Every analysis name the viewer knows how to present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    WhitespacePercentage,
    PhotographerCaptionLength,
    ForegroundPercentage,
    VanishingPoint,
    VanishingPointCoordinate,
    ForegroundMask,
    ObjectDetection,
    CombinedIndoor,
    CourtyardFrame,
    MeanDetail,
    LocalVariance,
    Similarity,
    GradientAnalysis,
    FeatureVector,
}

impl AnalysisKind {
    pub const ALL: &[Self] = &[
        Self::WhitespacePercentage,
        Self::PhotographerCaptionLength,
        Self::ForegroundPercentage,
        Self::VanishingPoint,
        Self::VanishingPointCoordinate,
        Self::ForegroundMask,
        Self::ObjectDetection,
        Self::CombinedIndoor,
        Self::CourtyardFrame,
        Self::MeanDetail,
        Self::LocalVariance,
        Self::Similarity,
        Self::GradientAnalysis,
        Self::FeatureVector,
    ];

    /// Record name as stored alongside the photo.
    pub fn name(self) -> &'static str {
        match self {
            Self::WhitespacePercentage => "whitespace_percentage",
            Self::PhotographerCaptionLength => "photographer_caption_length",
            Self::ForegroundPercentage => "foreground_percentage",
            Self::VanishingPoint => "find_vanishing_point",
            Self::VanishingPointCoordinate => "find_vanishing_point.vanishing_point_coord",
            Self::ForegroundMask => "foreground_mask",
            Self::ObjectDetection => "yolo_model",
            Self::CombinedIndoor => "indoor_analysis.combined_indoor",
            Self::CourtyardFrame => "courtyard_frame",
            Self::MeanDetail => "mean_detail",
            Self::LocalVariance => "local_variance",
            Self::Similarity => "resnet18_cosine_similarity",
            Self::GradientAnalysis => "gradient_analysis",
            Self::FeatureVector => "resnet18_feature_vector",
        }
    }

    /// Exact match on the full name, dotted suffix included.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
