use loupe_core::geometry::Size;
use loupe_core::record::PhotoKey;

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Intrinsic size of the shown image.
    pub image_size: Option<[usize; 2]>,
    /// Native size of a freshly loaded image, consumed once the viewport
    /// knows the size it is drawn at.
    pub pending_load: Option<(PhotoKey, Size)>,
    /// Keep the image fitted to the panel; cleared by manual zoom.
    pub fit: bool,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    pub viewing_label: String,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            pending_load: None,
            fit: true,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            viewing_label: String::new(),
        }
    }
}

impl ViewportState {
    /// Forget the shown image, e.g. when switching photo or side.
    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
        self.pending_load = None;
        self.viewing_label.clear();
    }
}
