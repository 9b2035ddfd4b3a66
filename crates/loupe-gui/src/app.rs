use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc;

use loupe_core::config::OverlayConfig;
use loupe_core::geometry::Size;
use loupe_core::record::DisplaySide;
use loupe_core::resize::{ResizeObserver, Subscription};
use loupe_core::view::ViewState;
use tracing::{debug, info};

use crate::loader;
use crate::messages::LoadResult;
use crate::panels;
use crate::states::{UIState, ViewportState};

pub struct LoupeApp {
    pub result_tx: mpsc::Sender<LoadResult>,
    pub result_rx: mpsc::Receiver<LoadResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub view: ViewState,
    pub config: OverlayConfig,
    /// Watches the drawn image size; fires only when it changes.
    pub resize: ResizeObserver,
    pending_resize: Rc<Cell<Option<Size>>>,
    _resize_subscription: Subscription,
    pub show_about: bool,
}

impl LoupeApp {
    pub fn new(ctx: &egui::Context, initial: Option<PathBuf>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let config = OverlayConfig::default();

        let resize = ResizeObserver::new();
        let pending_resize = Rc::new(Cell::new(None));
        let sink = Rc::clone(&pending_resize);
        let subscription = resize.subscribe(move |size| sink.set(Some(size)));

        if let Some(path) = initial {
            loader::open_record(result_tx.clone(), ctx.clone(), path);
        }

        Self {
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            view: ViewState::new(config.overlay_side),
            config,
            resize,
            pending_resize,
            _resize_subscription: subscription,
            show_about: false,
        }
    }

    /// Drain all pending results from the loader threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                LoadResult::RecordLoaded { path, record } => {
                    let key = record.key();
                    self.ui_state.add_log(format!(
                        "Opened: {} (photo {key}, {} analyses)",
                        path.display(),
                        record.analyses.len()
                    ));
                    let side = record.default_side().unwrap_or(self.config.overlay_side);
                    self.ui_state.record_path = Some(path);
                    self.ui_state.record = Some(*record);
                    self.viewport.clear();
                    self.resize.forget();
                    self.view.open_photo(key, side);
                    self.view.select_slot(self.config.default_view);
                    self.request_image(ctx);
                }
                LoadResult::ImageLoaded { photo, side, image } => {
                    let Some(record) = self
                        .ui_state
                        .record
                        .as_ref()
                        .filter(|r| r.key() == photo && side == self.view.display_side)
                    else {
                        debug!(%photo, %side, "Dropping stale image");
                        continue;
                    };
                    let size = image.size;
                    let native =
                        record.analysis_size(Size::new(size[0] as f64, size[1] as f64));
                    let texture = ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR);
                    self.viewport.texture = Some(texture);
                    self.viewport.image_size = Some(size);
                    self.viewport.pending_load = Some((photo, native));
                    self.viewport.viewing_label = side.side_label();
                }
                LoadResult::ConfigImported { path, config } => {
                    self.ui_state
                        .add_log(format!("Config imported: {}", path.display()));
                    self.apply_config(config);
                }
                LoadResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Start decoding the image of the currently shown side.
    pub fn request_image(&mut self, ctx: &egui::Context) {
        let Some(record) = self.ui_state.record.as_ref() else {
            return;
        };
        let photo = record.key();
        let side = self.view.display_side;
        match record.source_path(side, self.ui_state.base_dir()) {
            Some(path) => loader::load_image(self.result_tx.clone(), ctx.clone(), photo, side, path),
            None => self
                .ui_state
                .add_log(format!("Photo {photo} has no {side} image")),
        }
    }

    pub fn select_side(&mut self, ctx: &egui::Context, side: DisplaySide) {
        if side == self.view.display_side {
            return;
        }
        self.view.select_side(side);
        self.viewport.clear();
        self.request_image(ctx);
    }

    fn apply_config(&mut self, config: OverlayConfig) {
        self.view.overlay_side = config.overlay_side;
        self.view.select_slot(config.default_view);
        self.config = config;
    }

    /// Feed the drawn image size into the frame tracker.
    ///
    /// A fresh load records the frame first; later size changes arrive
    /// through the resize subscription.
    pub fn image_drawn(&mut self, display: Size) {
        if let Some((photo, native)) = self.viewport.pending_load.take() {
            if self.view.frames.image_loaded(photo, display, native) {
                let (width, height) = (display.width, display.height);
                info!(%photo, width, height, "Image frame ready");
            }
        }
        self.resize.observe(display);
        if let Some(size) = self.pending_resize.take() {
            if self.view.frames.resized(size) {
                debug!(width = size.width, height = size.height, "Overlay frame resized");
            }
        }
    }
}

impl eframe::App for LoupeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::info::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Loupe")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Loupe");
                        ui.label("Photo Analysis Overlays");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
