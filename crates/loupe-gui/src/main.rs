mod app;
mod convert;
mod loader;
mod messages;
mod panels;
mod states;

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional photo record to open on startup.
    let initial = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Loupe"),
        ..Default::default()
    };

    eframe::run_native(
        "Loupe",
        options,
        Box::new(|cc| Ok(Box::new(app::LoupeApp::new(&cc.egui_ctx, initial)))),
    )
}
