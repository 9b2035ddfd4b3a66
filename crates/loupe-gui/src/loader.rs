//! Background loading of photo records, side images and configs.
//!
//! File dialogs and image decoding run on short-lived threads; results
//! come back to the UI thread over the app's channel.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use anyhow::Context;
use loupe_core::config::OverlayConfig;
use loupe_core::record::{DisplaySide, PhotoKey, PhotoRecord};
use tracing::{debug, warn};

use crate::convert::image_to_color_image;
use crate::messages::LoadResult;

pub fn pick_record(tx: Sender<LoadResult>, ctx: egui::Context) {
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Photo records", &["json"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            send(&tx, &ctx, load_record(path));
        }
    });
}

pub fn open_record(tx: Sender<LoadResult>, ctx: egui::Context, path: PathBuf) {
    std::thread::spawn(move || send(&tx, &ctx, load_record(path)));
}

fn load_record(path: PathBuf) -> LoadResult {
    match PhotoRecord::load(&path) {
        Ok(record) => LoadResult::RecordLoaded {
            path,
            record: Box::new(record),
        },
        Err(e) => LoadResult::Error {
            message: format!("Failed to open {}: {e}", path.display()),
        },
    }
}

pub fn load_image(
    tx: Sender<LoadResult>,
    ctx: egui::Context,
    photo: PhotoKey,
    side: DisplaySide,
    path: PathBuf,
) {
    std::thread::spawn(move || {
        debug!(%photo, %side, path = %path.display(), "Decoding side image");
        let result = image::open(&path)
            .with_context(|| format!("Failed to decode {}", path.display()))
            .map(|image| LoadResult::ImageLoaded {
                photo,
                side,
                image: image_to_color_image(&image),
            })
            .unwrap_or_else(|e| LoadResult::Error {
                message: format!("{e:#}"),
            });
        send(&tx, &ctx, result);
    });
}

pub fn import_config(tx: Sender<LoadResult>, ctx: egui::Context) {
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match OverlayConfig::load(&path) {
            Ok(config) => LoadResult::ConfigImported { path, config },
            Err(e) => LoadResult::Error {
                message: format!("Failed to import {}: {e}", path.display()),
            },
        };
        send(&tx, &ctx, result);
    });
}

pub fn export_config(config: OverlayConfig) {
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("loupe.toml")
            .save_file()
        {
            match toml::to_string_pretty(&config) {
                Ok(content) => {
                    if let Err(e) = std::fs::write(&path, content) {
                        warn!(path = %path.display(), error = %e, "Config export failed");
                    }
                }
                Err(e) => warn!(error = %e, "Config serialization failed"),
            }
        }
    });
}

fn send(tx: &Sender<LoadResult>, ctx: &egui::Context, result: LoadResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}
