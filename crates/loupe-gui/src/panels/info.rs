use loupe_core::dispatch::dispatch;
use loupe_core::view::ViewSlot;

use crate::app::LoupeApp;
use crate::panels::helpers::{enum_combo, section_header};

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::SidePanel::left("info")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            let Some(record) = app.ui_state.record.as_ref() else {
                ui.label("No photo record open");
                return;
            };
            let metadata = record.metadata_entries();
            let sides = record.available_sides();
            let entries = dispatch(&record.analyses, &app.view, record.key()).entries;

            egui::ScrollArea::vertical().show(ui, |ui| {
                section_header(ui, "Photo", None);
                egui::Grid::new("metadata").num_columns(2).show(ui, |ui| {
                    for (label, value) in &metadata {
                        ui.label(*label);
                        ui.label(value);
                        ui.end_row();
                    }
                });
                ui.separator();

                section_header(ui, "Side", None);
                ui.horizontal_wrapped(|ui| {
                    for &side in &sides {
                        let selected = side == app.view.display_side;
                        if ui.selectable_label(selected, side.side_label()).clicked() {
                            app.select_side(ctx, side);
                        }
                    }
                });
                ui.separator();

                let status = app.view.active_slot.status_text();
                section_header(ui, "View", Some(status));
                let mut slot = app.view.active_slot;
                if enum_combo(ui, "Overlay", &mut slot, ViewSlot::ALL) {
                    app.view.select_slot(slot);
                }
                if slot != ViewSlot::None && !app.view.overlays_visible() {
                    ui.small(format!(
                        "Overlays are drawn on the {} side only",
                        app.view.overlay_side
                    ));
                }
                ui.separator();

                section_header(ui, "Analyses", None);
                if entries.is_empty() {
                    ui.weak("No analyses");
                }
                egui::Grid::new("analyses").num_columns(2).show(ui, |ui| {
                    for entry in &entries {
                        ui.label(&entry.label);
                        ui.vertical(|ui| {
                            for line in entry.value.lines() {
                                ui.strong(line);
                            }
                        });
                        ui.end_row();
                    }
                });
            });
        });
}
