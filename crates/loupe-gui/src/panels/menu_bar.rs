use loupe_core::config::OverlayConfig;

use crate::app::LoupeApp;
use crate::loader;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Photo Record...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    loader::pick_record(app.result_tx.clone(), ctx.clone());
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    loader::import_config(app.result_tx.clone(), ctx.clone());
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    loader::export_config(app.config.clone());
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Config").clicked() {
                    ui.close();
                    let config = OverlayConfig::default();
                    app.view.overlay_side = config.overlay_side;
                    app.config = config;
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            loader::pick_record(app.result_tx.clone(), ctx.clone());
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
