//! Paints overlay drawables on top of the displayed image.
//!
//! Drawables arrive in display coordinates relative to the image's top
//! left corner, so painting only offsets them by the image rect origin.

use loupe_core::config::OverlayStyle;
use loupe_core::geometry::{Point, Rect};
use loupe_core::overlay::Drawable;

use crate::panels::helpers::color;

pub fn draw_overlay(ui: &egui::Ui, drawables: &[Drawable], img_rect: egui::Rect, style: &OverlayStyle) {
    let painter = ui.painter_at(img_rect);
    let stroke_width = style.stroke_width;

    for drawable in drawables {
        match drawable {
            Drawable::Line { from, to } => {
                painter.line_segment(
                    [to_screen(*from, img_rect), to_screen(*to, img_rect)],
                    egui::Stroke::new(stroke_width, color(style.line_color)),
                );
            }
            Drawable::Circle { center, radius } => {
                painter.circle_stroke(
                    to_screen(*center, img_rect),
                    *radius as f32,
                    egui::Stroke::new(stroke_width, color(style.marker_color)),
                );
            }
            Drawable::Rect(rect) => {
                painter.rect_stroke(
                    rect_to_screen(rect, img_rect),
                    0.0,
                    egui::Stroke::new(stroke_width, color(style.box_color)),
                    egui::epaint::StrokeKind::Outside,
                );
            }
            Drawable::Square(rect) => {
                let alpha = (style.mask_opacity.clamp(0.0, 1.0) * 255.0) as u8;
                let [r, g, b] = style.mask_color;
                painter.rect_filled(
                    rect_to_screen(rect, img_rect),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
                );
            }
            Drawable::LabeledRect {
                rect,
                label,
                anchor,
            } => {
                painter.rect_stroke(
                    rect_to_screen(rect, img_rect),
                    0.0,
                    egui::Stroke::new(stroke_width, color(style.box_color)),
                    egui::epaint::StrokeKind::Outside,
                );
                // The anchor is the text baseline's left end.
                painter.text(
                    to_screen(*anchor, img_rect),
                    egui::Align2::LEFT_BOTTOM,
                    label,
                    egui::FontId::proportional(style.label_size),
                    color(style.label_color),
                );
            }
        }
    }
}

fn to_screen(point: Point, img_rect: egui::Rect) -> egui::Pos2 {
    img_rect.min + egui::vec2(point.x as f32, point.y as f32)
}

fn rect_to_screen(rect: &Rect, img_rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_screen(rect.origin(), img_rect),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}
