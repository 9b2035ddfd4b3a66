use crate::consts::DETECTION_LABEL_OFFSET;
use crate::geometry::{scale_rect_uniform, ImageFrame, Point, Rect};
use crate::payload::DetectionPayload;

use super::Drawable;

/// Both axes use the height ratio. Each box yields an outline plus a
/// labeled group whose text sits just above the box.
pub fn render(payload: &DetectionPayload, frame: &ImageFrame) -> Vec<Drawable> {
    let Some((_, ratio)) = frame.scale() else {
        return Vec::new();
    };

    let mut drawables = Vec::with_capacity(payload.boxes.len() * 2);
    for b in &payload.boxes {
        let rect = scale_rect_uniform(Rect::new(b.x, b.y, b.width, b.height), ratio);
        drawables.push(Drawable::Rect(rect));
        drawables.push(Drawable::LabeledRect {
            rect,
            label: b.label.clone(),
            anchor: Point::new(rect.x, rect.y - DETECTION_LABEL_OFFSET),
        });
    }
    drawables
}
