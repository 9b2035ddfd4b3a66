use crate::consts::MASK_CELL_SIZE;
use crate::geometry::{scale_rect_uniform, ImageFrame, Rect};
use crate::payload::MaskPayload;

use super::Drawable;

/// Both axes use the width ratio, even when the frame's aspect ratio differs.
pub fn render(payload: &MaskPayload, frame: &ImageFrame) -> Vec<Drawable> {
    let Some((ratio, _)) = frame.scale() else {
        return Vec::new();
    };

    payload
        .cells
        .iter()
        .map(|cell| {
            let native = Rect::new(
                cell.col as f64 * MASK_CELL_SIZE,
                cell.row as f64 * MASK_CELL_SIZE,
                MASK_CELL_SIZE,
                MASK_CELL_SIZE,
            );
            Drawable::Square(scale_rect_uniform(native, ratio))
        })
        .collect()
}
