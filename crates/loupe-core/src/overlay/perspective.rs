use crate::consts::VANISHING_POINT_RADIUS;
use crate::geometry::{to_display_point, ImageFrame};
use crate::payload::PerspectivePayload;

use super::Drawable;

/// Lines scale per axis; the vanishing point marker keeps a fixed radius.
pub fn render(payload: &PerspectivePayload, frame: &ImageFrame) -> Vec<Drawable> {
    let mut drawables: Vec<Drawable> = payload
        .lines
        .iter()
        .filter_map(|line| {
            Some(Drawable::Line {
                from: to_display_point(line.start(), frame)?,
                to: to_display_point(line.end(), frame)?,
            })
        })
        .collect();

    if let Some(center) = payload
        .vanishing_point
        .and_then(|vp| to_display_point(vp, frame))
    {
        drawables.push(Drawable::Circle {
            center,
            radius: VANISHING_POINT_RADIUS,
        });
    }

    drawables
}
