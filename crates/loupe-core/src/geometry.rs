use serde::{Deserialize, Serialize};

use crate::error::{LoupeError, Result};

/// A point in either native or display pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle: origin is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject sizes that cannot serve as a rendered or native image size.
    pub fn validated(self) -> Result<Self> {
        if usable_divisor(self.width) && usable_divisor(self.height) {
            Ok(self)
        } else {
            Err(LoupeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Rendered and intrinsic size of the displayed image.
///
/// The two aspect ratios are not assumed to match; each axis scales
/// with its own ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFrame {
    pub display_width: f64,
    pub display_height: f64,
    pub native_width: f64,
    pub native_height: f64,
}

impl ImageFrame {
    pub fn new(display: Size, native: Size) -> Self {
        Self {
            display_width: display.width,
            display_height: display.height,
            native_width: native.width,
            native_height: native.height,
        }
    }

    pub fn display_size(&self) -> Size {
        Size::new(self.display_width, self.display_height)
    }

    pub fn native_size(&self) -> Size {
        Size::new(self.native_width, self.native_height)
    }

    /// False until the native image size is known and usable as a divisor.
    pub fn is_drawable(&self) -> bool {
        usable_divisor(self.native_width) && usable_divisor(self.native_height)
    }

    /// `display_width / native_width`, if the native width is usable.
    pub fn width_ratio(&self) -> Option<f64> {
        usable_divisor(self.native_width).then(|| self.display_width / self.native_width)
    }

    /// `display_height / native_height`, if the native height is usable.
    pub fn height_ratio(&self) -> Option<f64> {
        usable_divisor(self.native_height).then(|| self.display_height / self.native_height)
    }

    /// Per-axis scale factors, or `None` before the image has loaded.
    pub fn scale(&self) -> Option<(f64, f64)> {
        Some((self.width_ratio()?, self.height_ratio()?))
    }
}

fn usable_divisor(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Map a native-space point into display space.
pub fn to_display_point(point: Point, frame: &ImageFrame) -> Option<Point> {
    let (sx, sy) = frame.scale()?;
    Some(Point::new(point.x * sx, point.y * sy))
}

/// Map a native-space rectangle into display space.
///
/// Origin and extents scale independently per axis, so the shape is
/// preserved only when both scales are equal.
pub fn to_display_rect(rect: Rect, frame: &ImageFrame) -> Option<Rect> {
    let (sx, sy) = frame.scale()?;
    Some(Rect::new(
        rect.x * sx,
        rect.y * sy,
        rect.width * sx,
        rect.height * sy,
    ))
}

/// Scale a native rectangle by one ratio on both axes.
pub fn scale_rect_uniform(rect: Rect, ratio: f64) -> Rect {
    Rect::new(
        rect.x * ratio,
        rect.y * ratio,
        rect.width * ratio,
        rect.height * ratio,
    )
}
