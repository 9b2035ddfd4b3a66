use std::fmt::Write;

use crate::config::OverlayStyle;

use super::Drawable;

/// Compose drawables into one SVG layer sized to the displayed image.
pub fn to_svg(drawables: &[Drawable], width: f64, height: f64, style: &OverlayStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="analysis-overlay" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    let stroke = style.stroke_width;
    for drawable in drawables {
        let _ = match drawable {
            Drawable::Line { from, to } => writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{stroke}"/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                rgb(style.line_color)
            ),
            Drawable::Circle { center, radius } => writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{radius}" fill="none" stroke="{}" stroke-width="{stroke}"/>"#,
                center.x,
                center.y,
                rgb(style.marker_color)
            ),
            Drawable::Rect(r) => writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{stroke}"/>"#,
                r.x,
                r.y,
                r.width,
                r.height,
                rgb(style.box_color)
            ),
            Drawable::Square(r) => writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
                r.x,
                r.y,
                r.width,
                r.height,
                rgb(style.mask_color),
                style.mask_opacity
            ),
            Drawable::LabeledRect {
                rect,
                label,
                anchor,
            } => writeln!(
                out,
                concat!(
                    r#"  <g><rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    r#"<text x="{}" y="{}" fill="{}" font-size="{}">{}</text></g>"#
                ),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rgb(style.box_color),
                stroke,
                anchor.x,
                anchor.y,
                rgb(style.label_color),
                style.label_size,
                escape_xml(label)
            ),
        };
    }

    out.push_str("</svg>\n");
    out
}

fn rgb([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
