//! SVG output of a single frame

use std::fmt::{self, Write};

use super::{project, DrawRect};
use crate::world::{FrameSnapshot, CANVAS_HEIGHT, CANVAS_WIDTH};

const BORDER_STYLE: &str = "border: 2px solid #333";

/// Render a snapshot as a standalone SVG document sized to the canvas
pub fn render_svg(snapshot: &FrameSnapshot<'_>) -> String {
    rects_to_svg(&project(snapshot), CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// Serialize draw rectangles into an SVG document
pub fn rects_to_svg(rects: &[DrawRect], width: f32, height: f32) -> String {
    let mut out = String::with_capacity(64 + rects.len() * 72);
    // Writing into a String cannot fail
    write_svg(&mut out, rects, width, height).unwrap_or_default();
    out
}

/// Write the SVG document for `rects` into any formatter sink
pub fn write_svg<W: Write>(out: &mut W, rects: &[DrawRect], width: f32, height: f32) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="{}">"#,
        width, height, BORDER_STYLE
    )?;
    for rect in rects {
        writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x, rect.y, rect.width, rect.height, rect.fill
        )?;
    }
    writeln!(out, "</svg>")
}
