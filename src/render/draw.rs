use crate::{
    foundation::core::{Point, Rect, Rgba8, RoundedRect},
    foundation::error::SlateResult,
    text::engine::{LineExtent, RegisteredFont, TextLayoutEngine, line_extent},
};

/// Outline drawn behind the glyph fill to keep text legible over arbitrary
/// backgrounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Halo {
    pub color: Rgba8,
    /// Visible outline width outside the glyph contour, in pixels.
    pub width_px: f64,
}

/// Styling shared by every line of a text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub fill: Rgba8,
    pub halo: Option<Halo>,
    /// Multiplier on line height when advancing between lines.
    pub line_spacing: f64,
}

/// Fill a rounded rectangle panel in canvas coordinates.
pub fn fill_rounded_rect(
    ctx: &mut vello_cpu::RenderContext,
    rect: Rect,
    radius: f64,
    color: Rgba8,
) {
    use kurbo::Shape;

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(color));
    let rr = RoundedRect::new(rect.x0, rect.y0, rect.x1, rect.y1, radius);
    ctx.fill_path(&bezpath_to_cpu(&rr.to_path(0.1)));
}

/// Draw one laid-out line with its top-left corner at `origin`.
///
/// The halo stroke is centered on the glyph contour at twice the requested
/// width; the fill drawn on top covers the inner half, leaving the requested
/// width visible outside the glyph.
pub fn draw_line_at(
    ctx: &mut vello_cpu::RenderContext,
    font: &RegisteredFont,
    layout: &parley::Layout<Rgba8>,
    origin: Point,
    halo: Option<Halo>,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let glyphs: Vec<vello_cpu::Glyph> = run
                .glyphs()
                .map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                })
                .collect();

            if let Some(halo) = halo
                && halo.width_px > 0.0
            {
                ctx.set_paint(color_to_cpu(halo.color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(halo.width_px * 2.0));
                ctx.glyph_run(font.render_font())
                    .font_size(run.run().font_size())
                    .stroke_glyphs(glyphs.iter().copied());
            }

            let brush = run.style().brush;
            ctx.set_paint(color_to_cpu(brush));
            ctx.glyph_run(font.render_font())
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs.into_iter());
        }
    }
}

/// Draw pre-wrapped lines as one block centered in `rect`.
///
/// Inter-line gaps use the first line's height for every gap, so vertical
/// rhythm stays uniform across lines of differing heights. All placement is
/// floored to whole pixels.
pub fn draw_centered_block(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextLayoutEngine,
    font: &RegisteredFont,
    lines: &[String],
    rect: Rect,
    style: &TextStyle,
) -> SlateResult<()> {
    let mut layouts = Vec::with_capacity(lines.len());
    for line in lines {
        layouts.push(engine.layout_line(font, line, style.size_px, style.fill)?);
    }
    let extents: Vec<LineExtent> = layouts.iter().map(line_extent).collect();
    let heights: Vec<f64> = extents.iter().map(|e| e.height).collect();

    let mut y = rect.y0 + centered_origin(rect.height(), block_height(&heights, style.line_spacing));
    for (layout, extent) in layouts.iter().zip(&extents) {
        let x = rect.x0 + centered_origin(rect.width(), extent.width);
        draw_line_at(ctx, font, layout, Point::new(x, y), style.halo);
        y += (extent.height * style.line_spacing).floor();
    }
    Ok(())
}

/// Floor-centered offset of `content` within `span` (floors toward negative
/// infinity when the content overflows the span).
pub(crate) fn centered_origin(span: f64, content: f64) -> f64 {
    ((span - content) / 2.0).floor()
}

fn block_height(heights: &[f64], line_spacing: f64) -> f64 {
    let first = heights.first().copied().unwrap_or(0.0);
    let gap = ((heights.len().saturating_sub(1)) as f64 * first * (line_spacing - 1.0)).floor();
    heights.iter().sum::<f64>() + gap
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
