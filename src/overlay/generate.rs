use std::path::{Path, PathBuf};

use crate::{
    foundation::core::{Point, Rgba8},
    foundation::error::SlateResult,
    overlay::model::{OverlaySpec, Placement, TextBlock},
    render::draw::{self, Halo, TextStyle},
    render::surface::Surface,
    text::engine::{RegisteredFont, TextLayoutEngine, line_extent},
    text::font::load_font,
    text::wrap::wrap_words,
};

/// Default export directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "docs/overlays";

/// Render one overlay spec and write it to `out_path`.
#[tracing::instrument(skip(engine, font, spec), fields(name = %spec.name))]
pub fn generate_overlay(
    engine: &mut TextLayoutEngine,
    font: &RegisteredFont,
    spec: &OverlaySpec,
    out_path: &Path,
) -> SlateResult<()> {
    spec.validate()?;

    let mut surface = Surface::new(spec.canvas)?;
    if let Some(b) = &spec.backdrop {
        draw::fill_rounded_rect(
            surface.ctx(),
            b.rect_px(spec.canvas),
            b.corner_radius_px,
            Rgba8::from_array(b.color_rgba8),
        );
    }

    let canvas_rect = spec.canvas.rect();
    for block in &spec.blocks {
        let style = style_for(block);
        match block.placement {
            Placement::Wrapped { max_width_frac } => {
                let budget = (f64::from(spec.canvas.width) * max_width_frac).trunc();
                let lines = wrap_words(&block.text, budget, |candidate| {
                    engine
                        .measure_line(font, candidate, block.size_px)
                        .map(|e| e.width)
                })?;
                draw::draw_centered_block(surface.ctx(), engine, font, &lines, canvas_rect, &style)?;
            }
            Placement::CenteredLine => {
                let layout = engine.layout_line(font, &block.text, block.size_px, style.fill)?;
                let extent = line_extent(&layout);
                let origin = Point::new(
                    draw::centered_origin(canvas_rect.width(), extent.width),
                    draw::centered_origin(canvas_rect.height(), extent.height),
                );
                draw::draw_line_at(surface.ctx(), font, &layout, origin, style.halo);
            }
            Placement::LineAt { center_y_frac } => {
                let layout = engine.layout_line(font, &block.text, block.size_px, style.fill)?;
                let extent = line_extent(&layout);
                let origin = Point::new(
                    draw::centered_origin(canvas_rect.width(), extent.width),
                    (f64::from(spec.canvas.height) * center_y_frac).trunc()
                        - (extent.height / 2.0).floor(),
                );
                draw::draw_line_at(surface.ctx(), font, &layout, origin, style.halo);
            }
        }
    }

    surface.finish().save_png(out_path)
}

/// Export every spec as `<out_dir>/<name>.png`, resolving the font once.
///
/// Existing files are overwritten; `out_dir` is created if absent. Returns
/// the written paths in spec order.
#[tracing::instrument(skip(specs, out_dir, font_candidates), fields(out_dir = %out_dir.display()))]
pub fn export_overlays<P: AsRef<Path>>(
    specs: &[OverlaySpec],
    out_dir: &Path,
    font_candidates: &[P],
) -> SlateResult<Vec<PathBuf>> {
    let resolved = load_font(font_candidates)?;
    let mut engine = TextLayoutEngine::new();
    let font = engine.register(resolved)?;
    tracing::debug!(family = font.family(), "registered overlay font");

    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = out_dir.join(format!("{}.png", spec.name));
        generate_overlay(&mut engine, &font, spec, &path)?;
        written.push(path);
    }
    Ok(written)
}

fn style_for(block: &TextBlock) -> TextStyle {
    let halo = (block.stroke_width_px > 0.0).then(|| Halo {
        color: Rgba8::from_array(block.stroke_rgba8),
        width_px: block.stroke_width_px,
    });
    TextStyle {
        size_px: block.size_px,
        fill: Rgba8::from_array(block.fill_rgba8),
        halo,
        line_spacing: block.line_spacing,
    }
}
