use crate::{
    foundation::core::Rgba8,
    foundation::error::{SlateError, SlateResult},
    text::font::ResolvedFont,
};

/// A font registered with both the shaping and the rasterization side.
#[derive(Clone)]
pub struct RegisteredFont {
    pub(crate) family: String,
    pub(crate) render_font: vello_cpu::peniko::FontData,
}

impl RegisteredFont {
    /// Primary family name detected from the font data.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Rasterization handle consumed by `vello_cpu` glyph runs.
    pub fn render_font(&self) -> &vello_cpu::peniko::FontData {
        &self.render_font
    }
}

impl std::fmt::Debug for RegisteredFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredFont")
            .field("family", &self.family)
            .finish()
    }
}

/// Measured pixel extent of one laid-out line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineExtent {
    /// Widest glyph-run advance in pixels.
    pub width: f64,
    /// Ascent + descent in pixels (leading excluded).
    pub height: f64,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes for shaping and rasterization.
    ///
    /// The same bytes feed Parley (family registration) and the `vello_cpu`
    /// glyph renderer, so measured and drawn glyphs always agree.
    pub fn register(&mut self, font: ResolvedFont) -> SlateResult<RegisteredFont> {
        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SlateError::font("no font families registered from font bytes"))?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SlateError::font("registered font family has no name"))?
            .to_string();

        let render_font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes),
            font.index,
        );

        Ok(RegisteredFont {
            family,
            render_font,
        })
    }

    /// Shape and lay out a single line of text at `size_px`.
    ///
    /// Wrapping is the caller's concern ([`crate::wrap_words`]); the layout
    /// is built unbounded so its advance is the line's natural width.
    pub fn layout_line(
        &mut self,
        font: &RegisteredFont,
        text: &str,
        size_px: f32,
        brush: Rgba8,
    ) -> SlateResult<parley::Layout<Rgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SlateError::validation("text size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Measure a single line's pixel extent without keeping the layout.
    pub fn measure_line(
        &mut self,
        font: &RegisteredFont,
        text: &str,
        size_px: f32,
    ) -> SlateResult<LineExtent> {
        let layout = self.layout_line(font, text, size_px, Rgba8::default())?;
        Ok(line_extent(&layout))
    }
}

/// Pixel extent of a built layout: widest line advance by summed line boxes.
pub fn line_extent(layout: &parley::Layout<Rgba8>) -> LineExtent {
    let mut width = 0.0f64;
    let mut height = 0.0f64;
    for line in layout.lines() {
        let m = line.metrics();
        width = width.max(f64::from(m.advance));
        height += f64::from(m.ascent + m.descent);
    }
    LineExtent { width, height }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
