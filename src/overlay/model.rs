use crate::foundation::{
    core::{Canvas, Rect},
    error::{SlateError, SlateResult},
};

/// A single overlay card definition.
///
/// Overlay specs are pure data: they can be built programmatically, come from
/// [`builtin_overlays`], or be deserialized from a JSON document handed to
/// the CLI. Rendering happens in [`crate::generate_overlay`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OverlaySpec {
    /// Output file stem; the exported file is `<name>.png`.
    pub name: String,
    /// Canvas dimensions in pixels.
    pub canvas: Canvas,
    /// Optional rounded backdrop panel drawn before any text.
    #[serde(default)]
    pub backdrop: Option<Backdrop>,
    /// Text blocks drawn in order.
    pub blocks: Vec<TextBlock>,
}

/// Semi-transparent rounded panel drawn behind the text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Backdrop {
    /// Panel edges as canvas-normalized fractions (left, top, right, bottom).
    pub rect_frac: [f64; 4],
    /// Corner radius in pixels.
    pub corner_radius_px: f64,
    /// Panel fill color, straight RGBA.
    pub color_rgba8: [u8; 4],
}

impl Backdrop {
    /// Pixel-space panel rect on `canvas`, edges truncated to whole pixels.
    pub fn rect_px(&self, canvas: Canvas) -> Rect {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        Rect::new(
            (w * self.rect_frac[0]).trunc(),
            (h * self.rect_frac[1]).trunc(),
            (w * self.rect_frac[2]).trunc(),
            (h * self.rect_frac[3]).trunc(),
        )
    }
}

/// One run of styled text on the card.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextBlock {
    /// Text content; wrapped or kept single-line per `placement`.
    pub text: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Glyph fill color, straight RGBA.
    #[serde(default = "default_fill_rgba8")]
    pub fill_rgba8: [u8; 4],
    /// Halo stroke color, straight RGBA.
    #[serde(default = "default_stroke_rgba8")]
    pub stroke_rgba8: [u8; 4],
    /// Halo stroke width in pixels; 0 disables the halo.
    #[serde(default = "default_stroke_width_px")]
    pub stroke_width_px: f64,
    /// Line-height multiplier between wrapped lines.
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,
    /// Placement policy on the canvas.
    pub placement: Placement,
}

/// Placement policy for a text block.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Placement {
    /// Wrap to a canvas-width budget and center the block on the canvas.
    Wrapped {
        /// Wrap budget as a fraction of canvas width.
        max_width_frac: f64,
    },
    /// Single line centered on both canvas axes.
    CenteredLine,
    /// Single line centered horizontally with its midline at a fixed
    /// canvas-height fraction.
    LineAt {
        /// Vertical midline as a fraction of canvas height.
        center_y_frac: f64,
    },
}

fn default_fill_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_stroke_rgba8() -> [u8; 4] {
    [0, 0, 0, 180]
}

fn default_stroke_width_px() -> f64 {
    2.0
}

fn default_line_spacing() -> f64 {
    1.2
}

impl OverlaySpec {
    /// Validate structural invariants before rendering.
    pub fn validate(&self) -> SlateResult<()> {
        if self.name.is_empty() || self.name.contains(['/', '\\']) {
            return Err(SlateError::validation(
                "overlay name must be a non-empty file stem",
            ));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SlateError::validation("canvas dimensions must be > 0"));
        }

        if let Some(b) = &self.backdrop {
            let [x0, y0, x1, y1] = b.rect_frac;
            let in_unit = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
            if !(in_unit(x0) && in_unit(y0) && in_unit(x1) && in_unit(y1)) {
                return Err(SlateError::validation(
                    "backdrop rect_frac edges must lie in 0..=1",
                ));
            }
            if x1 <= x0 || y1 <= y0 {
                return Err(SlateError::validation(
                    "backdrop rect_frac must have right > left and bottom > top",
                ));
            }
            if !b.corner_radius_px.is_finite() || b.corner_radius_px < 0.0 {
                return Err(SlateError::validation(
                    "backdrop corner_radius_px must be finite and >= 0",
                ));
            }
        }

        for block in &self.blocks {
            if !block.size_px.is_finite() || block.size_px <= 0.0 {
                return Err(SlateError::validation("block size_px must be finite and > 0"));
            }
            if !block.stroke_width_px.is_finite() || block.stroke_width_px < 0.0 {
                return Err(SlateError::validation(
                    "block stroke_width_px must be finite and >= 0",
                ));
            }
            if !block.line_spacing.is_finite() || block.line_spacing <= 0.0 {
                return Err(SlateError::validation(
                    "block line_spacing must be finite and > 0",
                ));
            }
            match block.placement {
                Placement::Wrapped { max_width_frac } => {
                    if !max_width_frac.is_finite()
                        || max_width_frac <= 0.0
                        || max_width_frac > 1.0
                    {
                        return Err(SlateError::validation(
                            "wrapped max_width_frac must lie in (0, 1]",
                        ));
                    }
                }
                Placement::CenteredLine => {}
                Placement::LineAt { center_y_frac } => {
                    if !center_y_frac.is_finite() || !(0.0..=1.0).contains(&center_y_frac) {
                        return Err(SlateError::validation(
                            "line center_y_frac must lie in 0..=1",
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// The built-in overlay set: title card, lower third, end card.
pub fn builtin_overlays() -> Vec<OverlaySpec> {
    vec![
        OverlaySpec {
            name: "title".to_string(),
            canvas: Canvas {
                width: 1920,
                height: 320,
            },
            backdrop: None,
            blocks: vec![TextBlock {
                text: "MicroRaceDriver — Built and Shipped with AI (Zero‑Code)".to_string(),
                size_px: 72.0,
                fill_rgba8: default_fill_rgba8(),
                stroke_rgba8: default_stroke_rgba8(),
                stroke_width_px: default_stroke_width_px(),
                line_spacing: default_line_spacing(),
                placement: Placement::Wrapped {
                    max_width_frac: 0.9,
                },
            }],
        },
        OverlaySpec {
            name: "lower_third".to_string(),
            canvas: Canvas {
                width: 1600,
                height: 200,
            },
            backdrop: Some(Backdrop {
                rect_frac: [0.0, 0.0, 1.0, 1.0],
                corner_radius_px: 28.0,
                color_rgba8: [0, 0, 0, 150],
            }),
            blocks: vec![TextBlock {
                text: "John Doktor • Zero‑Code Devlog".to_string(),
                size_px: 64.0,
                fill_rgba8: default_fill_rgba8(),
                stroke_rgba8: default_stroke_rgba8(),
                stroke_width_px: default_stroke_width_px(),
                line_spacing: default_line_spacing(),
                placement: Placement::CenteredLine,
            }],
        },
        OverlaySpec {
            name: "end_card".to_string(),
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            backdrop: Some(Backdrop {
                rect_frac: [0.08, 0.38, 0.92, 0.62],
                corner_radius_px: 40.0,
                color_rgba8: [0, 0, 0, 170],
            }),
            blocks: vec![
                TextBlock {
                    text: "Read the full case study".to_string(),
                    size_px: 80.0,
                    fill_rgba8: default_fill_rgba8(),
                    stroke_rgba8: default_stroke_rgba8(),
                    stroke_width_px: default_stroke_width_px(),
                    line_spacing: default_line_spacing(),
                    placement: Placement::LineAt { center_y_frac: 0.44 },
                },
                TextBlock {
                    text: "Link in description".to_string(),
                    size_px: 52.0,
                    fill_rgba8: [200, 230, 255, 255],
                    stroke_rgba8: [0, 0, 0, 160],
                    stroke_width_px: default_stroke_width_px(),
                    line_spacing: default_line_spacing(),
                    placement: Placement::LineAt { center_y_frac: 0.54 },
                },
            ],
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/model.rs"]
mod tests;
