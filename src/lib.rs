//! Slate generates static PNG overlays for video production: a title card, a
//! lower-third banner, and an end card, each composited over footage by the
//! editing step downstream.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: probe candidate font files, falling back to a system
//!    sans-serif face ([`load_font`])
//! 2. **Layout**: wrap words against a pixel budget and measure lines via
//!    Parley ([`wrap_words`], [`TextLayoutEngine`])
//! 3. **Draw**: backdrop panel plus stroked, centered glyph runs on a
//!    `vello_cpu` surface ([`generate_overlay`])
//! 4. **Persist**: straight-alpha RGBA8 written as PNG ([`FrameRgba`])
//!
//! Overlay definitions are plain serde data ([`OverlaySpec`]); the built-in
//! set ([`builtin_overlays`]) reproduces the three standard cards.
#![forbid(unsafe_code)]

mod foundation;
mod overlay;
mod render;
mod text;

pub use foundation::core::{Canvas, Point, Rect, Rgba8, RoundedRect, Vec2};
pub use foundation::error::{SlateError, SlateResult};
pub use overlay::generate::{DEFAULT_OUT_DIR, export_overlays, generate_overlay};
pub use overlay::model::{Backdrop, OverlaySpec, Placement, TextBlock, builtin_overlays};
pub use render::draw::{Halo, TextStyle, draw_centered_block, draw_line_at, fill_rounded_rect};
pub use render::surface::{FrameRgba, Surface};
pub use text::engine::{LineExtent, RegisteredFont, TextLayoutEngine, line_extent};
pub use text::font::{
    DEFAULT_FONT_CANDIDATES, FontOrigin, ResolvedFont, load_font, resolve_font_file,
};
pub use text::wrap::wrap_words;
