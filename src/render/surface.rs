use std::path::Path;

use anyhow::Context;

use crate::foundation::{
    core::Canvas,
    error::{SlateError, SlateResult},
};

/// One overlay's drawing surface.
///
/// Wraps a canvas-sized `vello_cpu` render context; created, drawn into by a
/// single layout pass, finished into pixels, and discarded.
pub struct Surface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl Surface {
    pub fn new(canvas: Canvas) -> SlateResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| SlateError::validation("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| SlateError::validation("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(SlateError::validation("canvas dimensions must be > 0"));
        }

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Drawing context for this surface.
    pub fn ctx(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    /// Flush recorded drawing into straight-alpha RGBA8 pixels.
    pub fn finish(mut self) -> FrameRgba {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        FrameRgba {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
        }
    }
}

/// Finished frame pixels in straight (non-premultiplied) RGBA8.
///
/// Overlays composite over arbitrary footage downstream, so the PNG must
/// carry straight alpha rather than the renderer's premultiplied form.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> SlateResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }

        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = (((px[0] as u16) * 255 + a / 2) / a).min(255) as u8;
        px[1] = (((px[1] as u16) * 255 + a / 2) / a).min(255) as u8;
        px[2] = (((px[2] as u16) * 255 + a / 2) / a).min(255) as u8;
    }
}
