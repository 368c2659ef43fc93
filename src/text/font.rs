use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{SlateError, SlateResult};

/// Candidate font files probed in order, first existing wins.
///
/// The macOS entries mirror the paths the overlay tool has always shipped
/// with; the rest cover the usual Linux distribution locations.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/System/Library/Fonts/SFNSRounded.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

#[derive(Clone, Debug)]
/// Where resolved font bytes came from.
pub enum FontOrigin {
    /// One of the probed candidate files.
    File(PathBuf),
    /// System fallback face, tagged with its family name.
    System(String),
}

#[derive(Clone)]
/// Raw font data ready for registration with [`crate::TextLayoutEngine`].
pub struct ResolvedFont {
    /// Complete font file contents.
    pub bytes: Vec<u8>,
    /// Face index within the file (non-zero only for collections).
    pub index: u32,
    /// Provenance, for diagnostics.
    pub origin: FontOrigin,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Return the first existing path from `candidates`, if any.
pub fn resolve_font_file<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// Resolve usable font bytes: probe `candidates` in order, then fall back to
/// a system sans-serif face.
///
/// Errors only when no candidate exists and the system font database has no
/// faces at all.
pub fn load_font<P: AsRef<Path>>(candidates: &[P]) -> SlateResult<ResolvedFont> {
    if let Some(path) = resolve_font_file(candidates) {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "using candidate font file");
        return Ok(ResolvedFont {
            bytes,
            index: 0,
            origin: FontOrigin::File(path),
        });
    }
    system_fallback_font()
}

fn system_fallback_font() -> SlateResult<ResolvedFont> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[
            fontdb::Family::SansSerif,
            fontdb::Family::Serif,
            fontdb::Family::Monospace,
        ],
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or_else(|| {
            SlateError::font("no candidate font file exists and the system has no fonts")
        })?;
    let face = db
        .face(id)
        .ok_or_else(|| SlateError::font("queried font face has no face info"))?;

    let family = face
        .families
        .first()
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let bytes = match &face.source {
        fontdb::Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        fontdb::Source::File(path) => std::fs::read(path)
            .with_context(|| format!("read system font '{}'", path.display()))?,
        fontdb::Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
    };

    tracing::debug!(family = %family, index = face.index, "falling back to system font");
    Ok(ResolvedFont {
        bytes,
        index: face.index,
        origin: FontOrigin::System(family),
    })
}
