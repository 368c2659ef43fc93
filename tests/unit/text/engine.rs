use super::*;
use crate::text::font::FontOrigin;

#[test]
fn register_rejects_non_font_bytes() {
    let mut engine = TextLayoutEngine::new();
    let bogus = ResolvedFont {
        bytes: b"definitely not a font file".to_vec(),
        index: 0,
        origin: FontOrigin::System("bogus".to_string()),
    };
    let err = engine.register(bogus).unwrap_err();
    assert!(matches!(err, SlateError::Font(_)));
}

#[test]
fn layout_rejects_nonpositive_sizes() {
    let mut engine = TextLayoutEngine::new();
    let font = RegisteredFont {
        family: "Unresolved".to_string(),
        render_font: vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(Vec::new()),
            0,
        ),
    };

    for bad in [0.0f32, -4.0, f32::NAN, f32::INFINITY] {
        let err = engine
            .layout_line(&font, "hi", bad, crate::Rgba8::default())
            .err()
            .unwrap();
        assert!(matches!(err, SlateError::Validation(_)), "size {bad} accepted");
    }
}
