use super::*;

#[test]
fn builtin_set_matches_the_three_standard_cards() {
    let specs = builtin_overlays();
    let dims: Vec<(&str, u32, u32)> = specs
        .iter()
        .map(|s| (s.name.as_str(), s.canvas.width, s.canvas.height))
        .collect();
    assert_eq!(
        dims,
        vec![
            ("title", 1920, 320),
            ("lower_third", 1600, 200),
            ("end_card", 1920, 1080),
        ]
    );

    for spec in &specs {
        spec.validate().unwrap();
    }
}

#[test]
fn end_card_subtitle_keeps_its_tinted_fill() {
    let specs = builtin_overlays();
    let end_card = specs.iter().find(|s| s.name == "end_card").unwrap();
    assert_eq!(end_card.blocks.len(), 2);
    assert_eq!(end_card.blocks[1].fill_rgba8, [200, 230, 255, 255]);
    assert_eq!(end_card.blocks[1].stroke_rgba8, [0, 0, 0, 160]);
}

#[test]
fn backdrop_rect_px_truncates_fractional_edges() {
    let b = Backdrop {
        rect_frac: [0.08, 0.38, 0.92, 0.62],
        corner_radius_px: 40.0,
        color_rgba8: [0, 0, 0, 170],
    };
    let canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    assert_eq!(b.rect_px(canvas), Rect::new(153.0, 410.0, 1766.0, 669.0));
}

#[test]
fn validate_rejects_degenerate_backdrops() {
    let mut spec = builtin_overlays().remove(1);

    spec.backdrop = Some(Backdrop {
        rect_frac: [0.5, 0.2, 0.5, 0.8],
        corner_radius_px: 10.0,
        color_rgba8: [0, 0, 0, 128],
    });
    assert!(spec.validate().is_err());

    spec.backdrop = Some(Backdrop {
        rect_frac: [-0.1, 0.0, 1.0, 1.0],
        corner_radius_px: 10.0,
        color_rgba8: [0, 0, 0, 128],
    });
    assert!(spec.validate().is_err());
}

#[test]
fn validate_rejects_bad_block_parameters() {
    let base = builtin_overlays().remove(0);

    let mut spec = base.clone();
    spec.blocks[0].size_px = 0.0;
    assert!(spec.validate().is_err());

    let mut spec = base.clone();
    spec.blocks[0].line_spacing = 0.0;
    assert!(spec.validate().is_err());

    let mut spec = base.clone();
    spec.blocks[0].placement = Placement::Wrapped {
        max_width_frac: 1.5,
    };
    assert!(spec.validate().is_err());

    let mut spec = base.clone();
    spec.blocks[0].placement = Placement::LineAt {
        center_y_frac: -0.2,
    };
    assert!(spec.validate().is_err());

    let mut spec = base;
    spec.name = "nested/name".to_string();
    assert!(spec.validate().is_err());
}

#[test]
fn specs_round_trip_through_json() {
    let specs = builtin_overlays();
    let json = serde_json::to_string(&specs).unwrap();
    let back: Vec<OverlaySpec> = serde_json::from_str(&json).unwrap();

    assert_eq!(back.len(), specs.len());
    for (a, b) in specs.iter().zip(&back) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.canvas, b.canvas);
        assert_eq!(a.blocks.len(), b.blocks.len());
    }
}

#[test]
fn minimal_json_doc_fills_styling_defaults() {
    let doc = r##"
    [{
        "name": "promo",
        "canvas": { "width": 640, "height": 360 },
        "blocks": [{
            "text": "Hi there",
            "size_px": 32.0,
            "placement": "CenteredLine"
        }]
    }]
    "##;
    let specs: Vec<OverlaySpec> = serde_json::from_str(doc).unwrap();
    assert_eq!(specs.len(), 1);
    specs[0].validate().unwrap();

    let block = &specs[0].blocks[0];
    assert_eq!(block.fill_rgba8, [255, 255, 255, 255]);
    assert_eq!(block.stroke_rgba8, [0, 0, 0, 180]);
    assert_eq!(block.stroke_width_px, 2.0);
    assert_eq!(block.line_spacing, 1.2);
    assert!(specs[0].backdrop.is_none());
}
