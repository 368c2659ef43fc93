use super::*;

#[test]
fn centered_origin_floors_like_integer_division() {
    assert_eq!(centered_origin(1920.0, 500.0), 710.0);
    assert_eq!(centered_origin(11.0, 2.0), 4.0);
    // Content wider than the span floors toward negative infinity.
    assert_eq!(centered_origin(10.0, 25.0), -8.0);
}

#[test]
fn single_short_line_centers_within_a_1920x320_box() {
    // Mirrors the title-card geometry: a 500x80 line in a 1920x320 box.
    let x = centered_origin(1920.0, 500.0);
    let y = centered_origin(320.0, 80.0);
    assert_eq!(x, (1920.0 - 500.0) / 2.0);
    assert_eq!(y, (320.0 - 80.0) / 2.0);
}

#[test]
fn block_height_of_one_line_is_its_height() {
    assert_eq!(block_height(&[50.0], 1.2), 50.0);
    assert_eq!(block_height(&[], 1.2), 0.0);
}

// Spacing factors here are exactly representable so the floored gaps are
// deterministic across platforms.
#[test]
fn block_height_gap_uses_first_line_height_for_all_gaps() {
    // Two lines, spacing 1.5: gap = floor(1 * 50 * 0.5) = 25.
    assert_eq!(block_height(&[50.0, 30.0], 1.5), 105.0);
    // Same lines reordered: gap now derives from the 30px first line.
    assert_eq!(block_height(&[30.0, 50.0], 1.5), 95.0);
    // Three lines: gap = floor(2 * 50 * 0.5) = 50.
    assert_eq!(block_height(&[50.0, 50.0, 50.0], 1.5), 200.0);
}

#[test]
fn unit_spacing_adds_no_gap() {
    assert_eq!(block_height(&[40.0, 40.0], 1.0), 80.0);
}
