use super::*;

fn char_width(s: &str) -> SlateResult<f64> {
    Ok(s.chars().count() as f64 * 10.0)
}

#[test]
fn rejoined_lines_reconstruct_word_sequence() {
    let text = "the quick brown fox jumps over the lazy dog";
    let lines = wrap_words(text, 150.0, char_width).unwrap();

    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), text);
}

#[test]
fn no_output_line_is_empty() {
    let lines = wrap_words("a b c d e f g h", 10.0, char_width).unwrap();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| !l.is_empty()));
}

#[test]
fn short_text_stays_on_one_line() {
    let lines = wrap_words("hello world", 200.0, char_width).unwrap();
    assert_eq!(lines, vec!["hello world".to_string()]);
}

#[test]
fn oversized_word_gets_its_own_line_unsplit() {
    let lines = wrap_words("a extraordinarily b", 50.0, char_width).unwrap();
    assert_eq!(
        lines,
        vec![
            "a".to_string(),
            "extraordinarily".to_string(),
            "b".to_string()
        ]
    );
}

#[test]
fn every_line_fits_unless_single_word() {
    let lines = wrap_words("one two three four five six seven", 120.0, char_width).unwrap();
    for line in &lines {
        let fits = char_width(line).unwrap() <= 120.0;
        assert!(fits || !line.contains(' '), "over-budget line '{line}' has multiple words");
    }
}

#[test]
fn whitespace_only_input_yields_no_lines() {
    assert!(wrap_words("", 100.0, char_width).unwrap().is_empty());
    assert!(wrap_words("   \t\n ", 100.0, char_width).unwrap().is_empty());
}

#[test]
fn interior_whitespace_runs_collapse_to_single_spaces() {
    let lines = wrap_words("a \t b\nc", 500.0, char_width).unwrap();
    assert_eq!(lines, vec!["a b c".to_string()]);
}

#[test]
fn measure_errors_propagate() {
    let err = wrap_words("a b", 10.0, |_| {
        Err(crate::foundation::error::SlateError::layout("boom"))
    });
    assert!(err.is_err());
}
