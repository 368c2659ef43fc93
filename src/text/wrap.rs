use crate::foundation::error::SlateResult;

/// Greedy word wrap against a pixel-width budget.
///
/// Words are accumulated into the current line while the joined candidate
/// still measures within `max_width_px`; otherwise the line is flushed and
/// the word starts a new one. A word is always accepted when the current
/// line is empty, so an over-budget word lands alone on its own line rather
/// than being split or dropped.
///
/// Guarantees: no output line is empty, and joining the lines with single
/// spaces reconstructs the input word sequence exactly. Whitespace-only
/// input yields an empty sequence.
pub fn wrap_words<F>(text: &str, max_width_px: f64, mut measure: F) -> SlateResult<Vec<String>>
where
    F: FnMut(&str) -> SlateResult<f64>,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if current.is_empty() || measure(&candidate)? <= max_width_px {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
