//! Greedy character-count line wrapping.
//!
//! Widths are counted in `char`s, not pixels, so the result does not depend
//! on the font size the fitter eventually picks.

/// Wraps `text` into lines of at most `max_line_chars` characters joined by
/// `'\n'`. Breaks only at whitespace; a word longer than the limit is kept
/// whole on its own line. Whitespace runs collapse to a single space.
pub fn wrap(text: &str, max_line_chars: usize) -> String {
    wrap_lines(text, max_line_chars).join("\n")
}

pub fn wrap_lines(text: &str, max_line_chars: usize) -> Vec<String> {
    let limit = max_line_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= limit {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}
