// src/core/html.rs

use crate::config::consts::DIV_CLOSE;

/// Find `open_marker` at or after `from` and read that div's inner text:
/// everything between the marker's closing `>` and the next `</div>`, trimmed.
/// Returns (text, marker offset, offset just past the close tag).
pub fn next_div_text(s: &str, open_marker: &str, from: usize) -> Option<(String, usize, usize)> {
    let at = s.get(from..)?.find(open_marker)? + from;
    let text_start = s[at..].find('>')? + at + 1;
    let text_end = s[text_start..].find(DIV_CLOSE)? + text_start;
    Some((
        s[text_start..text_end].trim().to_string(),
        at,
        text_end + DIV_CLOSE.len(),
    ))
}

/// Text after the last `>`, or the whole string if there is none.
/// Tolerates one level of nested markup in front of a value.
pub fn text_after_last_gt(s: &str) -> &str {
    match s.rfind('>') {
        Some(i) => &s[i + 1..],
        None => s,
    }
}
