//! Bounded excerpts of long text for prompts and error messages

use std::borrow::Cow;

/// Appended to every excerpt that lost text.
pub const EXCERPT_MARKER: &str = " [truncated]";

/// Cut `text` to at most `max_bytes` bytes, marking the cut.
///
/// The cut backs up to a word boundary when one exists in the kept half, and
/// never splits a character. Text that already fits comes back borrowed and
/// unmarked. The marker is not counted against `max_bytes`.
pub fn excerpt(text: &str, max_bytes: usize) -> Cow<'_, str> {
    if text.len() <= max_bytes {
        return Cow::Borrowed(text);
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let head = &text[..end];
    let head = match head.rfind(char::is_whitespace) {
        Some(space) if space >= end / 2 => &head[..space],
        _ => head,
    };

    let mut cut = String::with_capacity(head.len() + EXCERPT_MARKER.len());
    cut.push_str(head.trim_end());
    cut.push_str(EXCERPT_MARKER);
    Cow::Owned(cut)
}
