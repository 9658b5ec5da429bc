//! Literal "text between two markers" extraction.
//!
//! Markers are plain text. Nothing in a marker is ever interpreted as a
//! pattern, so labels such as `DCI #` or `(` are safe to use as-is.

/// Whether an extracted span may cross line breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// The span must stay within one line
    SingleLine,
    /// The span may contain newlines (card lists)
    MultiLine,
}

/// Return the trimmed text strictly between a `start` and the first `end`
/// that follows it.
///
/// [`Span::MultiLine`] uses the first `start`. [`Span::SingleLine`] uses the
/// first `start` whose following `end` is on the same line, so a bare label
/// line before the filled-in one is skipped. Returns `None` when no such pair
/// exists.
///
/// # Example
/// ```
/// use decksheet::parser::{extract_between, Span};
/// let text = "Last Name:Smith First Name:Jo DCI #123";
/// assert_eq!(extract_between(text, "Last Name:", "First Name:", Span::SingleLine), Some("Smith"));
/// assert_eq!(extract_between(text, "Deck Name:", "\n", Span::SingleLine), None);
/// ```
pub fn extract_between<'a>(text: &'a str, start: &str, end: &str, span: Span) -> Option<&'a str> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find(start) {
        let at = offset + found;
        let rest = &text[at + start.len()..];
        // No `end` after this `start` means none after any later one either
        let to = rest.find(end)?;
        let inner = &rest[..to];

        if span == Span::MultiLine || !inner.contains('\n') {
            return Some(inner.trim());
        }

        offset = at + text[at..].chars().next().map_or(1, char::len_utf8);
    }
    None
}
