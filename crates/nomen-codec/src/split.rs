//! Escape-aware splitting and joining of masked strings
//!
//! Components in a joined string stay masked; only unescaped delimiter
//! occurrences separate them. [`split_masked`] and [`join_masked`] are exact
//! inverses for any component sequence produced by [`crate::mask`], so the
//! data-string form can always be parsed back.

use crate::delimiter::{Delimiter, ESCAPE_CHARACTER};

/// Split a delimited, masked string into its masked components
///
/// Walks `text` with an escaping flag: an escaped character is carried into
/// the current component together with its escape character, an unescaped
/// delimiter closes the component. The final component is always emitted,
/// even when empty, so a string of N components contains N-1 delimiters.
///
/// The empty input is the one special case: it yields zero components, not
/// one empty component. There is no delimiter count that distinguishes `[]`
/// from `[""]` in the joined form, and the empty name is the one callers
/// mean by `""`.
#[must_use]
pub fn split_masked(text: &str, delimiter: Delimiter) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let d = delimiter.get();
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for ch in text.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == ESCAPE_CHARACTER {
            // Keep the escape sequence intact; components stay masked.
            current.push(ESCAPE_CHARACTER);
            escaped = true;
        } else if ch == d {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    parts.push(current);

    parts
}

/// Join masked components with the delimiter between them
///
/// Components are concatenated as-is; masking them against `delimiter`
/// beforehand is the caller's responsibility.
#[must_use]
pub fn join_masked(components: &[String], delimiter: Delimiter) -> String {
    let mut sep = [0u8; 4];
    components.join(delimiter.get().encode_utf8(&mut sep))
}
