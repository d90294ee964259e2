//! Masking and unmasking of special characters
//!
//! A raw string becomes masked by prefixing every escape character and every
//! delimiter occurrence with the escape character. Unmasking reverses this.
//! The two operations are exact inverses for any raw input and any valid
//! delimiter; escape-count parity decides whether a special character is
//! literal or structural.

use crate::delimiter::{Delimiter, ESCAPE_CHARACTER};

/// Mask `raw` relative to `delimiter`
///
/// Every escape character and every literal delimiter occurrence gets an
/// escape character prepended, escape characters first. One walk performs
/// both escapings; an inserted escape is never itself re-escaped.
#[must_use]
pub fn mask(raw: &str, delimiter: Delimiter) -> String {
    let d = delimiter.get();
    let mut out = String::with_capacity(raw.len() * 2);

    for ch in raw.chars() {
        if ch == ESCAPE_CHARACTER || ch == d {
            out.push(ESCAPE_CHARACTER);
        }
        out.push(ch);
    }

    out
}

/// Unmask `masked` relative to `delimiter`
///
/// Scans left to right. An escape character followed by an escape character
/// or the delimiter emits that character literally and consumes both. A
/// dangling escape, one followed by any other character or ending the input,
/// is emitted as a literal escape character. `mask` never produces such a
/// sequence, but hand-written data strings may; they are accepted rather
/// than rejected.
#[must_use]
pub fn unmask(masked: &str, delimiter: Delimiter) -> String {
    let d = delimiter.get();
    let mut out = String::with_capacity(masked.len());
    let mut chars = masked.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            match chars.peek() {
                Some(&next) if next == ESCAPE_CHARACTER || next == d => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push(ESCAPE_CHARACTER),
            }
        } else {
            out.push(ch);
        }
    }

    out
}
