//! Character-level codec for masked hierarchical names
//!
//! A name component may contain the delimiter or the escape character only in
//! *masked* form, i.e. preceded by the escape character. This crate provides
//! the primitives that keep the masked and raw worlds in sync:
//!
//! - [`Delimiter`]: a validated single-character delimiter
//! - [`mask`] / [`unmask`]: escape and resolve special characters
//! - [`split_masked`] / [`join_masked`]: delimiter-aware splitting that
//!   respects escape sequences
//!
//! # Example
//!
//! ```rust
//! use nomen_codec::{mask, split_masked, unmask, Delimiter};
//!
//! let dot = Delimiter::new('.').unwrap();
//!
//! let masked = mask("a.b", dot);
//! assert_eq!(masked, "a\\.b");
//! assert_eq!(unmask(&masked, dot), "a.b");
//!
//! // The masked dot does not split; the unmasked one does.
//! assert_eq!(split_masked("a\\.b.c", dot), vec!["a\\.b", "c"]);
//! ```

mod delimiter;
mod mask;
mod split;

pub use delimiter::{Delimiter, DEFAULT_DELIMITER, ESCAPE_CHARACTER};
pub use mask::{mask, unmask};
pub use split::{join_masked, split_masked};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
