//! Masked hierarchical names
//!
//! A name is an ordered sequence of string components joined by a single
//! delimiter character. Components may contain the delimiter or the escape
//! character in masked (escaped) form, so every name has two renderings:
//!
//! - a human-readable string ([`Name::as_string`]) joined by an arbitrary
//!   delimiter, not necessarily parseable back;
//! - a data string ([`Name::as_data_string`]) masked against one fixed
//!   default delimiter, always exactly re-parseable.
//!
//! The behavior is implemented once in [`Name`] against the
//! [`ComponentStore`] capability; [`ArrayName`] and [`StringName`] plug in
//! the two storage strategies. Every operation is gated by contract checks
//! from [`nomen_contract`], with the three violation kinds kept distinct.
//!
//! # Example
//!
//! ```rust
//! use nomen_core::{ArrayName, StringName};
//!
//! let array = ArrayName::from_components(vec!["a\\.b".into(), "c".into()], '.').unwrap();
//! assert_eq!(array.as_string().unwrap(), "a.b.c");
//! assert_eq!(array.as_data_string().unwrap(), "a\\.b.c");
//!
//! // The same value, string-backed
//! let string = StringName::from_delimited("a\\.b.c", '.').unwrap();
//! assert!(array.is_equal(&string));
//! ```

mod name;
mod store;

// Re-exports
pub use name::{ArrayName, Name, StringName};
pub use store::{ArrayStore, ComponentStore, StringStore};

pub use nomen_codec::{Delimiter, DEFAULT_DELIMITER, ESCAPE_CHARACTER};
pub use nomen_contract::{ContractResult, ContractViolation};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for name operations
    pub use crate::{
        ArrayName, ComponentStore, ContractResult, ContractViolation, Delimiter, Name, StringName,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
