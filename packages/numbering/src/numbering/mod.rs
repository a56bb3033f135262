//! Dotted section numbering: parsing labels and validating the hierarchy.
//!
//! Both halves are pure functions over in-memory values. Validation is
//! scoped to a single document; nothing is ever compared across documents.

mod key;
mod parser;
mod validator;

pub use key::NumberingKey;
pub use parser::{parse, parse_all, ParseErrorKind, ParseFailure};
pub use validator::{validate, StructuralError};
