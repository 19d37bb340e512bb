//! Field discovery and the two passes over a record.
//!
//! - **`value`**: leaf slots that can carry a tag (`GuardedValue`)
//! - **`record`**: discovery of tagged fields (`GuardedRecord`, `FieldSet`)
//! - **`sanitize`**: per-tag character filters, applied in place
//! - **`validate`**: per-tag well-formedness checks, including Luhn
//!
//! The tag set lives in `crate::tag` and the report types in `crate::report`.

mod record;
mod sanitize;
mod validate;
mod value;

pub use record::{discover, FieldRef, FieldSet, GuardedRecord};
pub use sanitize::{filter, sanitize, sanitize_value, Sanitized};
pub use validate::{luhn, parse_numeric, validate, validate_value, Verdict};
pub use value::GuardedValue;
