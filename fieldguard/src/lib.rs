//! Tag-driven sanitization and validation of sensitive string fields.
//!
//! Fields on a record carry one of four semantic tags ([`Tag`]). Two
//! independent passes run over the tagged fields:
//!
//! - [`sanitize`] strips characters the tag does not allow, rewriting each
//!   field in place. Its report marks a field `valid` when no rewrite was
//!   needed.
//! - [`validate`] checks each value is well-formed for its tag (Luhn for
//!   payment cards, digit counts for tax ids and phones, a float grammar for
//!   numerics). Its report marks a field `valid` when the check passes. A
//!   10-digit phone number is normalized in place to carry the `1` country code.
//!
//! ```rust
//! use fieldguard::{sanitize, validate, Guarded};
//!
//! #[derive(Guarded)]
//! struct Applicant {
//!     #[guard(TaxId)]
//!     ssn: String,
//!     #[guard(Phone)]
//!     phone: Option<String>,
//!     nickname: String,
//! }
//!
//! let mut applicant = Applicant {
//!     ssn: " 123-45-6789 ".into(),
//!     phone: Some("(415) 555-2671".into()),
//!     nickname: "Al".into(),
//! };
//!
//! let cleaned = sanitize(&mut applicant);
//! assert!(!cleaned.all_valid()); // both fields needed cleanup
//! assert_eq!(applicant.ssn, "123-45-6789");
//!
//! let checked = validate(&mut applicant);
//! assert!(checked.all_valid());
//! assert_eq!(applicant.phone.as_deref(), Some("14155552671"));
//! ```
//!
//! What this crate does:
//! - defines the tag set and the per-tag sanitize and validate rules
//! - discovers tagged fields through [`GuardedRecord`] (derived or hand-written)
//! - reports per-field outcomes as [`FieldResults`]
//!
//! What it does not do:
//! - perform I/O or install a logger
//! - validate formats outside the four US-centric tags
//!
//! The `Guarded` derive macro lives in `fieldguard-derive` and is re-exported
//! when the `derive` feature is enabled.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

#[cfg(feature = "derive")]
pub use fieldguard_derive::Guarded;

#[allow(unused_extern_crates)]
extern crate self as fieldguard;

// Module declarations
mod guard;
mod report;
#[cfg(feature = "slog")]
pub mod slog;
mod tag;

// Re-exports
pub use guard::{
    discover, filter, luhn, parse_numeric, sanitize, sanitize_value, validate, validate_value,
    FieldRef, FieldSet, GuardedRecord, GuardedValue, Sanitized, Verdict,
};
pub use report::{FieldResultItem, FieldResults, InvalidFields, Pass};
pub use tag::{ParseTagError, Tag};
