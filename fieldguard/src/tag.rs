//! The closed set of semantic tags a guarded field may carry.
//!
//! A field carries exactly one tag. The tag alone decides which sanitize filter
//! and which validation rule apply to the field's value.

use std::{fmt, str::FromStr};

/// Semantic tag attached to a string-valued field.
///
/// ```rust
/// use fieldguard::Tag;
///
/// assert_eq!("PAN".parse::<Tag>(), Ok(Tag::PaymentCard));
/// assert_eq!(Tag::Phone.to_string(), "Phone");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tag {
    /// A 9-digit tax or social security identifier, optionally prefixed with `P`.
    TaxId,
    /// A primary account number, digits only, Luhn-checked.
    PaymentCard,
    /// A US phone number, normalized to 11 digits with country code `1`.
    Phone,
    /// A signed floating-point number; scientific notation is permitted.
    Numeric,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 4] = [Tag::TaxId, Tag::PaymentCard, Tag::Phone, Tag::Numeric];

    /// The canonical name, as accepted by `#[guard(...)]`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::TaxId => "TaxId",
            Tag::PaymentCard => "PaymentCard",
            Tag::Phone => "Phone",
            Tag::Numeric => "Numeric",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tag name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag `{0}`; expected one of TaxId, PaymentCard, Phone, Numeric")]
pub struct ParseTagError(String);

impl FromStr for Tag {
    type Err = ParseTagError;

    /// Accepts canonical names and the short forms `TIN`, `PAN`, `Tel` and
    /// `USNUM`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let tag = [
            ("taxid", Tag::TaxId),
            ("tin", Tag::TaxId),
            ("paymentcard", Tag::PaymentCard),
            ("pan", Tag::PaymentCard),
            ("phone", Tag::Phone),
            ("tel", Tag::Phone),
            ("numeric", Tag::Numeric),
            ("usnum", Tag::Numeric),
        ]
        .into_iter()
        .find_map(|(alias, tag)| name.eq_ignore_ascii_case(alias).then_some(tag));

        tag.ok_or_else(|| ParseTagError(s.to_string()))
    }
}
