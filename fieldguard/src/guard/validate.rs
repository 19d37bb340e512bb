//! Validate pass: per-tag well-formedness checks.
//!
//! Checks read the current value and never rewrite it, with one exception:
//! a 10-digit [`Tag::Phone`] value is normalized to 11 digits by prefixing the
//! US country code `1`.

use log::debug;

use super::record::{discover, GuardedRecord};
use crate::{
    report::{FieldResultItem, FieldResults, Pass},
    tag::Tag,
};

const CARD_MIN_DIGITS: usize = 13;
const CARD_MAX_DIGITS: usize = 19;
const TAX_ID_DIGITS: usize = 9;
const PHONE_DIGITS: usize = 10;
const PHONE_COUNTRY_CODE: char = '1';

/// Outcome of validating a single value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    /// Replacement value to write back, if the check normalizes the field.
    pub normalized: Option<String>,
}

impl Verdict {
    const fn of(valid: bool) -> Self {
        Self {
            valid,
            normalized: None,
        }
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Mod-10 checksum over a string of ASCII digits.
///
/// The rightmost digit is not doubled; doubling alternates leftwards. Empty
/// input and input containing anything other than `0-9` never pass.
pub fn luhn(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0;
    let mut alternate = false;
    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}

const fn is_invariant_white(b: u8) -> bool {
    matches!(b, b'\t'..=b'\r' | b' ')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Invariant-culture spellings of the non-finite values.
const INFINITY_SYMBOL: &str = "Infinity";
const NAN_SYMBOL: &str = "NaN";

fn parse_symbol(trimmed: &str) -> Option<f64> {
    if trimmed.eq_ignore_ascii_case(NAN_SYMBOL) {
        return Some(f64::NAN);
    }
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    unsigned
        .eq_ignore_ascii_case(INFINITY_SYMBOL)
        .then_some(if negative { f64::NEG_INFINITY } else { f64::INFINITY })
}

/// Parses `value` as a culture-invariant floating-point number.
///
/// Accepted: surrounding ASCII whitespace, a leading `+`/`-`, digits with an
/// optional decimal point (a digit is required on at least one side of it), and
/// an optional `e`/`E` exponent with its own sign. The symbols `Infinity`
/// (optionally signed) and `NaN` are accepted in any ASCII case. Thousands
/// separators and abbreviations such as `inf` are rejected.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim_matches(|c: char| u8::try_from(c).is_ok_and(is_invariant_white));
    if let Some(symbol) = parse_symbol(trimmed) {
        return Some(symbol);
    }
    let bytes = trimmed.as_bytes();

    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = count_digits(&bytes[pos..]);
    pos += integer;

    let mut fraction = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        fraction = count_digits(&bytes[pos..]);
        pos += fraction;
    }
    if integer + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent = count_digits(&bytes[pos..]);
        if exponent == 0 {
            return None;
        }
        pos += exponent;
    }

    if pos != bytes.len() {
        return None;
    }
    trimmed.parse().ok()
}

/// Validates a loose value under `tag`. `None` is treated as `""`.
pub fn validate_value(tag: Tag, raw: Option<&str>) -> Verdict {
    let value = raw.unwrap_or_default();
    match tag {
        Tag::PaymentCard => {
            let digits = digits(value);
            Verdict::of((CARD_MIN_DIGITS..=CARD_MAX_DIGITS).contains(&digits.len()) && luhn(&digits))
        }
        Tag::TaxId => {
            let unmarked = value.strip_prefix(['P', 'p']).unwrap_or(value);
            Verdict::of(unmarked.chars().filter(char::is_ascii_digit).count() == TAX_ID_DIGITS)
        }
        Tag::Phone => {
            let digits = digits(value);
            match digits.len() {
                len if len == PHONE_DIGITS + 1 && digits.starts_with(PHONE_COUNTRY_CODE) => {
                    Verdict::of(true)
                }
                PHONE_DIGITS => Verdict {
                    valid: true,
                    normalized: Some(format!("{PHONE_COUNTRY_CODE}{digits}")),
                },
                _ => Verdict::of(false),
            }
        }
        Tag::Numeric => Verdict::of(parse_numeric(value).is_some()),
    }
}

/// Checks every tagged field of `record`.
///
/// `empty` is computed from the value as read, before any normalization.
/// A 10-digit phone number is rewritten in place to `1` followed by its digits
/// and reported valid.
pub fn validate<R>(record: &mut R) -> FieldResults
where
    R: GuardedRecord + ?Sized,
{
    let mut results = FieldResults::new(Pass::Validate);

    for mut field in discover(record) {
        let tag = field.tag();
        let raw = field.get();
        let empty = raw.map_or(true, str::is_empty);
        let Verdict { valid, normalized } = validate_value(tag, raw);

        let rewritten = normalized.is_some();
        if let Some(value) = normalized {
            field.set(value);
        }

        debug!(
            "validate: field={} tag={tag} valid={valid} empty={empty} rewritten={rewritten}",
            field.name()
        );
        results.push(FieldResultItem::new(field.name(), empty, valid));
    }

    debug!(
        "validate: {} field(s), all_valid={}",
        results.len(),
        results.all_valid()
    );
    results
}
