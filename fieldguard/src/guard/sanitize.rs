//! Sanitize pass: per-tag character filters applied in place.
//!
//! Filters are pure keep-lists over ASCII characters. They never inspect the
//! meaning of a value; that is the job of the validate pass.

use log::debug;

use super::record::{discover, GuardedRecord};
use crate::{
    report::{FieldResultItem, FieldResults, Pass},
    tag::Tag,
};

/// Outcome of sanitizing a single value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sanitized {
    /// The filtered value that gets written back to the field.
    pub value: String,
    /// Whether filtering (or the absent-to-empty substitution) changed anything.
    pub changed: bool,
}

const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

const fn is_numeric_char(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E')
}

const fn is_tax_id_char(c: char) -> bool {
    matches!(c, '0'..='9' | '-')
}

fn keep(value: &str, predicate: fn(char) -> bool) -> String {
    value.chars().filter(|&c| predicate(c)).collect()
}

/// Applies `tag`'s keep-list to `value`.
///
/// For [`Tag::TaxId`] a single leading `P`/`p` marker survives filtering and is
/// emitted as an uppercase `P`.
pub fn filter(tag: Tag, value: &str) -> String {
    match tag {
        Tag::PaymentCard | Tag::Phone => keep(value, is_digit),
        Tag::Numeric => keep(value, is_numeric_char),
        Tag::TaxId => match value.strip_prefix(['P', 'p']) {
            Some(rest) => {
                let mut filtered = String::with_capacity(rest.len() + 1);
                filtered.push('P');
                filtered.extend(rest.chars().filter(|&c| is_tax_id_char(c)));
                filtered
            }
            None => keep(value, is_tax_id_char),
        },
    }
}

/// Sanitizes a loose value under `tag`.
///
/// `None` stands for an absent field: it becomes `""` and always counts as
/// changed.
pub fn sanitize_value(tag: Tag, raw: Option<&str>) -> Sanitized {
    let source = raw.unwrap_or_default();
    let value = filter(tag, source);
    let changed = raw.is_none() || value != source;
    Sanitized { value, changed }
}

/// Cleans every tagged field of `record` in place.
///
/// Each field is rewritten unconditionally with its filtered value. In the
/// returned report `valid` means "needed no cleanup": a field that had to be
/// rewritten, or that was absent, reports `valid = false`.
pub fn sanitize<R>(record: &mut R) -> FieldResults
where
    R: GuardedRecord + ?Sized,
{
    let mut results = FieldResults::new(Pass::Sanitize);

    for mut field in discover(record) {
        let tag = field.tag();
        let Sanitized { value, changed } = sanitize_value(tag, field.get());
        let empty = value.is_empty();
        field.set(value);

        debug!(
            "sanitize: field={} tag={tag} changed={changed} empty={empty}",
            field.name()
        );
        results.push(FieldResultItem::new(field.name(), empty, !changed));
    }

    debug!(
        "sanitize: {} field(s), all_valid={}",
        results.len(),
        results.all_valid()
    );
    results
}
