//! Per-field outcomes of a sanitize or validate pass.
//!
//! Both passes produce a [`FieldResults`], but `valid` means different things:
//!
//! | Pass | `valid == true` means |
//! |------|-----------------------|
//! | [`Pass::Sanitize`] | the value needed no cleanup |
//! | [`Pass::Validate`] | the value is well-formed for its tag |
//!
//! A report records which pass produced it so callers can tell the two apart.

use std::{fmt, slice};

/// The pass that produced a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pass {
    Sanitize,
    Validate,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pass::Sanitize => "sanitize",
            Pass::Validate => "validate",
        })
    }
}

/// Outcome for one tagged field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldResultItem {
    pub field_name: String,
    /// The value was zero-length.
    pub empty: bool,
    /// See the module docs for the per-pass meaning.
    pub valid: bool,
}

impl FieldResultItem {
    /// Creates the outcome for `field_name`.
    pub fn new(field_name: impl Into<String>, empty: bool, valid: bool) -> Self {
        Self {
            field_name: field_name.into(),
            empty,
            valid,
        }
    }

    /// Reads `valid` under its sanitize-pass meaning: no rewrite was needed.
    pub fn unchanged(&self) -> bool {
        self.valid
    }
}

/// Ordered per-field outcomes of a single pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldResults {
    pass: Pass,
    items: Vec<FieldResultItem>,
}

impl FieldResults {
    /// Creates an empty report for `pass`.
    pub fn new(pass: Pass) -> Self {
        Self {
            pass,
            items: Vec::new(),
        }
    }

    /// The pass that produced this report.
    pub fn pass(&self) -> Pass {
        self.pass
    }

    /// Appends the outcome for one field.
    pub fn push(&mut self, item: FieldResultItem) {
        self.items.push(item);
    }

    /// Items in field discovery order.
    pub fn items(&self) -> &[FieldResultItem] {
        &self.items
    }

    /// Number of reported fields.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the record exposed no tagged fields.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in report order.
    pub fn iter(&self) -> slice::Iter<'_, FieldResultItem> {
        self.items.iter()
    }

    /// True when the report is empty or every item is valid.
    pub fn all_valid(&self) -> bool {
        self.items.iter().all(|item| item.valid)
    }

    /// Items that are not valid, in report order.
    pub fn invalid(&self) -> impl Iterator<Item = &FieldResultItem> {
        self.items.iter().filter(|item| !item.valid)
    }

    /// Looks up the first item for `field_name`.
    pub fn get(&self, field_name: &str) -> Option<&FieldResultItem> {
        self.items.iter().find(|item| item.field_name == field_name)
    }

    /// Converts the report into an error when any item is invalid.
    ///
    /// ```rust
    /// use fieldguard::{FieldResultItem, FieldResults, Pass};
    ///
    /// let mut report = FieldResults::new(Pass::Validate);
    /// report.push(FieldResultItem::new("card", false, false));
    /// let err = report.into_result().unwrap_err();
    /// assert_eq!(err.fields(), ["card"]);
    /// ```
    pub fn into_result(self) -> Result<Self, InvalidFields> {
        if self.all_valid() {
            return Ok(self);
        }
        let fields = self
            .invalid()
            .map(|item| item.field_name.clone())
            .collect();
        Err(InvalidFields {
            pass: self.pass,
            fields,
        })
    }
}

impl fmt::Display for FieldResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AllValid: {}", self.all_valid())?;
        for item in &self.items {
            writeln!(
                f,
                "- {}: Empty={}, Valid={}",
                item.field_name, item.empty, item.valid
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldResults {
    type Item = &'a FieldResultItem;
    type IntoIter = slice::Iter<'a, FieldResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for FieldResults {
    type Item = FieldResultItem;
    type IntoIter = std::vec::IntoIter<FieldResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldResults {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FieldResults", 3)?;
        state.serialize_field("pass", &self.pass)?;
        state.serialize_field("all_valid", &self.all_valid())?;
        state.serialize_field("items", &self.items)?;
        state.end()
    }
}

/// One or more fields failed a pass.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{pass} reported {} invalid field(s): {}", .fields.len(), .fields.join(", "))]
pub struct InvalidFields {
    pass: Pass,
    fields: Vec<String>,
}

impl InvalidFields {
    /// The pass whose report failed.
    pub fn pass(&self) -> Pass {
        self.pass
    }

    /// Names of the failing fields, in report order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}
