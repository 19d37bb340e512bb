//! Field discovery: records that expose their tagged string fields.
//!
//! A record lists its tagged fields by pushing them into a [`FieldSet`]. The
//! `Guarded` derive generates this from `#[guard(...)]` attributes, and the
//! trait can be implemented by hand for types that cannot derive it.
//!
//! | Annotation | Generated Code | Behavior |
//! |------------|----------------|----------|
//! | None | nothing | Field is ignored by both passes |
//! | `#[guard]` | `FieldSet::nested` | Walk into a nested record |
//! | `#[guard(Tag)]` | `FieldSet::push` | Field is sanitized and validated under `Tag` |

use std::fmt;

use super::value::GuardedValue;
use crate::tag::Tag;

/// One discovered field: its reporting name, its tag, and write access to it.
pub struct FieldRef<'a> {
    name: String,
    tag: Tag,
    value: &'a mut dyn GuardedValue,
}

impl FieldRef<'_> {
    /// Reporting name. Nested fields are joined with `.` (`billing.card`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag that selects the sanitize filter and validate rule.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Current value, or `None` if the field is absent.
    pub fn get(&self) -> Option<&str> {
        self.value.get()
    }

    /// Overwrites the underlying field.
    pub fn set(&mut self, value: String) {
        self.value.set(value);
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of the fields a record exposes.
///
/// Fields keep the order in which they were pushed, which for derived records
/// is declaration order.
#[derive(Default)]
pub struct FieldSet<'a> {
    prefix: String,
    fields: Vec<FieldRef<'a>>,
}

impl<'a> FieldSet<'a> {
    /// Creates an empty set with no name prefix.
    ///
    /// ```rust
    /// use fieldguard::{FieldSet, Tag};
    ///
    /// let mut phone = String::from("4155552671");
    /// let mut fields = FieldSet::new();
    /// assert!(fields.is_empty());
    ///
    /// fields.push("phone", Tag::Phone, &mut phone);
    /// assert_eq!(fields.len(), 1);
    /// assert_eq!(fields.into_vec()[0].tag(), Tag::Phone);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tagged leaf field.
    pub fn push<V>(&mut self, name: &str, tag: Tag, value: &'a mut V)
    where
        V: GuardedValue,
    {
        self.fields.push(FieldRef {
            name: format!("{}{name}", self.prefix),
            tag,
            value,
        });
    }

    /// Walks into a nested record, prefixing its field names with `name.`.
    pub fn nested<R>(&mut self, name: &str, record: &'a mut R)
    where
        R: GuardedRecord + ?Sized,
    {
        let saved = self.prefix.len();
        self.prefix.push_str(name);
        self.prefix.push('.');
        record.collect_fields(self);
        self.prefix.truncate(saved);
    }

    /// Number of fields registered so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field has been registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the set, returning its fields in push order.
    pub fn into_vec(self) -> Vec<FieldRef<'a>> {
        self.fields
    }
}

impl fmt::Debug for FieldSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

/// A record whose tagged string fields can be discovered.
///
/// Usually derived with `#[derive(Guarded)]`. A hand-written implementation
/// registers each field explicitly:
///
/// ```rust
/// use fieldguard::{FieldSet, GuardedRecord, Tag};
///
/// struct Payment {
///     card: String,
///     note: String,
/// }
///
/// impl GuardedRecord for Payment {
///     fn collect_fields<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
///         fields.push("card", Tag::PaymentCard, &mut self.card);
///     }
/// }
///
/// let mut payment = Payment { card: "4111 1111 1111 1111".into(), note: "n/a".into() };
/// let report = fieldguard::sanitize(&mut payment);
/// assert_eq!(payment.card, "4111111111111111");
/// assert_eq!(report.len(), 1);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GuardedRecord`",
    label = "this type cannot be walked for tagged fields",
    note = "use `#[derive(Guarded)]` on the type definition",
    note = "or use `#[guard(Tag)]` if this is a string field"
)]
pub trait GuardedRecord {
    /// Pushes every tagged field of `self` into `fields`, in declaration order.
    fn collect_fields<'a>(&'a mut self, fields: &mut FieldSet<'a>);
}

/// An absent record exposes no fields.
impl<R> GuardedRecord for Option<R>
where
    R: GuardedRecord,
{
    fn collect_fields<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
        if let Some(record) = self {
            record.collect_fields(fields);
        }
    }
}

impl<R> GuardedRecord for Box<R>
where
    R: GuardedRecord + ?Sized,
{
    fn collect_fields<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
        (**self).collect_fields(fields);
    }
}

impl<R> GuardedRecord for &mut R
where
    R: GuardedRecord + ?Sized,
{
    fn collect_fields<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
        (**self).collect_fields(fields);
    }
}

/// Elements are named by index (`0.card`, `1.card`, ...).
impl<R> GuardedRecord for Vec<R>
where
    R: GuardedRecord,
{
    fn collect_fields<'a>(&'a mut self, fields: &mut FieldSet<'a>) {
        for (index, record) in self.iter_mut().enumerate() {
            fields.nested(&index.to_string(), record);
        }
    }
}

/// Returns the tagged fields of `record` in declaration order.
pub fn discover<R>(record: &mut R) -> Vec<FieldRef<'_>>
where
    R: GuardedRecord + ?Sized,
{
    let mut fields = FieldSet::new();
    record.collect_fields(&mut fields);
    fields.into_vec()
}
