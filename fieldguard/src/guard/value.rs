//! Leaf slots: string-like values the engine reads and overwrites in place.

use std::borrow::Cow;

/// A string-like field the sanitize and validate passes can read and rewrite.
///
/// `get` returns `None` when the field holds no value at all. Both passes treat
/// an absent value as the empty string; `sanitize` additionally counts the
/// substitution as a change.
///
/// ## Foreign string-like types
///
/// Rust's orphan rules prevent implementing `GuardedValue` for a string type
/// from another crate. Wrap it in a local newtype and implement the trait on
/// the wrapper.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `GuardedValue`",
    label = "this type cannot carry a tag",
    note = "tags like `#[guard(TaxId)]` are for string fields (String, Option<String>, ...)",
    note = "if `{Self}` is a struct that derives `Guarded`, use bare `#[guard]` to walk into it"
)]
pub trait GuardedValue {
    /// Returns the current value, or `None` if the field is absent.
    fn get(&self) -> Option<&str>;
    /// Overwrites the field with `value`.
    fn set(&mut self, value: String);
}

impl GuardedValue for String {
    fn get(&self) -> Option<&str> {
        Some(self.as_str())
    }

    fn set(&mut self, value: String) {
        *self = value;
    }
}

impl GuardedValue for Option<String> {
    fn get(&self) -> Option<&str> {
        self.as_deref()
    }

    fn set(&mut self, value: String) {
        *self = Some(value);
    }
}

impl GuardedValue for Cow<'_, str> {
    fn get(&self) -> Option<&str> {
        Some(self.as_ref())
    }

    fn set(&mut self, value: String) {
        *self = Cow::Owned(value);
    }
}

impl<T> GuardedValue for Box<T>
where
    T: GuardedValue + ?Sized,
{
    fn get(&self) -> Option<&str> {
        (**self).get()
    }

    fn set(&mut self, value: String) {
        (**self).set(value);
    }
}
