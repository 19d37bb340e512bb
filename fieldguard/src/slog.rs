//! Adapters for emitting reports through `slog`.
//!
//! Reports are logged as structured JSON via `slog`'s nested-value support, so
//! a drain that understands nested values sees `pass`, `all_valid` and `items`
//! as separate keys.
//!
//! Only field names and outcomes are emitted. Reports never hold field values,
//! so nothing logged here can leak the data being guarded.
//!
//! This module does not configure `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    report::{FieldResultItem, FieldResults},
    tag::Tag,
};

fn serialize_json<T>(
    value: &T,
    record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult
where
    T: Serialize,
{
    // Conversion failures are logged as a placeholder instead of failing the record.
    let json = serde_json::to_value(value)
        .unwrap_or_else(|_| JsonValue::String("Failed to serialize report".to_string()));
    SlogValue::serialize(&slog::Serde(json), record, key, serializer)
}

impl SlogValue for FieldResults {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serialize_json(self, record, key, serializer)
    }
}

impl SlogValue for FieldResultItem {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serialize_json(self, record, key, serializer)
    }
}

impl SlogValue for Tag {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.as_str())
    }
}
