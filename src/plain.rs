use std::borrow::Cow;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Result;
use crate::formatter::{float_literal, format_value};
use crate::model::{enum_display, Value};

/// Deep-serializes a value into a plain-data tree: a composition of only
/// primitives, text, lists, and mappings, directly encodable as JSON.
///
/// All three sequence shapes flatten to lists, enumeration members collapse
/// to their display name, and composites become mappings keyed by field
/// name, recursing into nested composites that a shallow conversion would
/// leave opaque. Already-plain values pass through unchanged, which makes
/// the conversion idempotent.
///
/// # Example
///
/// ```rust
/// use prettytree::{to_plain_tree, Value};
///
/// let point = Value::composite("Point", vec![("x", Value::Int(1))]);
/// let plain = to_plain_tree(&point);
/// assert_eq!(
///     plain,
///     Value::Map(vec![(Value::Text("x".into()), Value::Int(1))])
/// );
/// ```
pub fn to_plain_tree(value: &Value) -> Value {
    match value {
        Value::List(elems) | Value::Tuple(elems) | Value::Set(elems) => {
            Value::List(elems.iter().map(to_plain_tree).collect())
        }
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), to_plain_tree(value)))
                .collect(),
        ),
        Value::Enum { type_name, variant } => Value::Text(enum_display(type_name, variant)),
        Value::Composite { fields, .. } => Value::Map(
            fields
                .iter()
                .map(|(name, value)| (Value::Text(name.clone()), to_plain_tree(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Serializes a value to JSON text with four-space indentation and stable
/// field order. Non-ASCII characters are left unescaped.
pub fn to_json_string(value: &Value) -> Result<String> {
    let mut out = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(elems) | Value::Tuple(elems) | Value::Set(elems) => {
                let mut seq = serializer.serialize_seq(Some(elems.len()))?;
                for elem in elems {
                    seq.serialize_element(elem)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&key_text(key), value)?;
                }
                map.end()
            }
            Value::Enum { type_name, variant } => {
                serializer.serialize_str(&enum_display(type_name, variant))
            }
            Value::Composite { fields, .. } => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Value::Opaque(text) => serializer.serialize_str(text),
        }
    }
}

// JSON object keys must be strings; non-text keys use their literal fragment.
fn key_text(key: &Value) -> Cow<'_, str> {
    match key {
        Value::Text(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Int(n) => Cow::Owned(n.to_string()),
        Value::Float(f) => Cow::Owned(float_literal(*f)),
        Value::Enum { type_name, variant } => Cow::Owned(enum_display(type_name, variant)),
        Value::Opaque(text) => Cow::Borrowed(text),
        other => Cow::Owned(format_value(other)),
    }
}
