use serde::ser::Serialize;

use crate::error::{PrettyTreeError, Result};
use crate::model::Value;

const DEFAULT_MAX_DEPTH: usize = 100;

/// Converts any serializable value into a [`Value`] tree.
///
/// The mapping follows the serde data model: structs become composites
/// carrying their declared type name and field order, unit enum variants
/// become enumeration members, tuples and tuple structs become tuple
/// values, and data-carrying enum variants wrap their payload in a
/// single-entry mapping keyed by the variant name.
///
/// Nesting deeper than a fixed budget fails with a depth error rather than
/// overflowing the stack; use [`to_value_with_limit`] to pick the budget.
///
/// # Example
///
/// ```rust
/// use prettytree::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let value = to_value(Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(
///     value,
///     Value::composite("Point", vec![
///         ("x", Value::Int(1)),
///         ("y", Value::Int(2)),
///     ])
/// );
/// ```
pub fn to_value<T>(value: T) -> Result<Value>
where
    T: Serialize,
{
    to_value_with_limit(value, DEFAULT_MAX_DEPTH)
}

/// Like [`to_value`], with an explicit nesting budget.
pub fn to_value_with_limit<T>(value: T, max_depth: usize) -> Result<Value>
where
    T: Serialize,
{
    value.serialize(ValueSerializer {
        depth: Depth {
            remaining: max_depth,
            limit: max_depth,
        },
    })
}

#[derive(Clone, Copy)]
struct Depth {
    remaining: usize,
    limit: usize,
}

impl Depth {
    fn descend(self) -> Result<Depth> {
        if self.remaining == 0 {
            return Err(PrettyTreeError::DepthExceeded {
                max_depth: self.limit,
            });
        }
        Ok(Depth {
            remaining: self.remaining - 1,
            limit: self.limit,
        })
    }
}

fn convert<T>(value: &T, depth: Depth) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer { depth })
}

struct ValueSerializer {
    depth: Depth,
}

impl serde::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = PrettyTreeError;

    type SerializeSeq = SerializeElems;
    type SerializeTuple = SerializeElems;
    type SerializeTupleStruct = SerializeElems;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeEntries;
    type SerializeStruct = SerializeComposite;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(n) => Ok(Value::Int(n)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(
            v.iter().map(|b| Value::Int(i64::from(*b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        convert(value, self.depth)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Ok(Value::Composite {
            type_name: name.to_string(),
            fields: Vec::new(),
        })
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::enum_member(name, variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        convert(value, self.depth)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = convert(value, self.depth.descend()?)?;
        Ok(Value::Map(vec![(Value::Text(variant.to_string()), inner)]))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeElems {
            elems: Vec::with_capacity(len.unwrap_or(0)),
            depth: self.depth.descend()?,
            tuple: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(SerializeElems {
            elems: Vec::with_capacity(len),
            depth: self.depth.descend()?,
            tuple: true,
        })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_tuple(len)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            elems: Vec::with_capacity(len),
            depth: self.depth.descend()?,
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeEntries {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
            depth: self.depth.descend()?,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(SerializeComposite {
            type_name: name,
            fields: Vec::with_capacity(len),
            depth: self.depth.descend()?,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            fields: Vec::with_capacity(len),
            depth: self.depth.descend()?,
        })
    }
}

struct SerializeElems {
    elems: Vec<Value>,
    depth: Depth,
    tuple: bool,
}

impl serde::ser::SerializeSeq for SerializeElems {
    type Ok = Value;
    type Error = PrettyTreeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.elems.push(convert(value, self.depth)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        if self.tuple {
            Ok(Value::Tuple(self.elems))
        } else {
            Ok(Value::List(self.elems))
        }
    }
}

impl serde::ser::SerializeTuple for SerializeElems {
    type Ok = Value;
    type Error = PrettyTreeError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        serde::ser::SerializeSeq::end(self)
    }
}

impl serde::ser::SerializeTupleStruct for SerializeElems {
    type Ok = Value;
    type Error = PrettyTreeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        serde::ser::SerializeSeq::end(self)
    }
}

struct SerializeTupleVariant {
    variant: &'static str,
    elems: Vec<Value>,
    depth: Depth,
}

impl serde::ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = PrettyTreeError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.elems.push(convert(value, self.depth)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(vec![(
            Value::Text(self.variant.to_string()),
            Value::Tuple(self.elems),
        )]))
    }
}

struct SerializeEntries {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
    depth: Depth,
}

impl serde::ser::SerializeMap for SerializeEntries {
    type Ok = Value;
    type Error = PrettyTreeError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(convert(key, self.depth)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| PrettyTreeError::Unsupported("map value without a key".to_string()))?;
        self.entries.push((key, convert(value, self.depth)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

struct SerializeComposite {
    type_name: &'static str,
    fields: Vec<(String, Value)>,
    depth: Depth,
}

impl serde::ser::SerializeStruct for SerializeComposite {
    type Ok = Value;
    type Error = PrettyTreeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields.push((key.to_string(), convert(value, self.depth)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Composite {
            type_name: self.type_name.to_string(),
            fields: self.fields,
        })
    }
}

struct SerializeStructVariant {
    variant: &'static str,
    fields: Vec<(String, Value)>,
    depth: Depth,
}

impl serde::ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = PrettyTreeError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields.push((key.to_string(), convert(value, self.depth)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(vec![(
            Value::Text(self.variant.to_string()),
            Value::Composite {
                type_name: self.variant.to_string(),
                fields: self.fields,
            },
        )]))
    }
}
