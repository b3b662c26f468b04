/// A runtime value of arbitrary, possibly heterogeneous shape.
///
/// This is the input type for both the pretty formatter and the deep
/// serializer. Anything implementing [`serde::Serialize`] can be turned into
/// a `Value` with [`to_value`][crate::to_value]; values can also be built
/// directly through the `From` impls and constructors below.
///
/// The enum is a closed set of shapes: scalars, text, the three sequence
/// flavors, mappings, enumeration members, named-field composites, and an
/// opaque catch-all carrying a precomputed literal rendering. Every variant
/// owns its children outright, so a `Value` tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A text string.
    Text(String),
    /// An insertion-ordered key/value mapping. Keys may be any `Value`;
    /// uniqueness is the caller's obligation.
    Map(Vec<(Value, Value)>),
    /// An order-significant sequence.
    List(Vec<Value>),
    /// A tuple-like, order-significant sequence.
    Tuple(Vec<Value>),
    /// A set-like collection in its native iteration order. Duplicate-free
    /// by caller obligation.
    Set(Vec<Value>),
    /// A named constant from a closed value set.
    Enum {
        /// Declared name of the enumeration type.
        type_name: String,
        /// Name of the member, e.g. `Red` in `Color.Red`.
        variant: String,
    },
    /// A user-defined object: a declared type name plus an ordered mapping
    /// of field names to field values.
    Composite {
        /// Declared name of the composite type.
        type_name: String,
        /// Fields in declaration order.
        fields: Vec<(String, Value)>,
    },
    /// Anything that matches none of the other shapes. Carries the
    /// best-effort literal text computed when the value was constructed.
    Opaque(String),
}

/// The classification of a [`Value`], assigned before each recursion step.
///
/// Both the formatter and the deep serializer dispatch on this. The
/// classification is total: every value maps to exactly one `Kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Null, boolean, integer, or float.
    Primitive,
    /// A text string.
    Text,
    /// A key-unique, insertion-ordered mapping.
    Mapping,
    /// A list-like, order-significant sequence.
    OrderedSequence,
    /// A tuple-like, order-significant sequence.
    ImmutableSequence,
    /// A set-like collection without duplicates.
    UnorderedCollection,
    /// A named constant of a closed value set.
    EnumerationMember,
    /// A value exposing a named-field mapping.
    Composite,
    /// Fallback for anything matching none of the above.
    Opaque,
}

impl Value {
    /// Classifies this value. Pure, total, and allocation-free; the same
    /// value always classifies identically.
    ///
    /// Classification precedence is fixed: primitive and text first, then
    /// the container shapes, then enumeration members, with composite and
    /// opaque as the fallbacks.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => Kind::Primitive,
            Value::Text(_) => Kind::Text,
            Value::Map(_) => Kind::Mapping,
            Value::List(_) => Kind::OrderedSequence,
            Value::Tuple(_) => Kind::ImmutableSequence,
            Value::Set(_) => Kind::UnorderedCollection,
            Value::Enum { .. } => Kind::EnumerationMember,
            Value::Composite { .. } => Kind::Composite,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    /// Builds an opaque value from its literal textual representation.
    pub fn opaque(text: impl Into<String>) -> Self {
        Value::Opaque(text.into())
    }

    /// Builds an enumeration member.
    pub fn enum_member(type_name: impl Into<String>, variant: impl Into<String>) -> Self {
        Value::Enum {
            type_name: type_name.into(),
            variant: variant.into(),
        }
    }

    /// Builds a composite value from a type name and ordered fields.
    pub fn composite<N: Into<String>>(
        type_name: impl Into<String>,
        fields: Vec<(N, Value)>,
    ) -> Self {
        Value::Composite {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// Display name of an enumeration member, `TypeName.Variant`.
pub(crate) fn enum_display(type_name: &str, variant: &str) -> String {
    format!("{type_name}.{variant}")
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int! { i8, i16, i32, i64, u8, u16, u32 }

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_dispatch_order_is_fixed() {
        let cases: Vec<(Value, Kind)> = vec![
            (Value::Null, Kind::Primitive),
            (Value::Bool(true), Kind::Primitive),
            (Value::Int(3), Kind::Primitive),
            (Value::Float(0.5), Kind::Primitive),
            (Value::Text("x".into()), Kind::Text),
            (Value::Map(vec![]), Kind::Mapping),
            (Value::List(vec![]), Kind::OrderedSequence),
            (Value::Tuple(vec![]), Kind::ImmutableSequence),
            (Value::Set(vec![]), Kind::UnorderedCollection),
            (
                Value::enum_member("Color", "Red"),
                Kind::EnumerationMember,
            ),
            (
                Value::composite("Point", vec![("x", Value::Int(1))]),
                Kind::Composite,
            ),
            (Value::opaque("<handle>"), Kind::Opaque),
        ];
        for (value, kind) in cases {
            assert_eq!(value.kind(), kind);
            // Re-classification never changes its mind.
            assert_eq!(value.kind(), value.kind());
        }
    }

    #[test]
    fn from_impls_build_expected_variants() {
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
        assert_eq!(Value::from("hi"), Value::Text("hi".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(2u8)), Value::Int(2));
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }
}
