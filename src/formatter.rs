use crate::block::render_block;
use crate::model::{enum_display, Value};

/// Renders a value as human-readable, indented display text.
///
/// Containers expand one item per line (empty ones collapse to their bare
/// delimiters), mappings render entries as `key: value`, composites render
/// as `TypeName(` ... `)` with `name=value` fields, and each nesting step
/// indents a further four spaces. Deterministic: the same value always
/// yields byte-identical text.
///
/// # Example
///
/// ```rust
/// use prettytree::Value;
///
/// let value = Value::composite("Point", vec![("x", Value::Int(1))]);
/// assert_eq!(prettytree::format_value(&value), "Point(\n    x=1\n)");
/// ```
pub fn format_value(value: &Value) -> String {
    format_at(value, 0)
}

fn format_at(value: &Value, indent: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => float_literal(*f),
        Value::Text(s) => quote_text(s),
        Value::Map(entries) => {
            let items: Vec<String> = entries
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}: {}",
                        format_at(key, indent + 2),
                        format_at(value, indent + 2)
                    )
                })
                .collect();
            render_block(&items, indent, "{", "}")
        }
        Value::List(elems) => render_elems(elems, indent, "[", "]"),
        Value::Tuple(elems) => render_elems(elems, indent, "(", ")"),
        Value::Set(elems) => render_elems(elems, indent, "{", "}"),
        Value::Enum { type_name, variant } => enum_display(type_name, variant),
        Value::Composite { type_name, fields } => {
            let items: Vec<String> = fields
                .iter()
                .map(|(name, value)| format!("{name}={}", format_at(value, indent + 2)))
                .collect();
            render_block(&items, indent, &format!("{type_name}("), ")")
        }
        Value::Opaque(text) => text.clone(),
    }
}

fn render_elems(elems: &[Value], indent: usize, open: &str, close: &str) -> String {
    let items: Vec<String> = elems
        .iter()
        .map(|elem| format_at(elem, indent + 2))
        .collect();
    render_block(&items, indent, open, close)
}

/// Quotes a string with JSON-style escaping; non-ASCII stays unescaped.
pub(crate) fn quote_text(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// Literal text for a float. Finite values with no fractional part keep a
/// trailing `.0` so they stay distinguishable from integers.
pub(crate) fn float_literal(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}
