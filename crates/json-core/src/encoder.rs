//! JSON Encoder — renders values and builder contents as compact JSON text.
//!
//! Output has no insignificant whitespace. Rendering rules:
//!
//! - `null`, `true`, `false` as literals
//! - [`Value`] numbers and floating-point elements through `ryu`, which keeps a
//!   fractional part or exponent (`1.0`, `1e100`); integer elements through
//!   `itoa` (`1`). Non-finite numbers have no JSON form and render as `null`.
//! - strings quoted and escaped by [`escape::quote`]
//! - arrays and objects as `[a,b]` / `{"k":v}`, empty ones as `[]` / `{}`;
//!   object members are written in their stored order
//!
//! Rendering never fails. Nesting is followed recursively, so stack use grows
//! with the depth of the structure.

use crate::builder::{ArrayBuilder, Element, ObjectBuilder};
use crate::escape;
use crate::types::Value;

/// Something that can be written out as JSON text.
pub trait ToJson {
    /// Append the JSON rendering of `self` to `out`.
    fn write_json(&self, out: &mut String);
}

/// Render anything [`ToJson`] as a JSON string.
///
/// ```
/// use json_core::{serialize, Element, ObjectBuilder};
///
/// assert_eq!(serialize(&ObjectBuilder::new()), "{}");
/// assert_eq!(serialize(&vec![Element::from(1), Element::from("a")]), r#"[1,"a"]"#);
/// ```
pub fn serialize<T: ToJson + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.write_json(&mut out);
    out
}

/// Render a [`Value`] tree as JSON text.
pub fn to_string(value: &Value) -> String {
    serialize(value)
}

impl ToJson for Value {
    fn write_json(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => write_bool(*b, out),
            Value::Number(n) => write_f64(*n, out),
            Value::String(s) => out.push_str(&escape::quote(s)),
            Value::Array(items) => write_sequence(items.iter(), out),
            Value::Object(members) => write_members(members.iter(), out),
        }
    }
}

impl ToJson for Element {
    fn write_json(&self, out: &mut String) {
        match self {
            Element::Null => out.push_str("null"),
            Element::Bool(b) => write_bool(*b, out),
            Element::Int(n) => out.push_str(itoa::Buffer::new().format(*n)),
            Element::Float(n) => write_f64(*n, out),
            Element::Float32(n) => {
                if n.is_finite() {
                    out.push_str(ryu::Buffer::new().format_finite(*n));
                } else {
                    out.push_str("null");
                }
            }
            Element::Text(s) => out.push_str(&escape::quote(s)),
            Element::Array(array) => array.write_json(out),
            Element::Object(object) => object.write_json(out),
            Element::Value(value) => value.write_json(out),
        }
    }
}

impl ToJson for ObjectBuilder {
    fn write_json(&self, out: &mut String) {
        write_members(self.entries(), out);
    }
}

impl ToJson for ArrayBuilder {
    fn write_json(&self, out: &mut String) {
        write_sequence(self.items(), out);
    }
}

impl<T: ToJson> ToJson for [T] {
    fn write_json(&self, out: &mut String) {
        write_sequence(self.iter(), out);
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn write_json(&self, out: &mut String) {
        self.as_slice().write_json(out);
    }
}

fn write_bool(b: bool, out: &mut String) {
    out.push_str(if b { "true" } else { "false" });
}

fn write_f64(n: f64, out: &mut String) {
    if n.is_finite() {
        out.push_str(ryu::Buffer::new().format_finite(n));
    } else {
        out.push_str("null");
    }
}

fn write_sequence<'a, T, I>(items: I, out: &mut String)
where
    T: ToJson + 'a,
    I: Iterator<Item = &'a T>,
{
    out.push('[');
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(',');
        }
        item.write_json(out);
    }
    out.push(']');
}

fn write_members<'a, K, T, I>(members: I, out: &mut String)
where
    K: AsRef<str> + 'a,
    T: ToJson + 'a,
    I: Iterator<Item = (K, &'a T)>,
{
    out.push('{');
    for (i, (key, value)) in members.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape::quote(key.as_ref()));
        out.push(':');
        value.write_json(out);
    }
    out.push('}');
}
