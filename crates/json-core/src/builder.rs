//! Builders for writing ad-hoc JSON text.
//!
//! [`ObjectBuilder`] and [`ArrayBuilder`] stage host data as [`Element`]s and
//! render it once with `build()`. They own their collections rather than
//! being collections, so the only operations on offer are accumulating
//! entries, inspecting them, and rendering.
//!
//! ```
//! use json_core::{ArrayBuilder, ObjectBuilder};
//!
//! let mut object = ObjectBuilder::new();
//! object.put("aap", 2);
//! let array = ArrayBuilder::new()
//!     .with(1)
//!     .with(ArrayBuilder::new().with(object).with(None::<i32>))
//!     .with("3")
//!     .with(true);
//! assert_eq!(array.build(), r#"[1,[{"aap":2},null],"3",true]"#);
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::encoder;
use crate::types::Value;

/// One item staged in a builder.
///
/// Conversions exist for the usual host types; anything else that implements
/// [`Display`](fmt::Display) can be staged with [`Element::display`] and is
/// rendered as a JSON string of its display text.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Float32(f32),
    Text(String),
    Array(ArrayBuilder),
    Object(ObjectBuilder),
    /// An already parsed or constructed value, rendered as-is.
    Value(Value),
}

impl Element {
    /// Stage `value` as a string holding its display text.
    pub fn display(value: impl fmt::Display) -> Self {
        Element::Text(value.to_string())
    }

    /// Render this element on its own.
    pub fn build(&self) -> String {
        encoder::serialize(self)
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Bool(b)
    }
}

macro_rules! element_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Element {
                fn from(n: $t) -> Self {
                    Element::Int(i64::from(n))
                }
            }
        )*
    };
}

element_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Element::Float(n)
    }
}

impl From<f32> for Element {
    fn from(n: f32) -> Self {
        Element::Float32(n)
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Text(c.to_string())
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Text(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Text(s)
    }
}

impl From<ArrayBuilder> for Element {
    fn from(array: ArrayBuilder) -> Self {
        Element::Array(array)
    }
}

impl From<ObjectBuilder> for Element {
    fn from(object: ObjectBuilder) -> Self {
        Element::Object(object)
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::Value(value)
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map_or(Element::Null, Into::into)
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(items: Vec<T>) -> Self {
        Element::Array(ArrayBuilder::from(items))
    }
}

/// Accumulates members of a JSON object. Keys are unique; putting an
/// existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectBuilder {
    members: IndexMap<String, Element>,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a member, returning the value it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Element>) -> Option<Element> {
        self.members.insert(key.into(), value.into())
    }

    /// Chainable form of [`put`](Self::put).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Element>) -> Self {
        self.put(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Element> {
        self.members.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Element> {
        self.members.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the staged members as a JSON object.
    pub fn build(&self) -> String {
        encoder::serialize(self)
    }
}

impl<K: Into<String>, V: Into<Element>> FromIterator<(K, V)> for ObjectBuilder {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

impl<K: Into<String>, V: Into<Element>> Extend<(K, V)> for ObjectBuilder {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Accumulates items of a JSON array in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayBuilder {
    items: Vec<Element>,
}

impl ArrayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<Element>) {
        self.items.push(item.into());
    }

    /// Chainable form of [`push`](Self::push).
    pub fn with(mut self, item: impl Into<Element>) -> Self {
        self.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }

    /// Render the staged items as a JSON array.
    pub fn build(&self) -> String {
        encoder::serialize(self)
    }
}

impl<T: Into<Element>> From<Vec<T>> for ArrayBuilder {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Element>> FromIterator<T> for ArrayBuilder {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

impl<T: Into<Element>> Extend<T> for ArrayBuilder {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}
