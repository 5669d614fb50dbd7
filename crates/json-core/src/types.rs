//! The JSON value model.
//!
//! A [`Value`] is an immutable tree: strings, arrays and objects keep their
//! contents behind an [`Arc`], so a clone shares storage and nothing hands out
//! a `&mut` into a constructed value. Degenerate values (null, `true`,
//! `false`, `0.0`, `""`, `[]`, `{}`) are canonical: every constructor returns
//! the same shared instance for them.
//!
//! Accessors are variant specific. Calling one on the wrong variant returns
//! [`JsonError::WrongType`] and never coerces. Only [`Value::is_null`] and
//! [`Value::kind`] answer for every variant.

use std::fmt;
use std::slice;
use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::{JsonError, Result};

/// Members of a JSON object. Keys are unique; order is kept for rendering
/// but does not take part in equality.
pub type Members = IndexMap<String, Value>;

static EMPTY_STRING: Lazy<Arc<str>> = Lazy::new(|| Arc::from(""));
static EMPTY_ARRAY: Lazy<Arc<[Value]>> = Lazy::new(|| Arc::from(Vec::<Value>::new()));
static EMPTY_OBJECT: Lazy<Arc<Members>> = Lazy::new(|| Arc::new(Members::new()));

/// The six JSON data kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// One JSON datum.
///
/// Two values are equal when they are the same variant holding equal
/// contents. Object equality ignores member order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    Array(Arc<[Value]>),
    Object(Arc<Members>),
}

impl Value {
    pub const TRUE: Value = Value::Bool(true);
    pub const FALSE: Value = Value::Bool(false);
    pub const ZERO: Value = Value::Number(0.0);

    pub const fn null() -> Value {
        Value::Null
    }

    pub fn empty_string() -> Value {
        Value::String(Arc::clone(&*EMPTY_STRING))
    }

    pub fn empty_array() -> Value {
        Value::Array(Arc::clone(&*EMPTY_ARRAY))
    }

    pub fn empty_object() -> Value {
        Value::Object(Arc::clone(&*EMPTY_OBJECT))
    }

    /// Which of the six variants this value is.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    fn wrong_type(&self) -> JsonError {
        JsonError::wrong_type(self.kind())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether a number equals zero (`-0.0` included).
    pub fn is_zero(&self) -> Result<bool> {
        self.number().map(|n| n == 0.0)
    }

    /// Whether a string, array or object has no contents.
    pub fn is_empty(&self) -> Result<bool> {
        match self {
            Value::String(s) => Ok(s.is_empty()),
            Value::Array(items) => Ok(items.is_empty()),
            Value::Object(members) => Ok(members.is_empty()),
            _ => Err(self.wrong_type()),
        }
    }

    pub fn bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.wrong_type()),
        }
    }

    pub fn number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.wrong_type()),
        }
    }

    /// The number rounded to the nearest integer, halves rounding up
    /// (`2.5 -> 3`, `-2.5 -> -2`). Out-of-range values saturate.
    pub fn integer(&self) -> Result<i64> {
        self.number().map(round_half_up)
    }

    pub fn string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.wrong_type()),
        }
    }

    /// Characters in a string, items in an array or members in an object.
    pub fn length(&self) -> Result<usize> {
        match self {
            Value::String(s) => Ok(s.chars().count()),
            Value::Array(items) => Ok(items.len()),
            Value::Object(members) => Ok(members.len()),
            _ => Err(self.wrong_type()),
        }
    }

    pub fn array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            _ => Err(self.wrong_type()),
        }
    }

    /// Array item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn at(&self, index: usize) -> Result<&Value> {
        Ok(&self.array()?[index])
    }

    /// Follow a path of array indices, e.g. `[1, 1, 0]` is `self[1][1][0]`.
    ///
    /// An empty path returns `self`. Every step must land on an array.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn at_path(&self, path: &[usize]) -> Result<&Value> {
        match path.split_first() {
            None => Ok(self),
            Some((first, rest)) => self.at(*first)?.at_path(rest),
        }
    }

    /// An owned copy of the array items.
    pub fn list(&self) -> Result<Vec<Value>> {
        self.array().map(<[Value]>::to_vec)
    }

    pub fn stream(&self) -> Result<slice::Iter<'_, Value>> {
        self.array().map(<[Value]>::iter)
    }

    /// An owned copy of the object members.
    pub fn object(&self) -> Result<Members> {
        self.members().map(Members::clone)
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.members()?.keys().cloned().collect())
    }

    /// Object member named `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        Ok(self.members()?.get(key))
    }

    /// Follow a path of object keys. A missing member anywhere along the
    /// path yields `Ok(None)`; an intermediate that is present but not an
    /// object is a [`JsonError::WrongType`].
    pub fn get_path(&self, path: &[&str]) -> Result<Option<&Value>> {
        let Some((first, rest)) = path.split_first() else {
            return Ok(Some(self));
        };
        match self.get(first)? {
            Some(member) => member.get_path(rest),
            None => Ok(None),
        }
    }

    fn members(&self) -> Result<&Members> {
        match self {
            Value::Object(members) => Ok(members),
            _ => Err(self.wrong_type()),
        }
    }
}

/// Nearest integer, ties toward positive infinity. NaN maps to 0.
fn round_half_up(n: f64) -> i64 {
    let floor = n.floor();
    let rounded = if n - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoder::to_string(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        // -0.0 compares equal to 0.0 and collapses onto the canonical zero.
        if n == 0.0 {
            Value::ZERO
        } else {
            Value::Number(n)
        }
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::from(f64::from(n))
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::from(f64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, u8, u16, u32);

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::from(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Value::empty_string()
        } else {
            Value::String(Arc::from(s))
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Value::empty_string()
        } else {
            Value::String(Arc::from(s))
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        if items.is_empty() {
            Value::empty_array()
        } else {
            Value::Array(Arc::from(items))
        }
    }
}

impl From<Members> for Value {
    fn from(members: Members) -> Self {
        if members.is_empty() {
            Value::empty_object()
        } else {
            Value::Object(Arc::new(members))
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let members: Members = iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::from(members)
    }
}
