//! # json-core
//!
//! A small JSON codec: an immutable [`Value`] tree, a strict single-pass
//! parser, and compact serialization for values and for ad-hoc builder
//! content.
//!
//! ## Quick start
//!
//! ```rust
//! use json_core::{parse, to_string, ArrayBuilder, ObjectBuilder};
//!
//! // Text → Value
//! let value = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(value.get("name").unwrap().unwrap().string().unwrap(), "Alice");
//! assert_eq!(value.get("scores").unwrap().unwrap().at(1).unwrap().integer().unwrap(), 87);
//!
//! // Value → text (numbers keep their fractional part)
//! assert_eq!(to_string(&value), r#"{"name":"Alice","scores":[95.0,87.0,92.0]}"#);
//!
//! // Host data → text
//! let json = ObjectBuilder::new()
//!     .with("id", 7)
//!     .with("tags", ArrayBuilder::new().with("a").with("b"))
//!     .build();
//! assert_eq!(json, r#"{"id":7,"tags":["a","b"]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Value` model, `Kind`, canonical empty values
//! - [`decoder`] — JSON text → `Value` (`parse`, `parse_with_options`, `validate`)
//! - [`encoder`] — `Value` / builder content → JSON text (`to_string`, `serialize`)
//! - [`builder`] — `ObjectBuilder`, `ArrayBuilder` and their `Element` items
//! - [`escape`] — string literal escaping and unescaping
//! - [`options`] — parser limits
//! - [`interop`] — `serde` and `serde_json` conversions
//! - [`error`] — Error types for parse failures and wrong-variant access

pub mod builder;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod interop;
pub mod options;
pub mod types;

pub use builder::{ArrayBuilder, Element, ObjectBuilder};
pub use decoder::{parse, parse_with_options, validate};
pub use encoder::{serialize, to_string, ToJson};
pub use error::{JsonError, Result};
pub use options::ParseOptions;
pub use types::{Kind, Members, Value};
