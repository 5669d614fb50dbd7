//! Error types for JSON parsing and value access.

use crate::types::Kind;
use thiserror::Error;

/// Longest slice of the unconsumed input shown in an error message.
const SNIPPET_CHARS: usize = 32;

/// Errors that can occur while parsing JSON text or reading a [`Value`](crate::Value).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The input was not a single well-formed JSON value.
    ///
    /// `offset` is the byte position where the parser gave up and `remainder`
    /// is the unconsumed input from that position on.
    #[error("syntax error at byte {offset}: {reason} near {}", snippet(.remainder))]
    Syntax {
        offset: usize,
        remainder: String,
        reason: &'static str,
    },

    /// A variant-specific accessor was called on a value of another variant.
    #[error("wrong type: {actual}")]
    WrongType { actual: Kind },
}

impl JsonError {
    /// Build a syntax error pointing at `offset` inside `input`.
    pub(crate) fn syntax(input: &str, offset: usize, reason: &'static str) -> Self {
        let remainder = input.get(offset..).unwrap_or_default().to_string();
        JsonError::Syntax {
            offset,
            remainder,
            reason,
        }
    }

    pub(crate) fn wrong_type(actual: Kind) -> Self {
        JsonError::WrongType { actual }
    }

    /// The unconsumed input, for syntax errors.
    pub fn remainder(&self) -> Option<&str> {
        match self {
            JsonError::Syntax { remainder, .. } => Some(remainder),
            JsonError::WrongType { .. } => None,
        }
    }
}

fn snippet(remainder: &str) -> String {
    if remainder.is_empty() {
        return "end of input".to_string();
    }
    let mut out: String = remainder.chars().take(SNIPPET_CHARS).collect();
    if remainder.chars().nth(SNIPPET_CHARS).is_some() {
        out.push_str("...");
    }
    format!("{out:?}")
}

/// Convenience alias used throughout json-core.
pub type Result<T> = std::result::Result<T, JsonError>;
