//! Parser configuration.

/// Default limit on array/object nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings for [`parse_with_options`](crate::parse_with_options).
///
/// The parser recurses once per nested array or object, so `max_depth`
/// bounds its stack use on hostile input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed container nesting; the top-level container is depth 1.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// No nesting limit beyond the thread's stack.
    pub const fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
