/// Nesting depth accepted when no explicit limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while parsing and lifting.
///
/// Both passes recurse once per nesting level, so untrusted input is bounded
/// by `max_depth` rather than by the thread's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftOptions {
    pub max_depth: usize,
}

impl LiftOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for LiftOptions {
    fn default() -> Self {
        LiftOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
