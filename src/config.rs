pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for [`crate::Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Accept tokens left over after a complete expression instead of
    /// requiring end of input.
    pub allow_trailing: bool,
    /// Maximum nesting of parentheses, unary operators and `**` right
    /// operands. Each level costs several stack frames in the parser and the
    /// evaluator, so deeper input is refused with `ParseError::TooDeep`
    /// instead of overflowing the stack. Valid expressions nested past this
    /// limit are rejected; raise it when running on a larger stack.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            allow_trailing: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn lenient() -> Self {
        ParserConfig {
            allow_trailing: true,
            ..Self::default()
        }
    }
}
