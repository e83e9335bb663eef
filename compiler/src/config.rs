/// Longest lexeme the lexer will build; longer runs are truncated with a warning.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 98;

/// Deepest allowed nesting of `while` bodies and parenthesized expressions.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_lexeme_len: usize,
    pub max_nesting_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl Limits {
    pub fn with_max_lexeme_len(self, max_lexeme_len: usize) -> Self {
        Limits {
            max_lexeme_len,
            ..self
        }
    }

    pub fn with_max_nesting_depth(self, max_nesting_depth: usize) -> Self {
        Limits {
            max_nesting_depth,
            ..self
        }
    }
}
