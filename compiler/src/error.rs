use std::io;

use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilerError {
    #[error("unexpected lexeme '{lexeme}' (token {kind})")]
    Syntax { lexeme: String, kind: TokenKind },

    #[error("nesting exceeds the limit of {limit} levels")]
    TooDeeplyNested { limit: usize },

    #[error("failed to read source: {0}")]
    Io(String),
}

impl CompilerError {
    pub fn unexpected(token: &Token) -> Self {
        CompilerError::Syntax {
            lexeme: token.lexeme.to_owned(),
            kind: token.kind,
        }
    }
}

impl From<io::Error> for CompilerError {
    fn from(value: io::Error) -> Self {
        CompilerError::Io(value.to_string())
    }
}
