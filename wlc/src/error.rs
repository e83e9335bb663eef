use std::io;

use compiler::error::CompilerError;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WlcError {
    #[error("no input file provided\n\n{0}")]
    Usage(String),

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error(transparent)]
    Compile(#[from] CompilerError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}

impl WlcError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            WlcError::Usage(_) => 2,
            WlcError::FileNotFound { .. } => 3,
            WlcError::Compile(_) | WlcError::Io(_) | WlcError::Readline(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use compiler::{error::CompilerError, token::TokenKind};

    use super::WlcError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(WlcError::Usage("usage".to_owned()).exit_code(), 2);
        assert_eq!(
            WlcError::FileNotFound {
                path: "nope.wl".to_owned()
            }
            .exit_code(),
            3
        );
        assert_eq!(
            WlcError::Compile(CompilerError::Syntax {
                lexeme: ";".to_owned(),
                kind: TokenKind::Semicolon
            })
            .exit_code(),
            1
        );
        assert_eq!(
            WlcError::Compile(CompilerError::TooDeeplyNested { limit: 1 }).exit_code(),
            1
        );
    }

    #[test]
    fn test_syntax_error_message() {
        let err: WlcError = CompilerError::Syntax {
            lexeme: "$".to_owned(),
            kind: TokenKind::Unknown,
        }
        .into();

        assert_eq!(err.to_string(), "unexpected lexeme '$' (token Unknown)");
    }
}
