use std::io::Read;

use config::Limits;
use error::CompilerError;
use lexer::Lexer;
use parser::Parser;
use token::Token;

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod token;

/// Checks that `reader` holds a syntactically valid program. The first
/// syntax error ends the run.
pub fn validate<R: Read>(reader: R, limits: Limits) -> Result<(), CompilerError> {
    Parser::new(Lexer::new(reader, limits)?, limits)?.validate()
}

pub fn validate_str(buf: &str) -> Result<(), CompilerError> {
    validate(buf.as_bytes(), Limits::default())
}

pub fn tokenize<R: Read>(reader: R, limits: Limits) -> Result<Vec<Token>, CompilerError> {
    Lexer::new(reader, limits)?.tokenize()
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Limits,
        error::CompilerError,
        token::{Token, TokenKind},
    };

    #[test]
    fn test_validate_str() {
        assert_eq!(super::validate_str("a:=1;write(a)"), Ok(()));
        assert_eq!(
            super::validate_str("x:=5$3"),
            Err(CompilerError::Syntax {
                lexeme: "$".to_owned(),
                kind: TokenKind::Unknown
            })
        );
    }

    #[test]
    fn test_non_ascii_lexeme_is_reported_verbatim() {
        assert_eq!(
            super::validate_str("x:=\u{e9}"),
            Err(CompilerError::Syntax {
                lexeme: "\u{e9}".to_owned(),
                kind: TokenKind::Unknown
            })
        );
    }

    #[test]
    fn test_validate_reader() {
        let src: &[u8] = b"while a<b do a:=a+1 od";
        assert_eq!(super::validate(src, Limits::default()), Ok(()));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            super::tokenize("write(a)".as_bytes(), Limits::default()),
            Ok(vec![
                Token::new(TokenKind::KeywordWrite, "write"),
                Token::new(TokenKind::LeftParen, "("),
                Token::new(TokenKind::Identifier, "a"),
                Token::new(TokenKind::RightParen, ")"),
                Token::eof(),
            ])
        );
    }
}
