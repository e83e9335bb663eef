use std::io::Read;
use std::str::FromStr;

use tracing::{trace, warn};

use crate::{
    config::Limits,
    error::CompilerError,
    scanner::{CharClass, Scanned, Scanner},
    token::{Token, TokenKind, EOF_LEXEME},
};

/// Pulls tokens from a [`Scanner`] one at a time. The lexer always holds the
/// first character not yet part of any token, so it is primed with one read
/// on construction.
pub struct Lexer<R: Read> {
    scanner: Scanner<R>,
    current: Scanned,
    lexeme: String,
    truncated: bool,
    max_lexeme_len: usize,
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R, limits: Limits) -> Result<Lexer<R>, CompilerError> {
        let mut scanner = Scanner::new(reader);
        let current = scanner.next()?;

        Ok(Lexer {
            scanner,
            current,
            lexeme: String::new(),
            truncated: false,
            max_lexeme_len: limits.max_lexeme_len,
        })
    }

    pub fn lex(&mut self) -> Result<Token, CompilerError> {
        self.lexeme.clear();
        self.truncated = false;
        self.skip_blanks()?;

        let kind = match self.current.class {
            CharClass::Letter => self.lex_word()?,
            CharClass::Digit => {
                self.consume_while(CharClass::Digit)?;
                TokenKind::IntegerLiteral
            }
            CharClass::Other => {
                let kind = self.lex_symbol()?;
                self.advance()?;
                kind
            }
            CharClass::EndOfInput => {
                self.lexeme.push_str(EOF_LEXEME);
                TokenKind::EndOfInput
            }
        };

        let token = Token::new(kind, self.lexeme.as_str());
        trace!(lexeme = %token.lexeme, %kind, "lexed token");

        Ok(token)
    }

    /// Lexes the remaining input, ending with (and including) the
    /// end-of-input token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        let mut tokens: Vec<Token> = Vec::new();

        loop {
            let token = self.lex()?;
            let done = token.is(TokenKind::EndOfInput);
            tokens.push(token);

            if done {
                break;
            }
        }

        Ok(tokens)
    }

    fn advance(&mut self) -> Result<(), CompilerError> {
        self.current = self.scanner.next()?;
        Ok(())
    }

    fn add_char(&mut self) {
        if self.lexeme.len() < self.max_lexeme_len {
            self.lexeme.push(self.current.ch);
        } else if !self.truncated {
            self.truncated = true;
            warn!(
                limit = self.max_lexeme_len,
                lexeme = %self.lexeme,
                "lexeme is too long, truncating"
            );
        }
    }

    fn add_advance(&mut self) -> Result<(), CompilerError> {
        self.add_char();
        self.advance()
    }

    fn skip_blanks(&mut self) -> Result<(), CompilerError> {
        while self.current.is_blank() {
            self.advance()?;
        }
        Ok(())
    }

    fn consume_while(&mut self, class: CharClass) -> Result<(), CompilerError> {
        while self.current.class == class {
            self.add_advance()?;
        }
        Ok(())
    }

    fn lex_word(&mut self) -> Result<TokenKind, CompilerError> {
        self.consume_while(CharClass::Letter)?;
        Ok(TokenKind::from_str(&self.lexeme).unwrap_or(TokenKind::Identifier))
    }

    /// Classifies the operator or punctuation under the cursor. Two-character
    /// operators leave the cursor on their second character; a character read
    /// ahead and not used is pushed back. Either way the caller advances once.
    fn lex_symbol(&mut self) -> Result<TokenKind, CompilerError> {
        let kind = match self.current.ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Add,
            '-' => TokenKind::Subtract,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '=' => TokenKind::Equal,
            ';' => TokenKind::Semicolon,
            '<' => {
                return self.lex_pair(
                    &[('=', TokenKind::LessOrEqual), ('>', TokenKind::NotEqual)],
                    TokenKind::LessThan,
                )
            }
            '>' => {
                return self.lex_pair(&[('=', TokenKind::GreaterOrEqual)], TokenKind::GreaterThan)
            }
            ':' => return self.lex_pair(&[('=', TokenKind::Assign)], TokenKind::Unknown),
            _ => TokenKind::Unknown,
        };

        self.add_char();
        Ok(kind)
    }

    fn lex_pair(
        &mut self,
        seconds: &[(char, TokenKind)],
        single: TokenKind,
    ) -> Result<TokenKind, CompilerError> {
        self.add_advance()?;

        let next = self.current;
        match seconds
            .iter()
            .find(|(c, _)| !next.is_eof() && *c == next.ch)
        {
            Some((_, kind)) => {
                self.add_char();
                Ok(*kind)
            }
            None => {
                self.scanner.push_back();
                Ok(single)
            }
        }
    }
}
