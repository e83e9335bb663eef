use std::io::Read;

use tracing::trace;

use crate::{
    config::Limits,
    error::CompilerError,
    lexer::Lexer,
    token::{Token, TokenKind},
};

static PROGRAM_TERMINATORS: [TokenKind; 2] = [TokenKind::Semicolon, TokenKind::EndOfInput];
static ADDITIVE_TOKENS: [TokenKind; 2] = [TokenKind::Add, TokenKind::Subtract];
static MULTIPLICATIVE_TOKENS: [TokenKind; 2] = [TokenKind::Multiply, TokenKind::Divide];

/// Predictive recursive-descent validator for the grammar
///
/// ```text
/// P   ::= S
/// S   ::= ident ':=' E S2
///       | ('read' | 'write') '(' ident ')' S2
///       | 'while' C 'do' S 'od' S2
/// S2  ::= ';' S S2 | ε
/// C   ::= E (relop E)*
/// E   ::= T E2
/// E2  ::= ('+' | '-') T E2 | ε
/// T   ::= F T2
/// T2  ::= ('*' | '/') F T2 | ε
/// F   ::= ident | int_lit | '(' E ')'
/// ```
///
/// The parser holds exactly one token of lookahead and pulls the next one from
/// the lexer each time a terminal is consumed.
pub struct Parser<R: Read> {
    lexer: Lexer<R>,
    current: Token,
    depth: usize,
    max_depth: usize,
}

impl<R: Read> Parser<R> {
    pub fn new(mut lexer: Lexer<R>, limits: Limits) -> Result<Parser<R>, CompilerError> {
        let current = lexer.lex()?;

        Ok(Parser {
            lexer,
            current,
            depth: 0,
            max_depth: limits.max_nesting_depth,
        })
    }

    /// Runs `P` until the whole input has been consumed. A leading `;` left
    /// behind by `P` is skipped and `P` starts again on the following token.
    pub fn validate(&mut self) -> Result<(), CompilerError> {
        loop {
            self.parse_program()?;

            if self.check(TokenKind::EndOfInput) {
                break;
            }

            self.advance()?;
        }

        Ok(())
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    fn check(&self, t: TokenKind) -> bool {
        self.current.is(t)
    }

    fn matches_any(&self, ts: &[TokenKind]) -> bool {
        ts.iter().any(|t| self.check(*t))
    }

    fn advance(&mut self) -> Result<(), CompilerError> {
        self.current = self.lexer.lex()?;
        Ok(())
    }

    fn unexpected(&self) -> CompilerError {
        CompilerError::unexpected(&self.current)
    }

    fn consume(&mut self, t: TokenKind) -> Result<(), CompilerError> {
        if self.check(t) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    fn nested<F>(&mut self, f: F) -> Result<(), CompilerError>
    where
        F: FnOnce(&mut Self) -> Result<(), CompilerError>,
    {
        if self.depth >= self.max_depth {
            return Err(CompilerError::TooDeeplyNested {
                limit: self.max_depth,
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        result
    }

    /// `P ::= S`, which must leave the cursor on `;` or end of input.
    pub fn parse_program(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "P", "enter");
        self.parse_statement()?;

        if self.matches_any(&PROGRAM_TERMINATORS) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// `S`. A token that starts none of the alternatives is left in place and
    /// nothing is consumed.
    pub fn parse_statement(&mut self) -> Result<(), CompilerError> {
        if self.parse_statement_head()? {
            self.parse_statement_tail()?;
        }

        Ok(())
    }

    /// `S` without its trailing `S2`. Returns whether an alternative matched.
    fn parse_statement_head(&mut self) -> Result<bool, CompilerError> {
        trace!(rule = "S", "enter");

        match self.current.kind {
            TokenKind::Identifier => {
                self.advance()?;
                self.consume(TokenKind::Assign)?;
                self.parse_expr()?;
            }
            TokenKind::KeywordRead | TokenKind::KeywordWrite => {
                self.advance()?;
                self.consume(TokenKind::LeftParen)?;
                self.consume(TokenKind::Identifier)?;
                self.consume(TokenKind::RightParen)?;
            }
            TokenKind::KeywordWhile => self.nested(|this| {
                this.advance()?;
                this.parse_condition()?;
                this.consume(TokenKind::KeywordDo)?;
                this.parse_statement()?;
                this.consume(TokenKind::KeywordOd)
            })?,
            _ => return Ok(false),
        }

        Ok(true)
    }

    /// `S2`. Iterates rather than recursing so long statement lists do not
    /// grow the call stack.
    pub fn parse_statement_tail(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "S2", "enter");

        while self.check(TokenKind::Semicolon) {
            self.advance()?;

            match self.current.kind {
                TokenKind::Semicolon => return Err(self.unexpected()),
                // A trailing `;` is left for `P` to accept.
                TokenKind::EndOfInput => return Ok(()),
                _ => {
                    self.parse_statement_head()?;
                }
            }
        }

        Ok(())
    }

    /// `C ::= E (relop E)*`
    pub fn parse_condition(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "C", "enter");
        self.parse_expr()?;

        while self.current.kind.is_relational() {
            self.advance()?;
            self.parse_expr()?;
        }

        Ok(())
    }

    /// `E ::= T E2`
    pub fn parse_expr(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "E", "enter");
        self.parse_term()?;
        self.parse_expr_tail()
    }

    fn parse_expr_tail(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "E2", "enter");

        while self.matches_any(&ADDITIVE_TOKENS) {
            self.advance()?;
            self.parse_term()?;
        }

        Ok(())
    }

    /// `T ::= F T2`
    pub fn parse_term(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "T", "enter");
        self.parse_factor()?;
        self.parse_term_tail()
    }

    fn parse_term_tail(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "T2", "enter");

        while self.matches_any(&MULTIPLICATIVE_TOKENS) {
            self.advance()?;
            self.parse_factor()?;
        }

        Ok(())
    }

    /// `F ::= ident | int_lit | '(' E ')'`
    pub fn parse_factor(&mut self) -> Result<(), CompilerError> {
        trace!(rule = "F", "enter");

        match self.current.kind {
            TokenKind::Identifier | TokenKind::IntegerLiteral => self.advance(),
            TokenKind::LeftParen => self.nested(|this| {
                this.advance()?;
                this.parse_expr()?;
                this.consume(TokenKind::RightParen)
            }),
            _ => Err(self.unexpected()),
        }
    }
}
