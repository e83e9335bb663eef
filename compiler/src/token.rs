use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;

/// Lexeme carried by the sentinel token produced once the input is exhausted.
pub const EOF_LEXEME: &str = "EOF";

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum TokenKind {
    IntegerLiteral,
    Identifier,

    Assign,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
    LessOrEqual,
    GreaterOrEqual,

    Add,
    Subtract,
    Multiply,
    Divide,
    LeftParen,
    RightParen,

    KeywordRead,
    KeywordWrite,
    KeywordWhile,
    KeywordDo,
    KeywordOd,

    Semicolon,
    Unknown,
    EndOfInput,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = HashMap::from([
        ("read", TokenKind::KeywordRead),
        ("write", TokenKind::KeywordWrite),
        ("while", TokenKind::KeywordWhile),
        ("do", TokenKind::KeywordDo),
        ("od", TokenKind::KeywordOd),
    ]);
}

impl TokenKind {
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessOrEqual
                | TokenKind::GreaterOrEqual
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::Identifier => "Identifier",
            TokenKind::Assign => "Assign",
            TokenKind::LessThan => "LessThan",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::Equal => "Equal",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::LessOrEqual => "LessOrEqual",
            TokenKind::GreaterOrEqual => "GreaterOrEqual",
            TokenKind::Add => "Add",
            TokenKind::Subtract => "Subtract",
            TokenKind::Multiply => "Multiply",
            TokenKind::Divide => "Divide",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::KeywordRead => "KeywordRead",
            TokenKind::KeywordWrite => "KeywordWrite",
            TokenKind::KeywordWhile => "KeywordWhile",
            TokenKind::KeywordDo => "KeywordDo",
            TokenKind::KeywordOd => "KeywordOd",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Unknown => "Unknown",
            TokenKind::EndOfInput => "EndOfInput",
        };

        f.write_str(name)
    }
}

/// Resolves a complete run of letters to its reserved keyword. Matching is
/// case-sensitive: `While` is not a keyword.
impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match KEYWORDS.get(s) {
            Some(kind) => Ok(*kind),
            None => Err(format!("Not a valid keyword: {}", s)),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn eof() -> Token {
        Token::new(TokenKind::EndOfInput, EOF_LEXEME)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.lexeme, self.kind)
    }
}
