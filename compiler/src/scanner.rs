use std::io::{self, BufReader, Bytes, Read};
use std::iter::Peekable;

const NULL_CHAR: char = '\u{0000}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Other,
    EndOfInput,
}

impl CharClass {
    pub fn of(c: char) -> CharClass {
        if c.is_ascii_alphabetic() {
            CharClass::Letter
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// A character paired with its class. At end of input `ch` is NUL and
/// `class` is [`CharClass::EndOfInput`]; a literal NUL byte classifies as
/// [`CharClass::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    pub ch: char,
    pub class: CharClass,
}

impl Scanned {
    pub const EOF: Scanned = Scanned {
        ch: NULL_CHAR,
        class: CharClass::EndOfInput,
    };

    fn new(ch: char) -> Scanned {
        Scanned {
            ch,
            class: CharClass::of(ch),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.class == CharClass::EndOfInput
    }

    /// C-locale blank set, vertical tab and form feed included.
    pub fn is_blank(&self) -> bool {
        !self.is_eof() && matches!(self.ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
    }
}

/// UTF-8 character source with a single pushback slot. A malformed byte
/// sequence reads as one U+FFFD character.
pub struct Scanner<R: Read> {
    bytes: Peekable<Bytes<BufReader<R>>>,
    last: Scanned,
    pushed_back: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Scanner<R> {
        Scanner {
            bytes: BufReader::new(reader).bytes().peekable(),
            last: Scanned::EOF,
            pushed_back: false,
        }
    }

    pub fn next(&mut self) -> io::Result<Scanned> {
        if self.pushed_back {
            self.pushed_back = false;
            return Ok(self.last);
        }

        self.last = match self.bytes.next() {
            Some(byte) => Scanned::new(self.decode(byte?)),
            None => Scanned::EOF,
        };

        Ok(self.last)
    }

    fn decode(&mut self, lead: u8) -> char {
        let width = match lead {
            0x00..=0x7F => return char::from(lead),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return char::REPLACEMENT_CHARACTER,
        };

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            match self.bytes.peek() {
                Some(Ok(b)) if (*b & 0xC0) == 0x80 => {
                    *slot = *b;
                    self.bytes.next();
                }
                _ => return char::REPLACEMENT_CHARACTER,
            }
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Makes the next call to [`Scanner::next`] return the most recently read
    /// character again. Only one level of pushback is held.
    pub fn push_back(&mut self) {
        debug_assert!(!self.pushed_back, "only one character can be pushed back");
        self.pushed_back = true;
    }

    #[cfg(test)]
    fn assert_next(&mut self, c: char, class: CharClass) {
        let scanned = self.next().expect("expected a readable source");
        assert_eq!(scanned.ch, c);
        assert_eq!(scanned.class, class);
    }
}
