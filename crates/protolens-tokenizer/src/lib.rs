//! Tokenizer for proto3 schema files.
//!
//! The token sequence covers every non-whitespace byte of the input exactly
//! once. Comments are kept as tokens and characters that cannot start a token
//! become [`TokenKind::Invalid`] instead of stopping the scan.

pub mod cursor;
pub mod scan;
mod token;

pub use cursor::Cursor;
use cursor::is_ident_start;
use text_size::TextRange;
pub use token::{Keyword, PrimitiveType, Radix, Token, TokenKind};

pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).collect()
}

pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { cursor: Cursor::new(text) }
    }

    pub fn next_token(&mut self) -> Option<Token> {
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.offset();
        let kind = self.token_kind();
        let range = TextRange::new(start, self.cursor.offset());
        debug_assert!(!range.is_empty());

        Some(Token::new(kind, range))
    }

    fn token_kind(&mut self) -> TokenKind {
        let cursor = &mut self.cursor;

        match cursor.current() {
            '/' => match cursor.peek(1) {
                '/' => {
                    cursor.skip_to_line_break();
                    TokenKind::Comment { block: false }
                }
                '*' => {
                    scan::block_comment(cursor);
                    TokenKind::Comment { block: true }
                }
                _ => {
                    cursor.advance(1);
                    TokenKind::Invalid
                }
            },
            '\'' | '"' => {
                scan::string(cursor);
                TokenKind::String
            }
            _ if scan::starts_number(cursor) => scan::number(cursor),
            c if is_ident_start(c) => classify_word(scan::word(cursor)),
            c => match TokenKind::punctuation(c) {
                Some(kind) if kind != TokenKind::Slash => {
                    cursor.advance(1);
                    kind
                }
                _ => {
                    cursor.advance_char();
                    TokenKind::Invalid
                }
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn classify_word(text: &str) -> TokenKind {
    match text {
        "inf" | "nan" => TokenKind::Float,
        "true" | "false" => TokenKind::Boolean,
        _ => {
            if let Some(primitive) = PrimitiveType::from_text(text) {
                TokenKind::Primitive(primitive)
            } else if let Some(keyword) = Keyword::from_text(text) {
                TokenKind::Keyword(keyword)
            } else {
                TokenKind::Identifier
            }
        }
    }
}

#[cfg(test)]
mod tests;
