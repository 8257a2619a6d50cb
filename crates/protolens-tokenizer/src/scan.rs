//! Lexical routines shared by the proto3 and text-format tokenizers.
//!
//! Each routine expects the cursor on the first character of the construct
//! and leaves it just past the last one.

use crate::cursor::{Cursor, is_ident_continue};
use crate::token::{Radix, TokenKind};

/// Whether a numeric literal starts at the cursor, sign included.
pub fn starts_number(cursor: &Cursor<'_>) -> bool {
    let unsigned_at = |offset: isize| {
        let c = cursor.peek(offset);
        c.is_ascii_digit() || (c == '.' && cursor.peek(offset + 1).is_ascii_digit())
    };

    match cursor.current() {
        '-' | '+' => {
            unsigned_at(1) || cursor.at_word(1, "inf") || cursor.at_word(1, "nan")
        }
        _ => unsigned_at(0),
    }
}

/// Scans a numeric literal. Must only be called when [`starts_number`] holds.
pub fn number(cursor: &mut Cursor<'_>) -> TokenKind {
    if matches!(cursor.current(), '-' | '+') {
        cursor.advance(1);
    }

    if cursor.at_word(0, "inf") || cursor.at_word(0, "nan") {
        cursor.advance(3);
        return TokenKind::Float;
    }

    if cursor.current() == '0'
        && matches!(cursor.peek(1), 'x' | 'X')
        && cursor.peek(2).is_ascii_hexdigit()
    {
        cursor.advance(2);
        cursor.advance_while(|c| c.is_ascii_hexdigit());
        return TokenKind::Integer(Radix::Hexadecimal);
    }

    if cursor.current() == '0' && is_octal_digit(cursor.peek(1)) {
        cursor.advance(1);
        cursor.advance_while(is_octal_digit);
        return TokenKind::Integer(Radix::Octal);
    }

    let digits = decimal_run(cursor);
    if digits > 0 && !matches!(cursor.peek(digits as isize), '.' | 'e' | 'E') {
        cursor.advance(digits);
        return TokenKind::Integer(Radix::Decimal);
    }

    cursor.advance(digits);
    if cursor.matches('.') {
        cursor.advance(1);
        cursor.advance_while(|c| c.is_ascii_digit());
    }
    if matches!(cursor.current(), 'e' | 'E') {
        cursor.advance(1);
        if matches!(cursor.current(), '-' | '+') {
            cursor.advance(1);
        }
        cursor.advance_while(|c| c.is_ascii_digit());
    }

    TokenKind::Float
}

/// Scans a quoted string. Backslash escapes are skipped as pairs, so an
/// escaped quote never terminates the literal. An unterminated literal runs
/// to the end of the input.
pub fn string(cursor: &mut Cursor<'_>) {
    let quote = cursor.current();
    cursor.advance(1);

    while !cursor.is_eof() {
        match cursor.current() {
            '\\' => cursor.advance(2),
            c if c == quote => {
                cursor.advance(1);
                return;
            }
            _ => cursor.advance(1),
        }
    }
}

/// Scans a `/* ... */` comment. An unterminated comment runs to the end of
/// the input.
pub fn block_comment(cursor: &mut Cursor<'_>) {
    cursor.advance(2);

    while !cursor.is_eof() {
        if cursor.current() == '*' && cursor.peek(1) == '/' {
            cursor.advance(2);
            return;
        }
        cursor.advance(1);
    }
}

/// Scans an identifier-like word and returns its text.
pub fn word<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    let start = cursor.pos();
    cursor.advance_while(is_ident_continue);
    &cursor.text()[start..cursor.pos()]
}

fn decimal_run(cursor: &Cursor<'_>) -> usize {
    let mut len = 0;
    while cursor.peek(len as isize).is_ascii_digit() {
        len += 1;
    }
    len
}

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}
