//! Text-format literals: string concatenation, message literals and lists.
//!
//! Proto3 option values keep message literals as opaque source text; the
//! text-format parser reuses the same routines for list values and
//! extension names.

use protolens_syntax::TreeKind;
use protolens_tokenizer::TokenKind;

use crate::parser::{ParseResult, Parser};

/// Strips the surrounding quotes of a string literal. An unterminated
/// literal only loses its opening quote.
pub fn unquote(literal: &str) -> &str {
    let Some(quote) = literal.chars().next() else {
        return literal;
    };
    let inner = &literal[quote.len_utf8()..];
    match inner.strip_suffix(quote) {
        Some(stripped) if !inner.is_empty() && !stripped.ends_with('\\') => stripped,
        Some(stripped) if stripped.ends_with("\\\\") => stripped,
        _ => inner,
    }
}

/// One or more adjacent string literals, joined into a single literal that
/// keeps the first literal's quote character.
pub fn string_concat<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<String> {
    let first = p.expect_text(TokenKind::String, "string literal")?;
    if !p.at(TokenKind::String) {
        return Ok(first.to_owned());
    }

    let quote = first.chars().next().unwrap_or('"');
    let mut joined = String::new();
    joined.push(quote);
    joined.push_str(unquote(first));
    while p.at(TokenKind::String) {
        joined.push_str(unquote(p.current_text()));
        p.advance()?;
    }
    joined.push(quote);
    Ok(joined)
}

/// `{ ... }` or `< ... >`.
pub fn message_literal<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<()> {
    let close = match p.current_kind() {
        Some(TokenKind::LeftBrace) => TokenKind::RightBrace,
        Some(TokenKind::LeftAngle) => TokenKind::RightAngle,
        _ => return Err(p.expected("'{'")),
    };
    p.advance()?;

    while !p.at(close) {
        if p.at_end() {
            return Err(p.expected(close.describe()));
        }
        literal_field(p)?;
    }

    p.advance()
}

fn literal_field<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<()> {
    field_name(p)?;

    if p.eat(TokenKind::Colon)? {
        value(p)?;
    } else if p.at(TokenKind::LeftBrace) || p.at(TokenKind::LeftAngle) {
        message_literal(p)?;
    } else {
        return Err(p.expected("':' or '{'"));
    }

    separator(p)
}

/// Optional `,` or `;` after a field.
pub fn separator<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<()> {
    if !p.eat(TokenKind::Comma)? {
        p.eat(TokenKind::Semicolon)?;
    }
    Ok(())
}

/// A plain field name or a bracketed extension name.
pub fn field_name<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<String> {
    if p.at(TokenKind::LeftBracket) {
        return extension_name(p);
    }
    Ok(p.expect_word("field name")?.to_owned())
}

/// `[pkg.ext]` or `[type.googleapis.com/pkg.Message]`, brackets included.
pub fn extension_name<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<String> {
    p.expect(TokenKind::LeftBracket)?;
    let mut name = String::from("[");
    name.push_str(p.expect_word("extension name")?);

    while p.at(TokenKind::Dot) || p.at(TokenKind::Slash) {
        name.push_str(p.current_text());
        p.advance()?;
        name.push_str(p.expect_word("extension name")?);
    }

    p.expect(TokenKind::RightBracket)?;
    name.push(']');
    Ok(name)
}

/// Any value that may follow `:`.
pub fn value<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<()> {
    match p.current_kind() {
        Some(TokenKind::LeftBrace | TokenKind::LeftAngle) => message_literal(p),
        Some(TokenKind::LeftBracket) => list(p),
        Some(TokenKind::String) => string_concat(p).map(drop),
        Some(kind) if is_scalar(kind) => p.advance(),
        _ => Err(p.expected("value")),
    }
}

/// `[ value, ... ]`, possibly empty.
pub fn list<K: TreeKind>(p: &mut Parser<'_, K>) -> ParseResult<()> {
    p.expect(TokenKind::LeftBracket)?;

    if !p.at(TokenKind::RightBracket) {
        loop {
            value(p)?;
            if !p.eat(TokenKind::Comma)? {
                break;
            }
        }
    }

    p.expect(TokenKind::RightBracket).map(drop)
}

/// Single-token values: numbers, booleans and identifiers.
pub fn is_scalar(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Integer(_) | TokenKind::Float | TokenKind::Boolean) || kind.is_word()
}
