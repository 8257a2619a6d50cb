use protolens_syntax::{FieldModifier, NodeId, NodeKind, ReservedEntry};
use protolens_tokenizer::{Keyword, TokenKind};

use super::{ProtoParser, integer, open_block, options, type_name};
use crate::literal::unquote;
use crate::parser::ParseResult;

/// `message Name { ... }`
pub(super) fn message(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Message)?;
    let name = p.expect_word("message name")?.to_owned();
    open_block(p, m, NodeKind::Message { name })?;

    loop {
        match p.current_kind() {
            Some(TokenKind::RightBrace) => return p.close(TokenKind::RightBrace),
            Some(TokenKind::Semicolon) => p.advance()?,
            Some(TokenKind::Keyword(Keyword::Option)) => {
                options::option_statement(p)?;
            }
            Some(TokenKind::Keyword(Keyword::Message)) => {
                message(p)?;
            }
            Some(TokenKind::Keyword(Keyword::Enum)) => {
                enumeration(p)?;
            }
            Some(TokenKind::Keyword(Keyword::Oneof)) => {
                oneof(p)?;
            }
            Some(TokenKind::Keyword(Keyword::Reserved)) => {
                reserved(p)?;
            }
            Some(kind) if kind == TokenKind::Dot || kind.is_word() => {
                field(p)?;
            }
            _ => return Err(p.expected("message body declaration")),
        }
    }
}

/// `oneof name { ... }`
fn oneof(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Oneof)?;
    let name = p.expect_word("oneof name")?.to_owned();
    open_block(p, m, NodeKind::Oneof { name })?;

    loop {
        match p.current_kind() {
            Some(TokenKind::RightBrace) => return p.close(TokenKind::RightBrace),
            Some(TokenKind::Semicolon) => p.advance()?,
            Some(TokenKind::Keyword(Keyword::Option)) => {
                options::option_statement(p)?;
            }
            Some(kind) if kind == TokenKind::Dot || kind.is_word() => {
                field(p)?;
            }
            _ => return Err(p.expected("oneof field")),
        }
    }
}

/// `[repeated|optional] Type name = N [options];` or
/// `map<K, V> name = N [options];`
fn field(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();

    let (modifier, ty) = match p.current_kind() {
        Some(TokenKind::Keyword(Keyword::Repeated)) => {
            p.advance()?;
            (Some(FieldModifier::Repeated), type_name(p)?)
        }
        Some(TokenKind::Keyword(Keyword::Optional)) => {
            p.advance()?;
            (Some(FieldModifier::Optional), type_name(p)?)
        }
        Some(TokenKind::Keyword(Keyword::Map)) if p.nth_kind(1) == Some(TokenKind::LeftAngle) => {
            let (key, value) = map_type(p)?;
            let ty = format!("map<{key}, {value}>");
            (Some(FieldModifier::Map { key, value }), ty)
        }
        _ => (None, type_name(p)?),
    };

    let name = p.expect_word("field name")?.to_owned();
    p.expect(TokenKind::Eq)?;
    let number = integer(p, "field number")?.to_owned();
    let kind = NodeKind::Field { name, number, ty, modifier };

    if p.at(TokenKind::LeftBracket) {
        m.open(p, kind);
        options::field_options(p)?;
        return p.close(TokenKind::Semicolon);
    }

    p.expect(TokenKind::Semicolon)?;
    Ok(m.complete(p, kind))
}

fn map_type(p: &mut ProtoParser<'_>) -> ParseResult<(String, String)> {
    p.expect_keyword(Keyword::Map)?;
    p.expect(TokenKind::LeftAngle)?;
    let key = type_name(p)?;
    p.expect(TokenKind::Comma)?;
    let value = type_name(p)?;
    p.expect(TokenKind::RightAngle)?;
    Ok((key, value))
}

/// `reserved "a", "b";` or `reserved 1, 3 to 5, 10 to max;`
fn reserved(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Reserved)?;

    let names = p.at(TokenKind::String);
    let mut entries = Vec::new();
    loop {
        let entry = if names {
            let literal = p.expect_text(TokenKind::String, "reserved name")?;
            ReservedEntry::Name(unquote(literal).to_owned())
        } else {
            reserved_range(p)?
        };
        entries.push(entry);

        if !p.eat(TokenKind::Comma)? {
            break;
        }
    }

    p.expect(TokenKind::Semicolon)?;
    Ok(m.complete(p, NodeKind::Reserved { entries }))
}

fn reserved_range(p: &mut ProtoParser<'_>) -> ParseResult<ReservedEntry> {
    let start = integer(p, "reserved field number")?.to_owned();
    if !p.eat_keyword(Keyword::To)? {
        return Ok(ReservedEntry::Range { start, end: None });
    }

    let end = if p.at(TokenKind::Identifier) && p.current_text() == "max" {
        p.advance()?;
        "max"
    } else {
        integer(p, "range end")?
    };
    Ok(ReservedEntry::Range { start, end: Some(end.to_owned()) })
}

/// `enum Name { ... }`
pub(super) fn enumeration(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Enum)?;
    let name = p.expect_word("enum name")?.to_owned();
    open_block(p, m, NodeKind::Enum { name })?;

    loop {
        match p.current_kind() {
            Some(TokenKind::RightBrace) => return p.close(TokenKind::RightBrace),
            Some(TokenKind::Semicolon) => p.advance()?,
            Some(TokenKind::Keyword(Keyword::Option)) => {
                options::option_statement(p)?;
            }
            Some(TokenKind::Keyword(Keyword::Reserved)) => {
                reserved(p)?;
            }
            Some(kind) if kind.is_word() => {
                enum_value(p)?;
            }
            _ => return Err(p.expected("enum value")),
        }
    }
}

/// `NAME = N [options];`
fn enum_value(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    let name = p.expect_word("enum value name")?.to_owned();
    p.expect(TokenKind::Eq)?;
    let number = integer(p, "enum value number")?.to_owned();
    let kind = NodeKind::EnumValue { name, number };

    if p.at(TokenKind::LeftBracket) {
        m.open(p, kind);
        options::field_options(p)?;
        return p.close(TokenKind::Semicolon);
    }

    p.expect(TokenKind::Semicolon)?;
    Ok(m.complete(p, kind))
}
