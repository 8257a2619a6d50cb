use protolens_syntax::{NodeId, NodeKind};
use protolens_tokenizer::TokenKind;

use crate::parser::{Marker, ParseResult, Parser};

pub(crate) mod items;
mod messages;
mod options;
mod services;

pub(crate) type ProtoParser<'a> = Parser<'a, NodeKind>;

/// `a.b.c`, optionally allowing a leading `.` for package-rooted names.
fn full_ident(p: &mut ProtoParser<'_>, what: &str, leading_dot: bool) -> ParseResult<String> {
    let mut ident = String::new();
    if leading_dot && p.eat(TokenKind::Dot)? {
        ident.push('.');
    }
    ident.push_str(p.expect_word(what)?);

    while p.at(TokenKind::Dot) {
        p.advance()?;
        ident.push('.');
        ident.push_str(p.expect_word(what)?);
    }

    Ok(ident)
}

/// A primitive type or a (possibly fully-qualified) message or enum name.
fn type_name(p: &mut ProtoParser<'_>) -> ParseResult<String> {
    match p.current_kind() {
        Some(TokenKind::Primitive(primitive)) => {
            p.advance()?;
            Ok(primitive.as_str().to_owned())
        }
        Some(TokenKind::Dot) => full_ident(p, "type name", true),
        Some(kind) if kind.is_word() => full_ident(p, "type name", true),
        _ => Err(p.expected("type name")),
    }
}

fn integer<'a>(p: &mut ProtoParser<'a>, what: &str) -> ParseResult<&'a str> {
    if !matches!(p.current_kind(), Some(TokenKind::Integer(_))) {
        return Err(p.expected(what));
    }
    let text = p.current_text();
    p.advance()?;
    Ok(text)
}

/// Opens `kind` as a container on the `{` at the current token.
fn open_block(p: &mut ProtoParser<'_>, m: Marker, kind: NodeKind) -> ParseResult<NodeId> {
    if !p.at(TokenKind::LeftBrace) {
        return Err(p.expected("'{'"));
    }
    let id = m.open(p, kind);
    p.advance()?;
    Ok(id)
}
