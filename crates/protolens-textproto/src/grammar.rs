use protolens_parse::literal::{field_name, is_scalar, list, separator, string_concat};
use protolens_parse::{Marker, ParseResult, Parser};
use protolens_syntax::NodeId;
use protolens_tokenizer::TokenKind;
use text_size::TextRange;

use crate::syntax::TextNodeKind;

pub(crate) type TextParser<'a> = Parser<'a, TextNodeKind>;

pub(crate) fn document(p: &mut TextParser<'_>) -> ParseResult<()> {
    while !p.at_end() {
        field(p)?;
    }
    Ok(())
}

fn field(p: &mut TextParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    let name = field_name(p)?;
    let colon = p.eat(TokenKind::Colon)?;

    let id = match p.current_kind() {
        Some(TokenKind::LeftBrace | TokenKind::LeftAngle) => message(p, m, name)?,
        Some(TokenKind::LeftBracket) if colon => {
            let start = p.current().map_or(m.start(), |token| token.start());
            list(p)?;
            let value = p.text()[TextRange::new(start, p.prev_end())].to_owned();
            m.complete(p, TextNodeKind::Field { name, value })
        }
        Some(TokenKind::String) if colon => {
            let value = string_concat(p)?;
            m.complete(p, TextNodeKind::Field { name, value })
        }
        Some(kind) if colon && is_scalar(kind) => {
            let value = p.current_text().to_owned();
            p.advance()?;
            m.complete(p, TextNodeKind::Field { name, value })
        }
        _ if colon => return Err(p.expected("value")),
        _ => return Err(p.expected("':' or '{'")),
    };

    separator(p)?;
    Ok(id)
}

/// `{ fields }` or `< fields >` as a container of nested fields.
fn message(p: &mut TextParser<'_>, m: Marker, name: String) -> ParseResult<NodeId> {
    let close = match p.current_kind() {
        Some(TokenKind::LeftAngle) => TokenKind::RightAngle,
        _ => TokenKind::RightBrace,
    };
    m.open(p, TextNodeKind::Message { name });
    p.advance()?;

    while !p.at(close) {
        if p.at_end() {
            return Err(p.expected(close.describe()));
        }
        field(p)?;
    }

    p.close(close)
}
