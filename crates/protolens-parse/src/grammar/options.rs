use protolens_syntax::{NodeId, NodeKind};
use protolens_tokenizer::{Keyword, TokenKind};
use text_size::TextRange;

use super::{ProtoParser, full_ident};
use crate::literal::{is_scalar, message_literal, string_concat};
use crate::parser::ParseResult;

/// `option name = value;`
pub(super) fn option_statement(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Option)?;
    let name = option_name(p)?;
    m.open(p, NodeKind::Option { name });

    p.expect(TokenKind::Eq)?;
    option_value(p)?;
    p.close(TokenKind::Semicolon)
}

/// `[name = value, ...]` after a field or enum value, whose node must be
/// the open container.
pub(super) fn field_options(p: &mut ProtoParser<'_>) -> ParseResult<()> {
    p.expect(TokenKind::LeftBracket)?;

    loop {
        let m = p.start();
        let name = option_name(p)?;
        m.open(p, NodeKind::Option { name });
        p.expect(TokenKind::Eq)?;
        option_value(p)?;
        p.finish();

        if !p.eat(TokenKind::Comma)? {
            break;
        }
    }

    p.expect(TokenKind::RightBracket).map(drop)
}

/// `a.b`, `(ext.name)` or `(ext.name).field.path`.
fn option_name(p: &mut ProtoParser<'_>) -> ParseResult<String> {
    if !p.at(TokenKind::LeftParen) {
        return full_ident(p, "option name", false);
    }

    p.advance()?;
    let mut name = String::from("(");
    name.push_str(&full_ident(p, "option name", true)?);
    p.expect(TokenKind::RightParen)?;
    name.push(')');

    if p.eat(TokenKind::Dot)? {
        name.push('.');
        name.push_str(&full_ident(p, "option name", false)?);
    }

    Ok(name)
}

fn option_value(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();

    let text = match p.current_kind() {
        Some(TokenKind::String) => string_concat(p)?,
        Some(TokenKind::LeftBrace | TokenKind::LeftAngle) => {
            message_literal(p)?;
            p.text()[TextRange::new(m.start(), p.prev_end())].to_owned()
        }
        Some(kind) if is_scalar(kind) => {
            let text = p.current_text().to_owned();
            p.advance()?;
            text
        }
        _ => return Err(p.expected("option value")),
    };

    Ok(m.complete(p, NodeKind::OptionValue { text }))
}
