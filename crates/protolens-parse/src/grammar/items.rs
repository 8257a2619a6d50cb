use protolens_syntax::{ImportModifier, NodeId, NodeKind};
use protolens_tokenizer::{Keyword, TokenKind};

use super::{ProtoParser, full_ident, messages, options, services};
use crate::literal::unquote;
use crate::parser::ParseResult;

pub(crate) fn document(p: &mut ProtoParser<'_>) -> ParseResult<()> {
    while let Some(kind) = p.current_kind() {
        match kind {
            TokenKind::Keyword(Keyword::Syntax) => {
                syntax(p)?;
            }
            TokenKind::Keyword(Keyword::Import) => {
                import(p)?;
            }
            TokenKind::Keyword(Keyword::Package) => {
                package(p)?;
            }
            TokenKind::Keyword(Keyword::Option) => {
                options::option_statement(p)?;
            }
            TokenKind::Keyword(Keyword::Message) => {
                messages::message(p)?;
            }
            TokenKind::Keyword(Keyword::Enum) => {
                messages::enumeration(p)?;
            }
            TokenKind::Keyword(Keyword::Service) => {
                services::service(p)?;
            }
            TokenKind::Semicolon => p.advance()?,
            _ => return Err(p.expected("top-level declaration")),
        }
    }

    Ok(())
}

/// `syntax = "proto3";`
fn syntax(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Syntax)?;
    p.expect(TokenKind::Eq)?;

    if !p.at(TokenKind::String) {
        return Err(p.expected("string literal"));
    }
    let literal = p.current_text();
    if literal != "\"proto3\"" && literal != "'proto3'" {
        return Err(p.error(format!("expected \"proto3\", found {literal}")));
    }
    p.advance()?;

    p.expect(TokenKind::Semicolon)?;
    Ok(m.complete(p, NodeKind::Syntax { version: unquote(literal).to_owned() }))
}

/// `import [public|weak] "path";`
fn import(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Import)?;

    let modifier = match p.current_kind() {
        Some(TokenKind::Keyword(Keyword::Public)) => Some(ImportModifier::Public),
        Some(TokenKind::Keyword(Keyword::Weak)) => Some(ImportModifier::Weak),
        _ => None,
    };
    if modifier.is_some() {
        p.advance()?;
    }

    let path = p.expect_text(TokenKind::String, "import path")?.to_owned();
    p.expect(TokenKind::Semicolon)?;
    Ok(m.complete(p, NodeKind::Import { path, modifier }))
}

/// `package a.b.c;`
fn package(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Package)?;
    let name = full_ident(p, "package name", false)?;
    p.expect(TokenKind::Semicolon)?;
    Ok(m.complete(p, NodeKind::Package { name }))
}
