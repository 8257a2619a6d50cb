use protolens_syntax::{NodeId, NodeKind};
use protolens_tokenizer::{Keyword, TokenKind};

use super::{ProtoParser, open_block, options, type_name};
use crate::parser::ParseResult;

/// `service Name { ... }`
pub(super) fn service(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Service)?;
    let name = p.expect_word("service name")?.to_owned();
    open_block(p, m, NodeKind::Service { name })?;

    loop {
        match p.current_kind() {
            Some(TokenKind::RightBrace) => return p.close(TokenKind::RightBrace),
            Some(TokenKind::Semicolon) => p.advance()?,
            Some(TokenKind::Keyword(Keyword::Option)) => {
                options::option_statement(p)?;
            }
            Some(TokenKind::Keyword(Keyword::Rpc)) => {
                rpc(p)?;
            }
            _ => return Err(p.expected("'rpc' or 'option'")),
        }
    }
}

/// `rpc Name (Req) returns (Resp);` or with a `{ option ...; }` body.
fn rpc(p: &mut ProtoParser<'_>) -> ParseResult<NodeId> {
    let m = p.start();
    p.expect_keyword(Keyword::Rpc)?;
    let name = p.expect_word("rpc name")?.to_owned();

    let (request_stream, request) = rpc_type(p)?;
    p.expect_keyword(Keyword::Returns)?;
    let (response_stream, response) = rpc_type(p)?;
    let kind = NodeKind::Rpc { name, request, request_stream, response, response_stream };

    if !p.at(TokenKind::LeftBrace) {
        p.expect(TokenKind::Semicolon)?;
        return Ok(m.complete(p, kind));
    }

    let id = open_block(p, m, kind)?;
    loop {
        match p.current_kind() {
            Some(TokenKind::RightBrace) => break,
            Some(TokenKind::Semicolon) => p.advance()?,
            Some(TokenKind::Keyword(Keyword::Option)) => {
                options::option_statement(p)?;
            }
            _ => return Err(p.expected("'option' or '}'")),
        }
    }
    p.close(TokenKind::RightBrace)?;
    p.eat(TokenKind::Semicolon)?;
    Ok(id)
}

/// `( [stream] Type )`
fn rpc_type(p: &mut ProtoParser<'_>) -> ParseResult<(bool, String)> {
    p.expect(TokenKind::LeftParen)?;

    let stream = p.at_keyword(Keyword::Stream) && p.nth_kind(1) != Some(TokenKind::RightParen);
    if stream {
        p.advance()?;
    }
    let ty = type_name(p)?;

    p.expect(TokenKind::RightParen)?;
    Ok((stream, ty))
}
