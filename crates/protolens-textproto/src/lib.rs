//! Text-format data literals (`.textproto`, `.txtpb`).
//!
//! Nested messages become [`TextNodeKind::Message`] containers; scalar and
//! list values are kept as source text.

mod grammar;
mod lexer;
mod syntax;

pub use lexer::{Lexer, tokenize};
use protolens_errors::ParseError;
pub use syntax::{TextDocument, TextNodeKind};

pub fn parse(text: &str) -> Result<TextDocument, ParseError> {
    let tokens = tokenize(text);
    tracing::trace!(tokens = tokens.len(), "tokenized text format");

    let mut parser = grammar::TextParser::new(text, tokens);
    match grammar::document(&mut parser) {
        Ok(()) => {
            let document = parser.finish_tree();
            tracing::debug!(len = text.len(), nodes = document.len(), "parsed text format");
            Ok(document)
        }
        Err(error) => {
            tracing::debug!(%error, "text format parse aborted");
            Err(error)
        }
    }
}
