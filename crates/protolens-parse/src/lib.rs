//! Recursive-descent parser for proto3 schema files.
//!
//! [`parse`] tokenizes the text, then walks the tokens once, building a
//! [`Document`] whose nodes carry exact byte ranges. The first syntax error
//! aborts the parse; no partial tree is returned.

mod grammar;
pub mod literal;
mod parser;
mod stream;

pub use parser::{Marker, ParseResult, Parser};
pub use protolens_errors::ParseError;
pub use protolens_syntax::Document;
pub use stream::{StreamExhausted, TokenStream};

pub fn parse(text: &str) -> Result<Document, ParseError> {
    let tokens = protolens_tokenizer::tokenize(text);
    tracing::trace!(tokens = tokens.len(), "tokenized");

    let mut parser = grammar::ProtoParser::new(text, tokens);
    match grammar::items::document(&mut parser) {
        Ok(()) => {
            let document = parser.finish_tree();
            tracing::debug!(len = text.len(), nodes = document.len(), "parsed document");
            Ok(document)
        }
        Err(error) => {
            tracing::debug!(%error, "parse aborted");
            Err(error)
        }
    }
}
