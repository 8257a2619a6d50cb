use protolens_tokenizer::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token stream exhausted")]
pub struct StreamExhausted;

/// Cursor over a pre-built token array.
///
/// The position may sit one past the last token, where every accessor
/// reports nothing; moving beyond that point fails.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str, tokens: Vec<Token>) -> Self {
        Self { text, tokens, pos: 0 }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<Token> {
        self.look_ahead(0)
    }

    pub fn peek_next(&self) -> Option<Token> {
        self.look_ahead(1)
    }

    pub fn look_ahead(&self, k: usize) -> Option<Token> {
        self.tokens.get(self.pos + k).copied()
    }

    pub fn current_text(&self) -> &'a str {
        self.look_ahead_text(0)
    }

    pub fn peek_next_text(&self) -> &'a str {
        self.look_ahead_text(1)
    }

    pub fn look_ahead_text(&self, k: usize) -> &'a str {
        self.look_ahead(k).map_or("", |token| token.text(self.text))
    }

    pub fn move_next(&mut self) -> Result<(), StreamExhausted> {
        if self.is_end_of_stream() {
            return Err(StreamExhausted);
        }
        self.pos += 1;
        Ok(())
    }
}
