use protolens_errors::ParseError;
use protolens_syntax::{NodeId, Tree, TreeKind};
use protolens_tokenizer::{Keyword, Token, TokenKind};
use text_size::{TextLen as _, TextRange, TextSize};

use crate::stream::{StreamExhausted, TokenStream};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser state shared by the proto3 and text-format
/// grammars.
///
/// Open containers live on an explicit stack whose top receives every new
/// node. Each advance absorbs the run of comment tokens that follows into a
/// single comment node of that container.
pub struct Parser<'a, K> {
    tokens: TokenStream<'a>,
    tree: Tree<K>,
    stack: Vec<NodeId>,
    prev_end: TextSize,
}

impl<'a, K: TreeKind> Parser<'a, K> {
    pub fn new(text: &'a str, tokens: Vec<Token>) -> Self {
        let tree = Tree::new(text.text_len());
        let mut parser = Self {
            tokens: TokenStream::new(text, tokens),
            stack: vec![tree.root()],
            tree,
            prev_end: TextSize::new(0),
        };
        parser.absorb_comments();
        parser
    }

    pub fn text(&self) -> &'a str {
        self.tokens.text()
    }

    pub fn tree(&self) -> &Tree<K> {
        &self.tree
    }

    pub fn token_count(&self) -> usize {
        self.tokens.tokens().len()
    }

    /// The innermost open container.
    pub fn container(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId::ROOT)
    }

    pub fn current(&self) -> Option<Token> {
        self.tokens.current()
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.tokens.current().map(|token| token.kind)
    }

    pub fn current_text(&self) -> &'a str {
        self.tokens.current_text()
    }

    pub fn nth_kind(&self, k: usize) -> Option<TokenKind> {
        self.tokens.look_ahead(k).map(|token| token.kind)
    }

    pub fn at_end(&self) -> bool {
        self.tokens.is_end_of_stream()
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub fn at_keyword(&self, keyword: Keyword) -> bool {
        self.at(TokenKind::Keyword(keyword))
    }

    /// End offset of the last consumed token.
    pub fn prev_end(&self) -> TextSize {
        self.prev_end
    }

    /// Consumes the current token, then attaches any comments that follow
    /// it to the open container.
    pub fn advance(&mut self) -> ParseResult<()> {
        let Some(token) = self.current() else {
            return Err(self.unexpected_end());
        };
        self.tokens.move_next().map_err(|StreamExhausted| self.unexpected_end())?;
        self.prev_end = token.end();
        self.absorb_comments();
        Ok(())
    }

    fn absorb_comments(&mut self) {
        let mut run = None;

        while let Some(token) = self.current().filter(|token| token.kind.is_comment()) {
            match run {
                Some(comment) => self.tree.set_end(comment, token.end()),
                None => {
                    let container = self.container();
                    run = Some(self.tree.push_child(container, K::comment(), token.range));
                }
            }

            if self.tokens.move_next().is_err() {
                break;
            }
        }
    }

    pub fn eat(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.at(kind) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn eat_keyword(&mut self, keyword: Keyword) -> ParseResult<bool> {
        self.eat(TokenKind::Keyword(keyword))
    }

    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.advance()?;
                Ok(token)
            }
            _ => Err(self.expected(kind.describe())),
        }
    }

    pub fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<Token> {
        self.expect(TokenKind::Keyword(keyword))
    }

    /// Consumes a token of the given kind and returns its text.
    pub fn expect_text(&mut self, kind: TokenKind, what: &str) -> ParseResult<&'a str> {
        if !self.at(kind) {
            return Err(self.expected(what));
        }
        let text = self.current_text();
        self.advance()?;
        Ok(text)
    }

    /// Consumes an identifier or reserved word used as a name.
    pub fn expect_word(&mut self, what: &str) -> ParseResult<&'a str> {
        if !self.current_kind().is_some_and(TokenKind::is_word) {
            return Err(self.expected(what));
        }
        let text = self.current_text();
        self.advance()?;
        Ok(text)
    }

    /// Begins a node at the current token.
    pub fn start(&self) -> Marker {
        let parent = self.container();
        let start = self.current().map_or_else(|| self.text().text_len(), |token| token.start());
        Marker { start, parent, index: self.tree.children(parent).len() }
    }

    /// Closes the innermost container on its closing token, which is
    /// consumed after the container is popped.
    pub fn close(&mut self, closing: TokenKind) -> ParseResult<NodeId> {
        let token = match self.current() {
            Some(token) if token.kind == closing => token,
            _ => return Err(self.expected(closing.describe())),
        };

        let id = self.pop();
        self.tree.set_end(id, token.end());
        self.advance()?;
        Ok(id)
    }

    /// Closes the innermost container without a closing token of its own.
    pub fn finish(&mut self) -> NodeId {
        let id = self.pop();
        let children_end = self.tree.last_child(id).map(|child| self.tree.range(child).end());
        let end = children_end.map_or(self.prev_end, |end| end.max(self.prev_end));
        self.tree.set_end(id, end);
        id
    }

    fn pop(&mut self) -> NodeId {
        debug_assert!(self.stack.len() > 1, "the root is never closed");
        self.stack.pop().unwrap_or(NodeId::ROOT)
    }

    pub fn finish_tree(self) -> Tree<K> {
        debug_assert_eq!(self.stack.len(), 1, "unclosed containers");
        self.tree
    }

    pub fn error(&self, message: impl Into<String>) -> ParseError {
        let range = match self.current() {
            Some(token) => token.range,
            None => TextRange::empty(self.text().text_len()),
        };
        ParseError::new(message, range, self.text())
    }

    /// "expected X, found Y" at the current token.
    pub fn expected(&self, what: &str) -> ParseError {
        match self.current() {
            Some(_) => self.error(format!("expected {what}, found '{}'", self.current_text())),
            None => self.error(format!("expected {what}, found end of input")),
        }
    }

    fn unexpected_end(&self) -> ParseError {
        self.error("unexpected end of input")
    }
}

/// A node whose first token has been seen but whose kind is not known yet.
///
/// The node is inserted at the position the marker was started at, so
/// comments absorbed while it was pending end up after it.
#[must_use]
pub struct Marker {
    start: TextSize,
    parent: NodeId,
    index: usize,
}

impl Marker {
    pub fn start(&self) -> TextSize {
        self.start
    }

    /// Creates a leaf node ending at the last consumed token.
    pub fn complete<K: TreeKind>(self, p: &mut Parser<'_, K>, kind: K) -> NodeId {
        debug_assert_eq!(p.container(), self.parent);
        let range = TextRange::new(self.start, p.prev_end.max(self.start));
        p.tree.insert_child(self.parent, self.index, kind, range)
    }

    /// Creates a container node and makes it the target for new nodes until
    /// it is closed.
    pub fn open<K: TreeKind>(self, p: &mut Parser<'_, K>, kind: K) -> NodeId {
        debug_assert_eq!(p.container(), self.parent);
        let id = p.tree.insert_child(self.parent, self.index, kind, TextRange::empty(self.start));
        p.stack.push(id);
        id
    }
}
