use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
use line_index::LineIndex;
pub use text_size::{TextRange, TextSize};

/// The error that aborts a parse.
///
/// `line` and `column` are 1-based; the column counts bytes from the start of
/// the line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    message: String,
    range: TextRange,
    line: u32,
    column: u32,
}

impl ParseError {
    pub fn new(message: impl Into<String>, range: TextRange, text: &str) -> Self {
        let line_col = LineIndex::new(text).line_col(range.start());
        Self { message: message.into(), range, line: line_col.line + 1, column: line_col.col + 1 }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}
