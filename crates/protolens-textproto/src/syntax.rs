use std::fmt;

use protolens_syntax::{Tree, TreeKind};
use serde::Serialize;

pub type TextDocument = Tree<TextNodeKind>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TextNodeKind {
    Document,
    Comment,
    /// A scalar or list field. `value` is its source text, with adjacent
    /// strings joined into one literal.
    Field {
        name: String,
        value: String,
    },
    /// `name { ... }` or `name < ... >`; the nested fields are children.
    Message {
        name: String,
    },
}

impl TextNodeKind {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field { name, .. } | Self::Message { name } => Some(name),
            Self::Document | Self::Comment => None,
        }
    }
}

impl TreeKind for TextNodeKind {
    fn root() -> Self {
        Self::Document
    }

    fn comment() -> Self {
        Self::Comment
    }

    fn is_comment(&self) -> bool {
        matches!(self, Self::Comment)
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Comment => "Comment",
            Self::Field { .. } => "Field",
            Self::Message { .. } => "Message",
        }
    }

    fn fmt_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document | Self::Comment => Ok(()),
            Self::Field { name, value } => write!(f, " name={name} value={value}"),
            Self::Message { name } => write!(f, " name={name}"),
        }
    }
}
