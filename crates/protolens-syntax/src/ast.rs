//! Node kinds of a parsed proto3 document.

use std::fmt;

use serde::Serialize;

use crate::tree::{NodeId, Tree, TreeKind};

pub type Document = Tree<NodeKind>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum NodeKind {
    Document,
    /// A run of consecutive comment tokens.
    Comment,
    Syntax {
        version: String,
    },
    Import {
        /// The path literal, quotes included.
        path: String,
        modifier: Option<ImportModifier>,
    },
    Package {
        name: String,
    },
    /// The value is the node's single [`NodeKind::OptionValue`] child.
    Option {
        name: String,
    },
    OptionValue {
        text: String,
    },
    Message {
        name: String,
    },
    Oneof {
        name: String,
    },
    Field {
        name: String,
        number: String,
        ty: String,
        modifier: Option<FieldModifier>,
    },
    Reserved {
        entries: Vec<ReservedEntry>,
    },
    Enum {
        name: String,
    },
    EnumValue {
        name: String,
        number: String,
    },
    Service {
        name: String,
    },
    Rpc {
        name: String,
        request: String,
        request_stream: bool,
        response: String,
        response_stream: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ImportModifier {
    Public,
    Weak,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FieldModifier {
    Repeated,
    Optional,
    Map { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ReservedEntry {
    /// A reserved field name, without quotes.
    Name(String),
    /// `start` alone or `start to end`; `end` may be `max`.
    Range { start: String, end: Option<String> },
}

impl NodeKind {
    /// The declared name, for kinds that introduce one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Package { name }
            | Self::Option { name }
            | Self::Message { name }
            | Self::Oneof { name }
            | Self::Field { name, .. }
            | Self::Enum { name }
            | Self::EnumValue { name, .. }
            | Self::Service { name }
            | Self::Rpc { name, .. } => Some(name),
            Self::Document
            | Self::Comment
            | Self::Syntax { .. }
            | Self::Import { .. }
            | Self::OptionValue { .. }
            | Self::Reserved { .. } => None,
        }
    }
}

impl TreeKind for NodeKind {
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
            Self::Syntax { .. } => "Syntax",
            Self::Import { .. } => "Import",
            Self::Package { .. } => "Package",
            Self::Option { .. } => "Option",
            Self::OptionValue { .. } => "OptionValue",
            Self::Message { .. } => "Message",
            Self::Oneof { .. } => "Oneof",
            Self::Field { .. } => "Field",
            Self::Reserved { .. } => "Reserved",
            Self::Enum { .. } => "Enum",
            Self::EnumValue { .. } => "EnumValue",
            Self::Service { .. } => "Service",
            Self::Rpc { .. } => "Rpc",
        }
    }

    fn fmt_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document | Self::Comment => Ok(()),
            Self::Syntax { version } => write!(f, " version={version}"),
            Self::Import { path, modifier } => {
                write!(f, " path={path}")?;
                match modifier {
                    Some(ImportModifier::Public) => f.write_str(" public"),
                    Some(ImportModifier::Weak) => f.write_str(" weak"),
                    None => Ok(()),
                }
            }
            Self::Package { name }
            | Self::Option { name }
            | Self::Message { name }
            | Self::Oneof { name }
            | Self::Enum { name }
            | Self::Service { name } => write!(f, " name={name}"),
            Self::OptionValue { text } => write!(f, " text={text}"),
            Self::Field { name, number, ty, modifier } => {
                write!(f, " name={name} number={number} type={ty}")?;
                match modifier {
                    Some(FieldModifier::Repeated) => f.write_str(" repeated"),
                    Some(FieldModifier::Optional) => f.write_str(" optional"),
                    Some(FieldModifier::Map { .. }) | None => Ok(()),
                }
            }
            Self::Reserved { entries } => {
                for (i, entry) in entries.iter().enumerate() {
                    f.write_str(if i == 0 { " " } else { ", " })?;
                    match entry {
                        ReservedEntry::Name(name) => write!(f, "{name:?}")?,
                        ReservedEntry::Range { start, end: Some(end) } => {
                            write!(f, "{start} to {end}")?;
                        }
                        ReservedEntry::Range { start, end: None } => f.write_str(start)?,
                    }
                }
                Ok(())
            }
            Self::EnumValue { name, number } => write!(f, " name={name} number={number}"),
            Self::Rpc { name, request, request_stream, response, response_stream } => {
                write!(f, " name={name} request=")?;
                if *request_stream {
                    f.write_str("stream ")?;
                }
                write!(f, "{request} response=")?;
                if *response_stream {
                    f.write_str("stream ")?;
                }
                f.write_str(response)
            }
        }
    }
}

impl Document {
    /// Text of the value attached to an `Option` node.
    pub fn option_value(&self, option: NodeId) -> Option<&str> {
        self.children(option).iter().find_map(|&child| match self.kind(child) {
            NodeKind::OptionValue { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// `Option` children of a node, e.g. the `[...]` options of a field.
    pub fn options(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| matches!(self.kind(child), NodeKind::Option { .. }))
    }

    /// Children that are not comments.
    pub fn declarations(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).iter().copied().filter(|&child| !self.kind(child).is_comment())
    }
}
