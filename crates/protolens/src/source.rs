use anyhow::Context as _;
use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use protolens_errors::ParseError;
use protolens_syntax::{Document, NodeId, Tree, TreeKind};
use protolens_textproto::TextDocument;
use protolens_tokenizer::{Token, TokenKind};
use serde::Serialize;

const TEXT_FORMAT_EXTENSIONS: [&str; 4] = ["textproto", "txtpb", "pbtxt", "prototxt"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Lang {
    Proto,
    Textproto,
}

impl Lang {
    pub(crate) fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(extension) if TEXT_FORMAT_EXTENSIONS.contains(&extension) => Self::Textproto,
            _ => Self::Proto,
        }
    }
}

pub(crate) struct SourceFile {
    pub(crate) path: Utf8PathBuf,
    pub(crate) text: String,
    pub(crate) lang: Lang,
}

impl SourceFile {
    pub(crate) fn read(path: Utf8PathBuf, lang: Option<Lang>) -> anyhow::Result<Self> {
        let text =
            std::fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?;
        let lang = lang.unwrap_or_else(|| Lang::from_path(&path));
        tracing::debug!(%path, ?lang, len = text.len(), "read source");
        Ok(Self { path, text, lang })
    }

    pub(crate) fn tokens(&self) -> Vec<Token> {
        match self.lang {
            Lang::Proto => protolens_tokenizer::tokenize(&self.text),
            Lang::Textproto => protolens_textproto::tokenize(&self.text),
        }
    }

    pub(crate) fn tokens_json(&self) -> serde_json::Result<String> {
        let tokens = self
            .tokens()
            .into_iter()
            .map(|token| JsonToken {
                kind: token.kind,
                start: token.start().into(),
                end: token.end().into(),
                text: token.text(&self.text),
            })
            .collect::<Vec<_>>();
        serde_json::to_string_pretty(&tokens)
    }

    pub(crate) fn parse(&self) -> Result<Parsed, ParseError> {
        match self.lang {
            Lang::Proto => protolens_parse::parse(&self.text).map(Parsed::Proto),
            Lang::Textproto => protolens_textproto::parse(&self.text).map(Parsed::Text),
        }
    }
}

pub(crate) enum Parsed {
    Proto(Document),
    Text(TextDocument),
}

impl Parsed {
    pub(crate) fn to_tree_string(&self) -> String {
        match self {
            Self::Proto(document) => document.to_string(),
            Self::Text(document) => document.to_string(),
        }
    }

    pub(crate) fn to_json(&self) -> serde_json::Result<String> {
        match self {
            Self::Proto(document) => serde_json::to_string_pretty(&JsonNode::root(document)),
            Self::Text(document) => serde_json::to_string_pretty(&JsonNode::root(document)),
        }
    }
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: TokenKind,
    start: u32,
    end: u32,
    text: &'a str,
}

#[derive(Serialize)]
struct JsonNode<'a, K> {
    #[serde(flatten)]
    kind: &'a K,
    start: u32,
    end: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode<'a, K>>,
}

impl<'a, K: TreeKind> JsonNode<'a, K> {
    fn root(tree: &'a Tree<K>) -> Self {
        Self::new(tree, tree.root())
    }

    fn new(tree: &'a Tree<K>, id: NodeId) -> Self {
        let node = &tree[id];
        Self {
            kind: node.kind(),
            start: node.start().into(),
            end: node.end().into(),
            children: node.children().iter().map(|&child| Self::new(tree, child)).collect(),
        }
    }
}
