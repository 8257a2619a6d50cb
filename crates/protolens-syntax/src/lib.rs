//! Position-annotated syntax trees.
//!
//! Trees are arenas of nodes addressed by [`NodeId`]. Every node records the
//! half-open byte range it covers in the parsed text; children always lie
//! within their parent's range.

/// Node kinds of proto3 documents.
pub mod ast;
mod tree;

pub use ast::{Document, FieldModifier, ImportModifier, NodeKind, ReservedEntry};
pub use text_size::{TextRange, TextSize};
pub use tree::{Node, NodeId, Tree, TreeKind};

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(start.into(), end.into())
    }

    /// `message A { int32 a = 1; }` built by hand.
    fn sample() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new(27.into());
        let message =
            doc.push_child(doc.root(), NodeKind::Message { name: "A".into() }, range(0, 0));
        let field = doc.push_child(
            message,
            NodeKind::Field {
                name: "a".into(),
                number: "1".into(),
                ty: "int32".into(),
                modifier: None,
            },
            range(12, 25),
        );
        doc.set_end(message, 27.into());
        (doc, message, field)
    }

    #[test]
    fn empty_tree_is_a_bare_root() {
        let doc = Document::new(0.into());
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.range(doc.root()), range(0, 0));
        assert_eq!(doc.node_at_offset(0.into()), doc.root());
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn parent_links_and_traversal() {
        let (doc, message, field) = sample();
        assert_eq!(doc.parent(field), Some(message));
        assert_eq!(doc.ancestors(field).collect::<Vec<_>>(), vec![field, message, doc.root()]);
        assert_eq!(doc.descendants(doc.root()).collect::<Vec<_>>(), vec![doc.root(), message, field]);
        assert_eq!(doc[field].kind().name(), Some("a"));
    }

    #[test]
    fn node_at_offset_finds_the_smallest_node() {
        let (doc, message, field) = sample();
        assert_eq!(doc.node_at_offset(15.into()), field);
        assert_eq!(doc.node_at_offset(3.into()), message);
        assert_eq!(doc.node_at_offset(25.into()), message);
        assert_eq!(doc.node_at_offset(27.into()), doc.root());
    }

    #[test]
    fn insert_child_keeps_requested_order() {
        let mut doc = Document::new(10.into());
        let comment = doc.push_child(doc.root(), NodeKind::Comment, range(5, 9));
        let package =
            doc.insert_child(doc.root(), 0, NodeKind::Package { name: "p".into() }, range(0, 4));
        assert_eq!(doc.children(doc.root()), &[package, comment]);
        assert_eq!(doc.last_child(doc.root()), Some(comment));
    }

    #[test]
    fn debug_rendering() {
        let (doc, _, _) = sample();
        expect![[r#"
            Document@0..27
              Message@0..27 name=A
                Field@12..25 name=a number=1 type=int32
        "#]]
        .assert_eq(&doc.to_string());
    }
}
