//! Test utilities and snapshot macros.

use astdump_core::{NodeKind, SourceSpan, SyntaxNode, Tree, TreeBuilder};

use crate::{Config, dump};

/// Tree document modelled on the `Example1` Java fixture.
pub const EXAMPLE1: &str = include_str!("../fixtures/example1.json");

/// Python `Example1`: `#` comments, an f-string, a module-level function.
pub const EXAMPLE1_PY: &str = include_str!("../fixtures/example1_py.json");

/// Go `Example1`: the marker sits in `func main`.
pub const EXAMPLE1_GO: &str = include_str!("../fixtures/example1_go.json");

pub fn example1() -> Tree {
    Tree::from_json(EXAMPLE1).expect("example1 fixture is a valid tree")
}

pub fn node(kind: NodeKind) -> SyntaxNode {
    SyntaxNode::of(kind)
}

pub fn leaf(kind: NodeKind, label: &str, span: SourceSpan) -> SyntaxNode {
    SyntaxNode::of(kind).with_label(label).with_span(span)
}

pub fn tree_of(origin: &str, nodes: impl IntoIterator<Item = SyntaxNode>) -> Tree {
    let mut builder = TreeBuilder::new(origin);
    for node in nodes {
        builder.push(node);
    }
    builder.build().expect("test tree is valid")
}

/// One method holding a loop (init, condition, body) and a lambda (body).
pub fn loop_and_lambda() -> Tree {
    let method = node(NodeKind::MethodDeclaration)
        .with_label("run")
        .with_span(SourceSpan::at(1, 1, 10, 1))
        .with_children([
            node(NodeKind::ForStatement)
                .with_span(SourceSpan::at(2, 5, 4, 5))
                .with_children([
                    leaf(NodeKind::LocalVariableDeclaration, "i", SourceSpan::at(2, 10, 2, 18)),
                    leaf(NodeKind::BinaryExpression, "<", SourceSpan::at(2, 21, 2, 26)),
                    node(NodeKind::Block).with_span(SourceSpan::at(2, 35, 4, 5)),
                ]),
            node(NodeKind::LambdaExpression)
                .with_span(SourceSpan::at(6, 5, 8, 5))
                .with_child(node(NodeKind::Block).with_span(SourceSpan::at(6, 11, 8, 5))),
        ]);
    tree_of("src/Loops.java", [method])
}

/// Dump with the given config, panicking on error.
pub fn dump_ok(tree: &Tree, target: Option<&str>, config: &Config) -> String {
    dump(tree, target, config).expect("dump succeeds")
}

/// Snapshot a dump of a JSON tree document.
#[macro_export]
macro_rules! shot_document {
    ($json:literal, $target:expr, @$snapshot:literal) => {{
        let json = indoc::indoc!($json);
        let output = $crate::dump_document(json, $target, &$crate::Config::default())
            .expect("document dumps");
        insta::assert_snapshot!(output, @$snapshot);
    }};
}
