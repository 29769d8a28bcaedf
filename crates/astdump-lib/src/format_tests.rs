use astdump_core::{NodeKind, Position, SourceSpan, SyntaxNode, TreeBuilder};

use crate::Config;
use crate::format::{DumpEntry, Formatter, Location};
use crate::test_utils::{leaf, node, tree_of};
use crate::traverse::PreOrder;

fn entries(root: &SyntaxNode, formatter: &Formatter<'_>) -> crate::Result<Vec<DumpEntry>> {
    PreOrder::new(root).map(|v| formatter.entry(v)).collect()
}

#[test]
fn render_full_line() {
    let entry = DumpEntry {
        id: 3,
        depth: 2,
        kind: NodeKind::CallExpression,
        label: Some("println".to_owned()),
        location: Some(Location {
            file: "java/Example1.java".to_owned(),
            start: Position::new(26, 13),
            end: Position::new(26, 39),
        }),
    };
    assert_eq!(
        entry.render("  "),
        r#"    3: CallExpression "println" (java/Example1.java:26:13-26:39)"#
    );
    assert_eq!(
        entry.render("\t"),
        "\t\t3: CallExpression \"println\" (java/Example1.java:26:13-26:39)"
    );
}

#[test]
fn render_without_label_or_location() {
    let entry = DumpEntry {
        id: 0,
        depth: 0,
        kind: NodeKind::Block,
        label: None,
        location: None,
    };
    assert_eq!(entry.render("  "), "0: Block");
}

#[test]
fn labels_are_escaped() {
    let tree = tree_of(
        "a.py",
        [leaf(NodeKind::StringLiteral, "say \"hi\"\n\\o/", SourceSpan::at(1, 1, 2, 5))],
    );
    let formatter = Formatter::new(&tree, &Config::default());
    let out = entries(&tree.nodes()[0], &formatter).unwrap();
    insta::assert_snapshot!(out[0].render("  "), @r#"0: StringLiteral "say \"hi\"\n\\o/" (a.py:1:1-2:5)"#);
}

#[test]
fn control_characters_are_escaped() {
    let tree = tree_of("a.py", [node(NodeKind::StringLiteral).with_label("\u{7}\t")]);
    let formatter = Formatter::new(&tree, &Config::default());
    let out = entries(&tree.nodes()[0], &formatter).unwrap();
    assert_eq!(out[0].render(""), r#"0: StringLiteral "\u{0007}\t""#);
}

#[test]
fn location_uses_base_path() {
    let tree = tree_of(
        "/repo/tests/java/A.java",
        [leaf(NodeKind::ClassDeclaration, "A", SourceSpan::at(1, 1, 9, 1))],
    );
    let config = Config::default().with_base_path("/repo/tests");
    let formatter = Formatter::new(&tree, &config);
    let out = entries(&tree.nodes()[0], &formatter).unwrap();

    assert_eq!(
        out[0].location.as_ref().map(ToString::to_string),
        Some("java/A.java:1:1-9:1".to_owned())
    );
}

#[test]
fn location_in_secondary_file() {
    let mut builder = TreeBuilder::new("main.c");
    let header = builder.add_file("include/util.h");
    builder.push(
        node(NodeKind::FunctionDeclaration)
            .with_label("helper")
            .with_span(SourceSpan::new(header, Position::new(3, 1), Position::new(5, 1))),
    );
    let tree = builder.build().unwrap();
    let formatter = Formatter::new(&tree, &Config::default());
    let out = entries(&tree.nodes()[0], &formatter).unwrap();

    insta::assert_snapshot!(out[0].render("  "), @r#"0: FunctionDeclaration "helper" (include/util.h:3:1-5:1)"#);
}

#[test]
fn unknown_kind_with_location() {
    let tree = tree_of(
        "a.py",
        [node(NodeKind::Block)
            .with_span(SourceSpan::at(1, 1, 4, 1))
            .with_child(
                SyntaxNode::new("yield_expression").with_span(SourceSpan::at(2, 5, 2, 12)),
            )],
    );
    let formatter = Formatter::new(&tree, &Config::default());
    let err = entries(&tree.nodes()[0], &formatter).unwrap_err();
    insta::assert_snapshot!(err, @"unknown node kind `yield_expression` at a.py:2:5-2:12");
}

#[test]
fn unknown_kind_without_location() {
    let tree = tree_of(
        "a.py",
        [
            SyntaxNode::new("walrus"),
            SyntaxNode::new("implicit_return").synthetic(),
        ],
    );
    let formatter = Formatter::new(&tree, &Config::default());

    let err = entries(&tree.nodes()[0], &formatter).unwrap_err();
    insta::assert_snapshot!(err, @"unknown node kind `walrus` at <no location>");

    let err = entries(&tree.nodes()[1], &formatter).unwrap_err();
    insta::assert_snapshot!(err, @"unknown node kind `implicit_return` at <synthetic node>");
}

#[test]
fn pascal_case_tags_accepted() {
    let tree = tree_of("a.py", [SyntaxNode::new("ForEachStatement")]);
    let formatter = Formatter::new(&tree, &Config::default());
    let out = entries(&tree.nodes()[0], &formatter).unwrap();
    assert_eq!(out[0].kind, NodeKind::ForEachStatement);
}
