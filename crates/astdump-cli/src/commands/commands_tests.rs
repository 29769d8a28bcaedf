use std::fs;
use std::path::{Path, PathBuf};

use astdump_lib::Config;
use tempfile::TempDir;

use super::check::check_tree;
use super::dump::{Report, dump_all};
use super::kinds::list_kinds;
use super::loader::{ConfigArgs, LoadError, load_tree};
use super::roots::list_roots;

const EXAMPLE1: &str = include_str!("../../../astdump-lib/fixtures/example1.json");

const SMALL: &str = r##"{
  "files": ["lib/util.py"],
  "nodes": [
    { "kind": "function_declaration", "label": "helper",
      "span": { "start": [1, 1], "end": [2, 13] },
      "children": [
        { "kind": "comment", "label": "# $helper", "span": { "start": [2, 5], "end": [2, 13] } }
      ] }
  ]
}"##;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn dump_files(paths: &[PathBuf], root: Option<&str>) -> Report {
    let results = dump_all(paths, root, &Config::default(), 2);
    Report::collect(paths, results)
}

#[test]
fn load_fixture() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "example1.json", EXAMPLE1);
    let tree = load_tree(&path).unwrap();
    assert_eq!(tree.nodes().len(), 4);
    assert_eq!(tree.origin(), Path::new("src/Example1.java"));
}

#[test]
fn load_missing_file() {
    let err = load_tree(Path::new("/nonexistent/astdump/tree.json")).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/astdump/tree.json': "));
}

#[test]
fn load_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "{ \"files\": [");
    let err = load_tree(&path).unwrap_err();
    assert!(err.to_string().starts_with("invalid tree document: "));
}

#[test]
fn single_document_has_no_header() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "small.json", SMALL);
    let report = dump_files(&[path], None);

    assert!(report.errors.is_empty());
    insta::assert_snapshot!(report.output, @r##"
    0: FunctionDeclaration "helper" (lib/util.py:1:1-2:13)
      1: Comment "# $helper" (lib/util.py:2:5-2:13)
    "##);
}

#[test]
fn several_documents_keep_input_order() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "first.json", SMALL);
    let second = write(&dir, "second.json", SMALL);
    let paths = [first.clone(), second.clone()];
    let report = dump_files(&paths, Some("helper"));

    let expected = format!(
        "# {}\n{}\n# {}\n{}",
        first.display(),
        "0: FunctionDeclaration \"helper\" (lib/util.py:1:1-2:13)\n  1: Comment \"# $helper\" (lib/util.py:2:5-2:13)\n",
        second.display(),
        "0: FunctionDeclaration \"helper\" (lib/util.py:1:1-2:13)\n  1: Comment \"# $helper\" (lib/util.py:2:5-2:13)\n",
    );
    assert_eq!(report.output, expected);
}

#[test]
fn failing_document_reported_separately() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", SMALL);
    let bad = write(&dir, "bad.json", SMALL);
    let paths = [good.clone(), bad.clone()];

    let results = vec![
        dump_all(&paths[..1], None, &Config::default(), 1).remove(0),
        dump_all(&paths[1..], Some("missing"), &Config::default(), 1).remove(0),
    ];
    let report = Report::collect(&paths, results);

    assert!(report.output.starts_with(&format!("# {}\n0: FunctionDeclaration", good.display())));
    assert!(!report.output.contains(&bad.display().to_string()));
    assert_eq!(
        report.errors,
        [format!("{}: root marker `missing` not found", bad.display())]
    );
}

#[test]
fn parallel_dump_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = (0..6)
        .map(|i| write(&dir, &format!("t{i}.json"), EXAMPLE1))
        .collect();

    let sequential = Report::collect(&paths, dump_all(&paths, None, &Config::default(), 1));
    let parallel = Report::collect(&paths, dump_all(&paths, None, &Config::default(), 4));
    assert_eq!(sequential.output, parallel.output);
    assert!(parallel.errors.is_empty());
}

#[test]
fn config_file_then_flags() {
    let dir = TempDir::new().unwrap();
    let config_path = write(
        &dir,
        "astdump.json",
        r#"{ "indentUnit": "\t", "markerPrefix": "@", "workingDir": "/srv" }"#,
    );

    let args = ConfigArgs {
        config_file: Some(config_path),
        marker_prefix: Some("%".to_owned()),
        no_synthetic: true,
        ..ConfigArgs::default()
    };
    let config = args.resolve().unwrap();

    assert_eq!(config.indent_unit, "\t");
    assert_eq!(config.marker_prefix, "%");
    assert!(!config.include_synthetic);
    assert_eq!(config.working_dir, Some(PathBuf::from("/srv")));
}

#[test]
fn base_path_gets_working_dir() {
    let args = ConfigArgs {
        base_path: Some(PathBuf::from("tests")),
        ..ConfigArgs::default()
    };
    let config = args.resolve().unwrap();
    assert_eq!(config.working_dir, Some(std::env::current_dir().unwrap()));
}

#[test]
fn invalid_config_flag() {
    let args = ConfigArgs {
        marker_prefix: Some(String::new()),
        ..ConfigArgs::default()
    };
    let err = args.resolve().unwrap_err();
    insta::assert_snapshot!(err, @"invalid config: markerPrefix must not be empty");
}

#[test]
fn invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "astdump.json", r#"{ "indent": 2 }"#);
    let args = ConfigArgs {
        config_file: Some(config_path),
        ..ConfigArgs::default()
    };
    let err = args.resolve().unwrap_err();
    assert!(matches!(err, LoadError::Dump(astdump_lib::Error::InvalidConfig(_))));
}

#[test]
fn roots_listing() {
    let tree = astdump_lib::Tree::from_json(EXAMPLE1).unwrap();
    let listing = list_roots(&tree, &Config::default());
    assert_eq!(
        listing,
        "Example1\tMethodDeclaration \"main\" (src/Example1.java:17:5-30:5)\n"
    );
}

#[test]
fn roots_listing_with_base_path() {
    let tree = astdump_lib::Tree::from_json(EXAMPLE1).unwrap();
    let config = Config::default().with_base_path("src");
    assert_eq!(
        list_roots(&tree, &config),
        "Example1\tMethodDeclaration \"main\" (Example1.java:17:5-30:5)\n"
    );
}

#[test]
fn check_counts_nodes() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "example1.json", EXAMPLE1);
    assert_eq!(check_tree(&path).unwrap(), 111);
}

#[test]
fn check_reports_unknown_kind() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "unknown.json",
        r#"{ "files": ["a.rb"], "nodes": [ { "kind": "heredoc", "span": { "start": [1, 1], "end": [3, 4] } } ] }"#,
    );
    let err = check_tree(&path).unwrap_err();
    insta::assert_snapshot!(err, @"unknown node kind `heredoc` at a.rb:1:1-3:4");
}

#[test]
fn kinds_table() {
    let table = list_kinds();
    assert!(table.starts_with("Import\timport\n"));
    assert!(table.contains("ForEachStatement\tfor_each_statement\n"));
    assert!(table.ends_with("Comment\tcomment\n"));
}

#[test]
fn roots_listing_escapes_labels_like_dumps() {
    let json = r#"{
      "files": ["esc.js"],
      "nodes": [
        { "kind": "function_declaration", "label": "bell\u0007\"q\"",
          "span": { "start": [1, 1], "end": [3, 2] },
          "children": [
            { "kind": "comment", "label": "// $esc", "span": { "start": [2, 3], "end": [2, 9] } }
          ] }
      ]
    }"#;
    let tree = astdump_lib::Tree::from_json(json).unwrap();

    let listing = list_roots(&tree, &Config::default());
    assert_eq!(
        listing,
        "esc\tFunctionDeclaration \"bell\\u{0007}\\\"q\\\"\" (esc.js:1:1-3:2)\n"
    );

    let dump = astdump_lib::dump(&tree, Some("esc"), &Config::default()).unwrap();
    assert!(dump.starts_with("0: FunctionDeclaration \"bell\\u{0007}\\\"q\\\"\" (esc.js:1:1-3:2)\n"));
}
