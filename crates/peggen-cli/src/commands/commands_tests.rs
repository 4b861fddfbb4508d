use std::fs;
use std::path::PathBuf;

use super::dump::format_grammar;
use super::generate::{GenerateArgs, render};
use super::grammar_loader::load_grammar;

const CALC: &str = r#"{
    "metas": { "class": "Calc", "trailer": null },
    "rules": {
        "expr": {
            "left_recursive": true,
            "leader": true,
            "rhs": [
                { "items": [
                    { "type": "NAME", "value": "expr" },
                    { "type": "STRING", "value": "+" },
                    { "type": "NAME", "value": "NUMBER" }
                ] },
                { "items": [ { "type": "NAME", "value": "NUMBER" } ] }
            ]
        },
        "empty": { "nullable": true, "rhs": [ { "items": [] } ] }
    }
}"#;

fn write_grammar(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn generate_args(grammar_path: PathBuf) -> GenerateArgs {
    GenerateArgs {
        grammar_path,
        output: None,
        class: None,
        runtime: None,
        filename: "calc.json".to_string(),
    }
}

#[test]
fn load_json_and_binary() {
    let dir = tempfile::tempdir().unwrap();
    let json = write_grammar(&dir, "calc.json", CALC.as_bytes());
    let grammar = load_grammar(&json).unwrap();
    assert_eq!(grammar.rules.len(), 2);

    let bin = write_grammar(&dir, "calc.bin", &grammar.to_binary());
    assert_eq!(load_grammar(&bin).unwrap(), grammar);
}

#[test]
fn load_reports_missing_file() {
    let err = load_grammar(&PathBuf::from("/nonexistent/grammar.json")).unwrap_err();
    assert!(err.starts_with("failed to read '/nonexistent/grammar.json'"));
}

#[test]
fn load_reports_bad_json_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_grammar(&dir, "bad.json", b"{ \"rules\": 3 }");
    let err = load_grammar(&path).unwrap_err();
    assert!(err.starts_with(&format!("{}: JSON parse error:", path.display())));
}

#[test]
fn render_uses_class_meta_and_filename() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_grammar(&dir, "calc.json", CALC.as_bytes());
    let module = render(&generate_args(path)).unwrap();

    assert!(module.starts_with("// @generated by peggen from calc.json\n"));
    assert!(module.contains("pub struct Calc {"));
    assert!(module.contains(r#"self.memoize_left_rec("expr", |p| -> Option<Value> {"#));
}

#[test]
fn render_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_grammar(&dir, "calc.json", CALC.as_bytes());
    let mut args = generate_args(path);
    args.class = Some("Adder".to_string());
    args.runtime = Some("crate::rt".to_string());
    let module = render(&args).unwrap();

    assert!(module.contains("pub struct Adder {"));
    assert!(module.contains("use crate::rt::{"));
}

#[test]
fn render_reports_dangling_reference() {
    let dir = tempfile::tempdir().unwrap();
    let grammar = r#"{ "rules": { "start": { "rhs": [ { "items": [ { "type": "NAME", "value": "nope" } ] } ] } } }"#;
    let path = write_grammar(&dir, "bad.json", grammar.as_bytes());
    let err = render(&generate_args(path)).unwrap_err();
    insta::assert_snapshot!(err, @"rule `start` references undefined name `nope`");
}

#[test]
fn dump_shows_rules_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_grammar(&dir, "calc.json", CALC.as_bytes());
    let grammar = load_grammar(&path).unwrap();

    insta::assert_snapshot!(format_grammar(&grammar), @r#"
    @class "Calc"
    @trailer

    expr: expr '+' NUMBER | NUMBER  # left-recursive leader
    empty:   # nullable
    "#);
}
