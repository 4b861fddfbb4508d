use super::*;

fn calc() -> Grammar {
    Grammar::from_json(
        r#"{
        "metas": { "class": "P" },
        "rules": {
            "start": { "rhs": [ { "items": [ { "type": "NAME", "value": "expr" } ] } ] },
            "expr": {
                "type": "Expr",
                "left_recursive": true,
                "leader": true,
                "rhs": [ { "items": [
                    { "type": "REPEAT1", "item": { "type": "STRING", "value": "x" } }
                ], "action": "Expr::new()" } ]
            }
        }
    }"#,
    )
    .unwrap()
}

#[test]
fn decodes_what_it_encodes() {
    let grammar = calc();
    let decoded = Grammar::from_binary(&grammar.to_binary()).unwrap();

    assert_eq!(grammar, decoded);
    let names: Vec<_> = decoded.rules.keys().map(String::as_str).collect();
    assert_eq!(names, ["start", "expr"]);
}

#[test]
fn encoding_starts_with_header() {
    let binary = calc().to_binary();
    assert_eq!(&binary[..5], b"PEGG\x01");
}

#[test]
fn json_bytes_are_rejected() {
    let err = Grammar::from_binary(br#"{"rules": {}}"#).unwrap_err();
    insta::assert_snapshot!(err, @"not a binary grammar (missing header)");

    let err = Grammar::from_binary(b"PEGG").unwrap_err();
    assert!(matches!(err, GrammarError::NotBinaryGrammar));
}

#[test]
fn other_format_version_is_rejected() {
    let mut binary = calc().to_binary();
    binary[4] = 7;

    let err = Grammar::from_binary(&binary).unwrap_err();
    insta::assert_snapshot!(err, @"binary grammar format 7 is not supported (expected 1)");
}

#[test]
fn truncated_payload_is_an_error() {
    let binary = calc().to_binary();

    let err = Grammar::from_binary(&binary[..binary.len() - 1]).unwrap_err();
    assert!(matches!(err, GrammarError::Binary(_)));
}
