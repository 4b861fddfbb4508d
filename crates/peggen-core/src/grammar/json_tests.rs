use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = indoc! {r#"
        {
            "rules": {
                "start": { "rhs": [ { "items": [ { "type": "NAME", "value": "expr" } ] } ] },
                "expr": { "rhs": [ { "items": [ { "type": "STRING", "value": "x" } ] } ] }
            }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.rules.len(), 2);
    assert!(grammar.metas.is_empty());
    assert_eq!(grammar.rules[0].name, "start");
}

#[test]
fn parse_grammar_without_rules() {
    let grammar = Grammar::from_json(r#"{ "metas": { "class": "P" }, "rules": {} }"#).unwrap();
    assert!(grammar.is_empty());
    assert_eq!(grammar.meta("class"), Some(Some("P")));
}

#[test]
fn parse_rule_flags_and_type() {
    let json = indoc! {r#"
        {
            "rules": {
                "expr": {
                    "type": "Expr",
                    "left_recursive": true,
                    "leader": true,
                    "nullable": false,
                    "rhs": [ { "items": [ { "type": "NAME", "value": "NUMBER" } ] } ]
                }
            }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let rule = grammar.rule("expr").unwrap();
    assert_eq!(rule.ty.as_deref(), Some("Expr"));
    assert!(rule.left_recursive);
    assert!(rule.leader);
    assert!(!rule.nullable);
    assert_eq!(rule.kind, RuleKind::Named);
}

#[test]
fn parse_named_and_bare_items() {
    let json = indoc! {r#"
        {
            "rules": {
                "pair": {
                    "rhs": [ {
                        "items": [
                            { "name": "key", "item": { "type": "NAME", "value": "NAME" } },
                            { "type": "STRING", "value": ":" },
                            { "name": "value", "item": { "type": "NAME", "value": "NUMBER" } }
                        ],
                        "action": "(key, value)"
                    } ]
                }
            }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let alt = &grammar.rules[0].rhs.alts[0];
    assert_eq!(alt.items[0].name.as_deref(), Some("key"));
    assert_eq!(alt.items[1].name, None);
    assert_eq!(alt.items[1].item, Item::Literal(":".into()));
    assert_eq!(alt.action.as_deref(), Some("(key, value)"));
}

#[test]
fn parse_compound_items() {
    let json = indoc! {r#"
        {
            "rules": {
                "args": {
                    "rhs": [ {
                        "items": [
                            { "type": "GATHER",
                              "separator": { "type": "STRING", "value": "," },
                              "node": { "type": "NAME", "value": "arg" } },
                            { "type": "OPT", "item": { "type": "REPEAT0", "item": { "type": "NAME", "value": "NEWLINE" } } },
                            { "type": "NEGATIVE_LOOKAHEAD", "item": { "type": "STRING", "value": "=" } },
                            { "type": "CUT" },
                            { "type": "GROUP", "alts": [
                                { "items": [ { "type": "STRING", "value": "a" } ] },
                                { "items": [ { "type": "STRING", "value": "b" } ] }
                            ] }
                        ]
                    } ]
                }
            }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let items = &grammar.rules[0].rhs.alts[0].items;
    assert!(matches!(items[0].item, Item::Gather { .. }));
    assert!(matches!(&items[1].item, Item::Opt(inner) if matches!(**inner, Item::Repeat0(_))));
    assert!(matches!(items[2].item, Item::NegativeLookahead(_)));
    assert_eq!(items[3].item, Item::Cut);
    assert!(matches!(&items[4].item, Item::Group(rhs) if rhs.alts.len() == 2));
}

#[test]
fn parse_metas() {
    let json = indoc! {r#"
        {
            "metas": { "class": "CalcParser", "trailer": null },
            "rules": { "start": { "rhs": [ { "items": [] } ] } }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.meta("class"), Some(Some("CalcParser")));
    assert_eq!(grammar.meta("trailer"), Some(None));
    assert_eq!(grammar.meta("header"), None);
}

#[test]
fn preserves_rule_order() {
    let json = indoc! {r#"
        {
            "rules": {
                "zeta": { "rhs": [] },
                "alpha": { "rhs": [] },
                "mid": { "rhs": [] }
            }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    let names: Vec<_> = grammar.rules.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn unknown_item_type_is_rejected() {
    let json = indoc! {r#"
        {
            "rules": {
                "start": { "rhs": [ { "items": [ { "type": "REGEX", "value": "[a-z]+" } ] } ] }
            }
        }
    "#};

    let err = Grammar::from_json(json).unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
}
