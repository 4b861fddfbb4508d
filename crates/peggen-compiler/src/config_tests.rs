use crate::config::{Config, TokenTable};

#[test]
fn default_tokens_are_python_names() {
    let tokens = TokenTable::default();
    assert_eq!(tokens.name(4), Some("NEWLINE"));
    assert_eq!(tokens.name(0), Some("ENDMARKER"));
    assert!(tokens.contains_name("INDENT"));
    assert!(!tokens.contains_name("newline"));
    assert_eq!(tokens.len(), 16);
}

#[test]
fn insert_replaces_kind() {
    let tokens = TokenTable::empty().insert(1, "A").insert(1, "B");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.name(1), Some("B"));
    assert!(!tokens.contains_name("A"));
}

#[test]
fn collect_from_pairs() {
    let tokens: TokenTable = [(9, "NINE".to_string())].into_iter().collect();
    assert_eq!(tokens.name(9), Some("NINE"));
    assert!(TokenTable::empty().is_empty());
}

#[test]
fn config_builder() {
    let config = Config::new()
        .parser_name("Calc")
        .runtime_crate("crate::runtime")
        .header("// {filename}")
        .trailer("// end")
        .tokens(TokenTable::empty());

    assert_eq!(config.parser_name.as_deref(), Some("Calc"));
    assert_eq!(config.runtime_crate, "crate::runtime");
    assert_eq!(config.header.as_deref(), Some("// {filename}"));
    assert_eq!(config.subheader, None);
    assert_eq!(config.trailer.as_deref(), Some("// end"));
    assert!(config.tokens.is_empty());
}
