use crate::lexer::{LexError, tokenize};

fn kinds_and_texts(source: &str) -> Vec<(&'static str, String)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind.as_str(), t.text))
        .collect()
}

fn pairs(expected: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    expected.iter().map(|(k, t)| (*k, t.to_string())).collect()
}

#[test]
fn tokenize_simple_statement() {
    assert_eq!(
        kinds_and_texts("x = 1 + 'a'\n"),
        pairs(&[
            ("NAME", "x"),
            ("OP", "="),
            ("NUMBER", "1"),
            ("OP", "+"),
            ("STRING", "'a'"),
            ("NEWLINE", "\n"),
            ("ENDMARKER", ""),
        ])
    );
}

#[test]
fn blank_lines_and_comments_are_dropped() {
    assert_eq!(
        kinds_and_texts("\n\n# comment\na\n\n"),
        pairs(&[("NAME", "a"), ("NEWLINE", "\n"), ("ENDMARKER", "")])
    );
}

#[test]
fn newlines_inside_brackets_are_ignored() {
    assert_eq!(
        kinds_and_texts("f(a,\n b)\n"),
        pairs(&[
            ("NAME", "f"),
            ("OP", "("),
            ("NAME", "a"),
            ("OP", ","),
            ("NAME", "b"),
            ("OP", ")"),
            ("NEWLINE", "\n"),
            ("ENDMARKER", ""),
        ])
    );
}

#[test]
fn missing_final_newline_is_added() {
    assert_eq!(
        kinds_and_texts("a"),
        pairs(&[("NAME", "a"), ("NEWLINE", ""), ("ENDMARKER", "")])
    );
}

#[test]
fn empty_source_is_just_end_marker() {
    assert_eq!(kinds_and_texts(""), pairs(&[("ENDMARKER", "")]));
}

#[test]
fn multi_character_operators() {
    assert_eq!(
        kinds_and_texts("a **= b != c -> d"),
        pairs(&[
            ("NAME", "a"),
            ("OP", "**="),
            ("NAME", "b"),
            ("OP", "!="),
            ("NAME", "c"),
            ("OP", "->"),
            ("NAME", "d"),
            ("NEWLINE", ""),
            ("ENDMARKER", ""),
        ])
    );
}

#[test]
fn numbers_and_spans() {
    let tokens = tokenize("3.25 10").unwrap();
    assert_eq!(tokens[0].text, "3.25");
    assert_eq!(tokens[0].span, (0, 4));
    assert_eq!(tokens[1].span, (5, 7));
    assert_eq!(tokens.last().unwrap().span, (7, 7));
}

#[test]
fn unknown_character_is_an_error() {
    assert_eq!(
        tokenize("a $").unwrap_err(),
        LexError {
            offset: 2,
            text: "$".into()
        }
    );
}
