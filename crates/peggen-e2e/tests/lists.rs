use peggen_e2e::lists::Lists;
use peggen_runtime::{PegParser, Token, tokenize};

fn parser(src: &str) -> Lists {
    Lists::new(tokenize(src).unwrap())
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn zero_or_more_accepts_nothing() {
    assert_eq!(texts(&parser("a b c").names().unwrap()), ["a", "b", "c"]);

    let mut p = parser("1");
    assert_eq!(p.names(), Some(Vec::new()));
    assert_eq!(p.mark().index(), 0);
}

#[test]
fn one_or_more_needs_a_match() {
    assert_eq!(texts(&parser("1 2").numbers().unwrap()), ["1", "2"]);
    assert_eq!(parser("x").numbers(), None);
}

#[test]
fn gather_collects_separated_items() {
    assert_eq!(texts(&parser("1, 2, 3").args().unwrap()), ["1", "2", "3"]);
    assert_eq!(parser(", 1").args(), None);
}

#[test]
fn gather_leaves_trailing_separator() {
    let mut p = parser("1,");
    assert_eq!(texts(&p.args().unwrap()), ["1"]);
    assert_eq!(p.mark().index(), 1);
}

#[test]
fn optional_item() {
    assert_eq!(parser("f(1, 2)").call().unwrap().to_string(), "(f ( (1 2) ))");
    assert_eq!(parser("f()").call().unwrap().to_string(), "(f ( None ))");
}

#[test]
fn positive_lookahead_does_not_consume() {
    let mut p = parser("f x");
    assert_eq!(p.call(), None);
    assert_eq!(p.mark().index(), 0);
}

#[test]
fn negative_lookahead_rejects_keyword() {
    assert_eq!(parser("x").not_kw().unwrap().to_string(), "x");
    assert_eq!(parser("if").not_kw(), None);
}

#[test]
fn repeated_group() {
    assert_eq!(
        parser("a=1 b=2").pairs().unwrap().to_string(),
        "((a = 1) (b = 2))"
    );
    assert_eq!(parser("a=").pairs(), None);
}
