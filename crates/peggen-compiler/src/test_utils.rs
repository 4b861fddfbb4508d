//! Grammar builders and emission shortcuts for tests.

use indexmap::IndexMap;
use peggen_core::{Alt, Grammar, Item, NamedItem, Rhs, Rule, RuleKind};

use crate::config::Config;
use crate::driver::Generator;

pub fn name(s: &str) -> Item {
    Item::Name(s.to_string())
}

pub fn lit(s: &str) -> Item {
    Item::Literal(s.to_string())
}

pub fn opt(item: Item) -> Item {
    Item::Opt(Box::new(item))
}

pub fn star(item: Item) -> Item {
    Item::Repeat0(Box::new(item))
}

pub fn plus(item: Item) -> Item {
    Item::Repeat1(Box::new(item))
}

pub fn gather(separator: Item, node: Item) -> Item {
    Item::Gather {
        separator: Box::new(separator),
        node: Box::new(node),
    }
}

pub fn group(alts: Vec<Alt>) -> Item {
    Item::Group(Rhs::new(alts))
}

/// Alternative of unnamed items.
pub fn alt(items: Vec<Item>) -> Alt {
    Alt::new(items.into_iter().map(NamedItem::bare).collect())
}

/// Front-end rule without a declared type.
pub fn rule(name: &str, alts: Vec<Alt>) -> Rule {
    Rule::helper(name, RuleKind::Named, Rhs::new(alts))
}

pub fn grammar(rules: Vec<Rule>) -> Grammar {
    Grammar {
        metas: IndexMap::new(),
        rules: rules.into_iter().map(|r| (r.name.clone(), r)).collect(),
    }
}

/// Rule routines of `grammar`, with the `impl` block indentation removed.
pub fn emit_rules(grammar: &Grammar) -> String {
    let config = Config::default();
    let rules = Generator::new(grammar, &config)
        .emit_rules()
        .expect("grammar should compile");
    rules
        .lines()
        .map(|line| line.strip_prefix("    ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Error message of a failed generation.
pub fn emit_error(grammar: &Grammar) -> String {
    let config = Config::default();
    match crate::generate(grammar, &config, "test.json") {
        Ok(module) => panic!("expected an error, got:\n{module}"),
        Err(err) => err.to_string(),
    }
}
