//! Reference check run before any code is emitted.

use peggen_core::{Grammar, Item, Rhs};

use crate::config::TokenTable;
use crate::expr::LEXICAL_CLASSES;
use crate::{Error, Result};

/// Fail on the first name that is neither a rule nor a known token.
pub fn check_references(grammar: &Grammar, tokens: &TokenTable) -> Result<()> {
    for rule in grammar.rules.values() {
        let checker = Checker {
            grammar,
            tokens,
            rule: &rule.name,
        };
        checker.rhs(&rule.rhs)?;
    }
    Ok(())
}

struct Checker<'a> {
    grammar: &'a Grammar,
    tokens: &'a TokenTable,
    rule: &'a str,
}

impl Checker<'_> {
    fn rhs(&self, rhs: &Rhs) -> Result<()> {
        for alt in &rhs.alts {
            for named in &alt.items {
                self.item(&named.item)?;
            }
        }
        Ok(())
    }

    fn item(&self, item: &Item) -> Result<()> {
        match item {
            Item::Name(name) => self.name(name),
            Item::Literal(_) | Item::Cut => Ok(()),
            Item::Opt(inner)
            | Item::Repeat0(inner)
            | Item::Repeat1(inner)
            | Item::PositiveLookahead(inner)
            | Item::NegativeLookahead(inner) => self.item(inner),
            Item::Gather { separator, node } => {
                self.item(separator)?;
                self.item(node)
            }
            Item::Group(rhs) => self.rhs(rhs),
        }
    }

    fn name(&self, name: &str) -> Result<()> {
        let known = LEXICAL_CLASSES.contains(&name)
            || self.tokens.contains_name(name)
            || self.grammar.rule(name).is_some();
        if known {
            return Ok(());
        }
        Err(Error::DanglingReference {
            rule: self.rule.to_string(),
            name: name.to_string(),
        })
    }
}
