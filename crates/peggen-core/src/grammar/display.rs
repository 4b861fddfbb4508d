//! PEG notation for grammar nodes.
//!
//! The output is what a grammar author would write, e.g. `expr: expr '+' term | term`.

use std::fmt;

use super::types::{Alt, Item, NamedItem, Rhs, Rule};

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            Some(ty) => write!(f, "{}[{}]: {}", self.name, ty, self.rhs),
            None => write!(f, "{}: {}", self.name, self.rhs),
        }
    }
}

impl fmt::Display for Rhs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alt) in self.alts.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{alt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Alt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NamedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}={}", name, self.item),
            None => write!(f, "{}", self.item),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Name(name) => f.write_str(name),
            Item::Literal(text) => {
                f.write_str("'")?;
                for c in text.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("'")
            }
            Item::Opt(inner) => match inner.as_ref() {
                Item::Group(rhs) => write!(f, "[{rhs}]"),
                other => {
                    let s = other.to_string();
                    if s.contains(' ') {
                        write!(f, "[{s}]")
                    } else {
                        write!(f, "{s}?")
                    }
                }
            },
            Item::Repeat0(inner) => write!(f, "{inner}*"),
            Item::Repeat1(inner) => write!(f, "{inner}+"),
            Item::Gather { separator, node } => write!(f, "{separator}.{node}+"),
            Item::Group(rhs) => write!(f, "({rhs})"),
            Item::PositiveLookahead(inner) => write!(f, "&{inner}"),
            Item::NegativeLookahead(inner) => write!(f, "!{inner}"),
            Item::Cut => f.write_str("~"),
        }
    }
}
