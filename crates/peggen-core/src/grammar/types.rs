//! Grammar type definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Complete analyzed grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// Meta directives (`@header`, `@class`, ...). A `None` value disables the directive.
    #[serde(default)]
    pub metas: IndexMap<String, Option<String>>,
    /// Production rules, preserving definition order.
    pub rules: IndexMap<String, Rule>,
}

impl Grammar {
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn meta(&self, key: &str) -> Option<Option<&str>> {
        self.metas.get(key).map(|v| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Where a rule came from.
///
/// Front-end rules are `Named`. The other kinds are helper rules the
/// compiler synthesizes for sub-expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    #[default]
    Named,
    /// Parenthesized sub-expression with more than one item or alternative.
    Group,
    /// Zero-or-more repetition body.
    Loop0,
    /// One-or-more repetition body.
    Loop1,
    /// Separated repetition, flattened to one list.
    Gather,
}

/// A grammar rule with its front-end analysis results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    /// Declared result type, `None` for the generic value type.
    pub ty: Option<String>,
    pub rhs: Rhs,
    pub kind: RuleKind,
    pub left_recursive: bool,
    /// Drives the growth loop of its left-recursion cycle.
    pub leader: bool,
    pub nullable: bool,
}

impl Rule {
    /// Create a helper rule synthesized during compilation.
    pub fn helper(name: impl Into<String>, kind: RuleKind, rhs: Rhs) -> Self {
        Self {
            name: name.into(),
            ty: None,
            rhs,
            kind,
            left_recursive: false,
            leader: false,
            nullable: false,
        }
    }

    pub fn is_loop(&self) -> bool {
        matches!(self.kind, RuleKind::Loop0 | RuleKind::Loop1)
    }

    pub fn is_gather(&self) -> bool {
        self.kind == RuleKind::Gather
    }

    /// Body to compile for this rule.
    ///
    /// A non-loop rule consisting of a single parenthesized group is compiled
    /// as the group itself, so no helper rule is needed for it.
    pub fn flatten(&self) -> &Rhs {
        if !self.is_loop()
            && let [alt] = self.rhs.alts.as_slice()
            && let [only] = alt.items.as_slice()
            && let Item::Group(inner) = &only.item
        {
            return inner;
        }
        &self.rhs
    }
}

/// Ordered choice. Earlier alternatives take priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rhs {
    pub alts: Vec<Alt>,
}

impl Rhs {
    pub fn new(alts: Vec<Alt>) -> Self {
        Self { alts }
    }

    /// The item of a one-alternative, one-item body.
    pub fn single_item(&self) -> Option<&NamedItem> {
        match self.alts.as_slice() {
            [alt] => match alt.items.as_slice() {
                [item] => Some(item),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Sequence of items with an optional action expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alt {
    pub items: Vec<NamedItem>,
    /// Rust expression producing the alternative's value.
    pub action: Option<String>,
}

impl Alt {
    pub fn new(items: Vec<NamedItem>) -> Self {
        Self {
            items,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// Item with an optional explicit binding name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedItem {
    pub name: Option<String>,
    pub item: Item,
}

impl NamedItem {
    pub fn bare(item: Item) -> Self {
        Self { name: None, item }
    }

    pub fn named(name: impl Into<String>, item: Item) -> Self {
        Self {
            name: Some(name.into()),
            item,
        }
    }
}

/// Grammar item variants.
///
/// `Hash` and `Eq` are structural: two equal items compile to the same helper rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Reference to a rule or token class.
    Name(String),
    /// Literal token text, without quotes.
    Literal(String),
    /// Zero or one.
    Opt(Box<Item>),
    /// Zero or more.
    Repeat0(Box<Item>),
    /// One or more.
    Repeat1(Box<Item>),
    /// One or more `node`, separated by `separator`.
    Gather { separator: Box<Item>, node: Box<Item> },
    /// Parenthesized ordered choice.
    Group(Rhs),
    /// Must match here, consumes nothing.
    PositiveLookahead(Box<Item>),
    /// Must not match here, consumes nothing.
    NegativeLookahead(Box<Item>),
    /// Commit to the current alternative.
    Cut,
}
