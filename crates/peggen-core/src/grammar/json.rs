//! JSON deserialization for analyzed grammars.
//!
//! The front-end emits items as internally tagged objects with a `type` field.

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{Alt, Grammar, Item, NamedItem, Rhs, Rule, RuleKind};

/// Error during grammar loading.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),

    #[error("not a binary grammar (missing header)")]
    NotBinaryGrammar,

    #[error("binary grammar format {found} is not supported (expected {expected})")]
    BinaryVersion { found: u8, expected: u8 },
}

impl Grammar {
    /// Parse grammar from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

#[derive(Debug, Deserialize)]
struct RawGrammar {
    #[serde(default)]
    metas: IndexMap<String, Option<String>>,
    rules: IndexMap<String, RawRule>,
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        // IndexMap keeps definition order; the first rule is the entry rule by convention.
        Self {
            metas: raw.metas,
            rules: raw
                .rules
                .into_iter()
                .map(|(name, rule)| {
                    let rule = rule.into_rule(name.clone());
                    (name, rule)
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default, rename = "type")]
    ty: Option<String>,
    rhs: Vec<RawAlt>,
    #[serde(default)]
    left_recursive: bool,
    #[serde(default)]
    leader: bool,
    #[serde(default)]
    nullable: bool,
}

impl RawRule {
    fn into_rule(self, name: String) -> Rule {
        Rule {
            name,
            ty: self.ty,
            rhs: conv_rhs(self.rhs),
            kind: RuleKind::Named,
            left_recursive: self.left_recursive,
            leader: self.leader,
            nullable: self.nullable,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAlt {
    items: Vec<RawNamedItem>,
    #[serde(default)]
    action: Option<String>,
}

/// Either a bare item or `{ "name": ..., "item": ... }`.
///
/// Bare items are tried first: `OPT` and friends also carry an `item` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNamedItem {
    Bare(RawItem),
    Named {
        #[serde(default)]
        name: Option<String>,
        item: RawItem,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
enum RawItem {
    NAME {
        value: String,
    },
    STRING {
        value: String,
    },
    OPT {
        item: Box<RawItem>,
    },
    REPEAT0 {
        item: Box<RawItem>,
    },
    REPEAT1 {
        item: Box<RawItem>,
    },
    GATHER {
        separator: Box<RawItem>,
        node: Box<RawItem>,
    },
    GROUP {
        alts: Vec<RawAlt>,
    },
    POSITIVE_LOOKAHEAD {
        item: Box<RawItem>,
    },
    NEGATIVE_LOOKAHEAD {
        item: Box<RawItem>,
    },
    CUT,
}

fn conv_rhs(alts: Vec<RawAlt>) -> Rhs {
    Rhs::new(alts.into_iter().map(Into::into).collect())
}

impl From<RawAlt> for Alt {
    fn from(raw: RawAlt) -> Self {
        Self {
            items: raw.items.into_iter().map(Into::into).collect(),
            action: raw.action,
        }
    }
}

impl From<RawNamedItem> for NamedItem {
    fn from(raw: RawNamedItem) -> Self {
        match raw {
            RawNamedItem::Named { name, item } => Self {
                name,
                item: item.into(),
            },
            RawNamedItem::Bare(item) => Self::bare(item.into()),
        }
    }
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        #[allow(clippy::boxed_local)] // Fields are Box<RawItem>, output needs Box<Item>
        fn conv(item: Box<RawItem>) -> Box<Item> {
            Box::new(Item::from(*item))
        }

        match raw {
            RawItem::NAME { value } => Item::Name(value),
            RawItem::STRING { value } => Item::Literal(value),
            RawItem::OPT { item } => Item::Opt(conv(item)),
            RawItem::REPEAT0 { item } => Item::Repeat0(conv(item)),
            RawItem::REPEAT1 { item } => Item::Repeat1(conv(item)),
            RawItem::GATHER { separator, node } => Item::Gather {
                separator: conv(separator),
                node: conv(node),
            },
            RawItem::GROUP { alts } => Item::Group(conv_rhs(alts)),
            RawItem::POSITIVE_LOOKAHEAD { item } => Item::PositiveLookahead(conv(item)),
            RawItem::NEGATIVE_LOOKAHEAD { item } => Item::NegativeLookahead(conv(item)),
            RawItem::CUT => Item::Cut,
        }
    }
}
