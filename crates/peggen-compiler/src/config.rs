//! Configuration for parser generation.

use std::collections::BTreeMap;

/// Token kinds matched by name rather than by dedicated primitives.
///
/// Maps numeric token kinds to their symbolic names. A grammar reference to
/// one of these names compiles to `expect("NAME")`. The lexical classes
/// `NAME`, `NUMBER`, `STRING` and `OP` have their own primitives and are
/// recognized whether or not they appear here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenTable {
    names: BTreeMap<u32, String>,
}

/// Python's non-exact token kinds.
const PYTHON_TOKENS: &[(u32, &str)] = &[
    (0, "ENDMARKER"),
    (1, "NAME"),
    (2, "NUMBER"),
    (3, "STRING"),
    (4, "NEWLINE"),
    (5, "INDENT"),
    (6, "DEDENT"),
    (54, "OP"),
    (55, "AWAIT"),
    (56, "ASYNC"),
    (57, "TYPE_IGNORE"),
    (58, "TYPE_COMMENT"),
    (59, "ERRORTOKEN"),
    (60, "COMMENT"),
    (61, "NL"),
    (62, "ENCODING"),
];

impl Default for TokenTable {
    fn default() -> Self {
        PYTHON_TOKENS
            .iter()
            .map(|&(kind, name)| (kind, name.to_string()))
            .collect()
    }
}

impl FromIterator<(u32, String)> for TokenTable {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl TokenTable {
    /// Table without any token kinds.
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    /// Add or replace a token kind.
    pub fn insert(mut self, kind: u32, name: impl Into<String>) -> Self {
        self.names.insert(kind, name.into());
        self
    }

    pub fn name(&self, kind: u32) -> Option<&str> {
        self.names.get(&kind).map(String::as_str)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.values().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Configuration for parser generation.
///
/// Unset module templates fall back to the grammar's `header`, `subheader`
/// and `trailer` metas, then to built-in defaults.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the generated parser type
    pub(crate) parser_name: Option<String>,
    /// Crate path the generated module imports its runtime from
    pub(crate) runtime_crate: String,
    pub(crate) header: Option<String>,
    pub(crate) subheader: Option<String>,
    pub(crate) trailer: Option<String>,
    pub(crate) tokens: TokenTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser_name: None,
            runtime_crate: "peggen_runtime".to_string(),
            header: None,
            subheader: None,
            trailer: None,
            tokens: TokenTable::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated parser type name.
    pub fn parser_name(mut self, name: impl Into<String>) -> Self {
        self.parser_name = Some(name.into());
        self
    }

    /// Set the crate path used in the default header's `use` line.
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    /// Replace the module header. `{filename}` is substituted.
    pub fn header(mut self, template: impl Into<String>) -> Self {
        self.header = Some(template.into());
        self
    }

    /// Text emitted after the header. `{filename}` is substituted.
    pub fn subheader(mut self, template: impl Into<String>) -> Self {
        self.subheader = Some(template.into());
        self
    }

    /// Text emitted at the end of the module. `{filename}` is substituted.
    pub fn trailer(mut self, template: impl Into<String>) -> Self {
        self.trailer = Some(template.into());
        self
    }

    /// Set the token-name table.
    pub fn tokens(mut self, tokens: TokenTable) -> Self {
        self.tokens = tokens;
        self
    }
}
