//! Choice of caching wrapper for a rule routine.

use peggen_core::Rule;

/// Runtime wrapper a rule body is emitted inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoStrategy {
    /// Packrat cache keyed by (rule, start).
    Memoize,
    /// Seed-growing loop for the leader of a left-recursive cycle.
    MemoizeLeftRec,
    /// No cache. Non-leader cycle members re-run on every call so the
    /// leader's growth loop can see new results.
    Logged,
}

impl MemoStrategy {
    pub fn for_rule(rule: &Rule) -> Self {
        match (rule.left_recursive, rule.leader) {
            (false, _) => Self::Memoize,
            (true, true) => Self::MemoizeLeftRec,
            (true, false) => Self::Logged,
        }
    }

    /// `PegParser` method implementing this strategy.
    pub fn wrapper(self) -> &'static str {
        match self {
            Self::Memoize => "memoize",
            Self::MemoizeLeftRec => "memoize_left_rec",
            Self::Logged => "logged",
        }
    }
}
