//! Parser state shared by all rule routines of one parser instance.

use std::any::Any;
use std::collections::HashMap;

use crate::token::{Token, TokenKind};

/// Saved input position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct MemoKey {
    rule: &'static str,
    start: Mark,
}

/// Cached outcome of one rule at one position.
///
/// `value` holds an `Option<T>` for the rule's result type `T`.
struct MemoEntry {
    value: Box<dyn Any>,
    end: Mark,
}

/// Token buffer, current position and packrat cache.
///
/// Not thread-safe: one instance serves one parse.
pub struct ParserState {
    tokens: Vec<Token>,
    position: usize,
    memo: HashMap<MemoKey, MemoEntry>,
    evaluations: HashMap<&'static str, usize>,
}

impl ParserState {
    /// Create state over `tokens`, appending an end marker if missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::EndMarker) {
            let offset = tokens.last().map_or(0, |t| t.span.1);
            tokens.push(Token::end_marker(offset));
        }
        Self {
            tokens,
            position: 0,
            memo: HashMap::new(),
            evaluations: HashMap::new(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn position(&self) -> Mark {
        Mark(self.position)
    }

    pub(crate) fn set_position(&mut self, mark: Mark) {
        self.position = mark.0;
    }

    /// Current token. Past the end this stays on the end marker.
    pub fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.position.min(last)]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Number of times the body of `rule` actually ran.
    pub fn evaluations(&self, rule: &str) -> usize {
        self.evaluations.get(rule).copied().unwrap_or(0)
    }

    pub(crate) fn record_evaluation(&mut self, rule: &'static str) {
        *self.evaluations.entry(rule).or_default() += 1;
    }

    pub(crate) fn memo_get<T: Clone + 'static>(
        &self,
        rule: &'static str,
        start: Mark,
    ) -> Option<(Option<T>, Mark)> {
        let entry = self.memo.get(&MemoKey { rule, start })?;
        let value = entry.value.downcast_ref::<Option<T>>()?;
        Some((value.clone(), entry.end))
    }

    pub(crate) fn memo_put<T: 'static>(
        &mut self,
        rule: &'static str,
        start: Mark,
        value: Option<T>,
        end: Mark,
    ) {
        self.memo.insert(
            MemoKey { rule, start },
            MemoEntry {
                value: Box::new(value),
                end,
            },
        );
    }

    /// Drop all cached results, e.g. before reparsing from the start.
    pub fn clear_memo(&mut self) {
        self.memo.clear();
    }
}
