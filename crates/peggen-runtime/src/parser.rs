//! Primitives called by generated rule routines.

use crate::state::{Mark, ParserState};
use crate::token::{Token, TokenKind};

/// Set the cut flag of the enclosing rule. Always succeeds.
///
/// Once set, a failing alternative makes the whole rule fail instead of
/// trying the remaining alternatives.
pub fn commit(cut: &mut bool) -> bool {
    *cut = true;
    true
}

/// Base behavior of every generated parser.
///
/// Implementors only expose their [`ParserState`]; all primitives are
/// provided. Every primitive either succeeds and advances, or returns `None`
/// and leaves the position unchanged.
pub trait PegParser: Sized {
    fn state(&self) -> &ParserState;

    fn state_mut(&mut self) -> &mut ParserState;

    fn mark(&self) -> Mark {
        self.state().position()
    }

    fn reset(&mut self, mark: Mark) {
        self.state_mut().set_position(mark);
    }

    fn peek(&self) -> &Token {
        self.state().peek()
    }

    /// Consume the current token if its text or its kind name is `expected`.
    ///
    /// Literals (`"if"`, `"+"`) match by text, token classes (`"NEWLINE"`)
    /// by kind.
    fn expect(&mut self, expected: &str) -> Option<Token> {
        let token = self.peek();
        if token.text == expected || token.kind.as_str() == expected {
            return Some(self.state_mut().advance());
        }
        None
    }

    /// Consume the current token if it is of `kind`.
    fn expect_kind(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek().kind == kind {
            return Some(self.state_mut().advance());
        }
        None
    }

    fn name(&mut self) -> Option<Token> {
        self.expect_kind(TokenKind::Name)
    }

    fn number(&mut self) -> Option<Token> {
        self.expect_kind(TokenKind::Number)
    }

    fn string(&mut self) -> Option<Token> {
        self.expect_kind(TokenKind::String)
    }

    fn op(&mut self) -> Option<Token> {
        self.expect_kind(TokenKind::Op)
    }

    /// Succeeds if `f` matches here. Never consumes input.
    fn positive_lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> bool {
        let mark = self.mark();
        let matched = f(self).is_some();
        self.reset(mark);
        matched
    }

    /// Succeeds if `f` does not match here. Never consumes input.
    fn negative_lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> bool {
        !self.positive_lookahead(f)
    }

    /// Packrat wrapper: `body` runs at most once per start position.
    fn memoize<T: Clone + 'static>(
        &mut self,
        rule: &'static str,
        body: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let start = self.mark();
        if let Some((value, end)) = self.state().memo_get::<T>(rule, start) {
            log::trace!("{rule} at {}: cached", start.index());
            self.reset(end);
            return value;
        }

        self.state_mut().record_evaluation(rule);
        let value = body(self);
        let end = self.mark();
        self.state_mut().memo_put(rule, start, value.clone(), end);
        value
    }

    /// Seed-growing wrapper for the leader of a left-recursive cycle.
    ///
    /// The cache slot for `(rule, start)` starts as a failure. Each iteration
    /// re-runs `body` from `start`, which sees the previous best result
    /// through the cache. Growth stops at the first iteration that fails or
    /// does not end strictly further than the best so far.
    fn memoize_left_rec<T: Clone + 'static>(
        &mut self,
        rule: &'static str,
        mut body: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let start = self.mark();
        if let Some((value, end)) = self.state().memo_get::<T>(rule, start) {
            log::trace!("{rule} at {}: cached", start.index());
            self.reset(end);
            return value;
        }

        self.state_mut().memo_put::<T>(rule, start, None, start);
        let mut best: Option<T> = None;
        let mut best_end = start;

        loop {
            self.reset(start);
            self.state_mut().record_evaluation(rule);
            let Some(value) = body(self) else {
                break;
            };
            let end = self.mark();
            if end <= best_end {
                break;
            }
            log::trace!(
                "{rule} at {}: grew to {}",
                start.index(),
                end.index()
            );
            best = Some(value);
            best_end = end;
            self.state_mut().memo_put(rule, start, best.clone(), best_end);
        }

        self.reset(best_end);
        self.state_mut().memo_put(rule, start, best.clone(), best_end);
        best
    }

    /// Unmemoized wrapper for non-leader members of a left-recursive cycle.
    fn logged<T>(
        &mut self,
        rule: &'static str,
        body: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let start = self.mark();
        log::trace!("{rule} at {}", start.index());
        self.state_mut().record_evaluation(rule);
        let value = body(self);
        log::trace!(
            "{rule} at {}: {}",
            start.index(),
            if value.is_some() { "matched" } else { "failed" }
        );
        value
    }
}
