//! The match-emit-transition loop driving tokenization.
//!
//! Each step consults the table of the state on top of the stack, takes the
//! first rule whose pattern matches at the cursor, emits the token (or two,
//! for a group-split rule), advances past the match, and applies the rule's
//! transition. When no rule matches, one character is emitted as plain text
//! and the cursor advances past it, so the loop cannot stall: a source of
//! `n` bytes is tokenized in at most `n` steps.

use smallvec::{smallvec, SmallVec};

use crate::category::{Token, TokenCategory};
use crate::cursor::Cursor;
use crate::rules::{self, Action, Categories, Matched, StateId};

/// A single tokenization pass over one source buffer.
///
/// Lazily yields [`Token`]s whose texts, concatenated in order, reproduce
/// the source exactly. A pass is not resumable; start a new one to re-lex.
/// Sessions share nothing mutable, so any number may run concurrently over
/// the same rule tables.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    /// Active states, innermost last. Never empty; `Root` is never popped.
    stack: SmallVec<[StateId; 4]>,
    /// Second half of a group-split match, handed out on the next call.
    queued: Option<Token<'src>>,
}

impl<'src> Lexer<'src> {
    /// Start a pass over `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            stack: smallvec![StateId::Root],
            queued: None,
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if let Some(queued) = self.queued.take() {
            return Some(queued);
        }
        if self.cursor.is_eof() {
            return None;
        }

        let state = self.stack.last().copied().unwrap_or(StateId::Root);
        let start = self.cursor.pos();
        let rest = self.cursor.rest();

        for rule in rules::lookup(state) {
            let Some(matched) = (rule.pattern)(rest) else {
                continue;
            };

            let token = match (matched, rule.categories) {
                (Matched::Whole(len), Categories::Single(category)) => {
                    debug_assert!(len > 0, "rule matched zero bytes");
                    self.cursor.advance(len);
                    Token::new(category, self.cursor.slice(start, start + len), start)
                }
                (Matched::Groups(first, second), Categories::Groups([head, tail])) => {
                    debug_assert!(first > 0 && second > 0, "group matched zero bytes");
                    self.cursor.advance(first + second);
                    let split = start + first;
                    self.queued = Some(Token::new(
                        tail,
                        self.cursor.slice(split, split + second),
                        split,
                    ));
                    Token::new(head, self.cursor.slice(start, split), start)
                }
                // A mismatch between match shape and category shape is a
                // table bug; collapse to a single token of the full match.
                (Matched::Whole(len), Categories::Groups([head, _])) => {
                    self.cursor.advance(len);
                    Token::new(head, self.cursor.slice(start, start + len), start)
                }
                (Matched::Groups(first, second), Categories::Single(category)) => {
                    let len = first + second;
                    self.cursor.advance(len);
                    Token::new(category, self.cursor.slice(start, start + len), start)
                }
            };

            match rule.action {
                Action::Stay => {}
                Action::Push(next) => self.stack.push(next),
                Action::Pop => {
                    self.stack.pop();
                    debug_assert!(!self.stack.is_empty(), "root state popped");
                }
            }
            return Some(token);
        }

        // No rule claimed the input: emit one character as plain text. The
        // state stack is left as-is, so an abandoned `type` state still
        // claims the next identifier to appear, however far away.
        let width = self.cursor.advance_char();
        debug_assert!(width > 0, "fallback ran at end of input");
        Some(Token::new(
            TokenCategory::Text,
            self.cursor.slice(start, start + width),
            start,
        ))
    }
}

/// Tokenize `source`, yielding classified tokens until input is exhausted.
///
/// Convenience constructor for [`Lexer::new`]; see there for the panic
/// condition on oversized sources.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

#[cfg(test)]
mod tests;
