//! Grammar oracle: does a node sequence conform to a syntax pattern?
//!
//! The expanders never look inside opaque nodes themselves. They ask a
//! [`Grammar`] whether a candidate slice of nodes matches a Value Definition
//! Syntax fragment such as `<line-width>` or `<'font-size'>`.
//! [`CssGrammar`] is the built-in implementation; any
//! `Fn(&str, &[Node]) -> bool` can stand in for it.

mod matcher;
mod syntax;
mod types;

use crate::error::Result;
use crate::value::Node;

/// Pattern-match predicate over value node sequences.
pub trait Grammar {
    /// Whether the whole of `value` matches `pattern`.
    fn matches(&self, pattern: &str, value: &[Node]) -> bool;
}

impl<F> Grammar for F
where
    F: Fn(&str, &[Node]) -> bool,
{
    fn matches(&self, pattern: &str, value: &[Node]) -> bool {
        self(pattern, value)
    }
}

/// Built-in Value Definition Syntax matcher.
///
/// Supports the combinators, multipliers and data types needed by the
/// shorthand expanders. Patterns that fail to compile never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssGrammar;

impl CssGrammar {
    pub fn new() -> Self {
        Self
    }

    /// Check that `pattern` compiles, reporting why it does not.
    pub fn validate(&self, pattern: &str) -> Result<()> {
        syntax::compile(pattern).map(|_| ())
    }
}

impl Grammar for CssGrammar {
    fn matches(&self, pattern: &str, value: &[Node]) -> bool {
        match syntax::compile(pattern) {
            Ok(term) => matcher::matches(&term, value),
            Err(err) => {
                log::debug!("{err}");
                false
            }
        }
    }
}
