//! # longhand
//!
//! Expands CSS shorthand declarations into their longhand equivalents.
//!
//! ## Features
//!
//! - Box edges: `margin`, `padding`, `inset` and their logical variants
//! - Borders: `border` and its sides, `outline`, `border-radius`, `border-image`
//! - Layout: `gap`, the legacy `grid-*gap` names, `place-*`
//! - Text: `font`, `text-decoration`, `text-emphasis`
//!
//! Components that a shorthand leaves out are set to `initial`. Values whose
//! text does not parse are dropped, and properties that are not shorthands
//! pass through unchanged.
//!
//! ## Quick Start
//!
//! ```
//! use longhand::expand_shorthands;
//!
//! let longhands = expand_shorthands(&[("margin", "1px 2px"), ("color", "red")]);
//! assert_eq!(longhands[0], ("margin-top".to_string(), "1px".to_string()));
//! assert_eq!(longhands[3], ("margin-left".to_string(), "2px".to_string()));
//! assert_eq!(longhands[4], ("color".to_string(), "red".to_string()));
//! ```
//!
//! ## Custom grammars
//!
//! Shorthands whose components may appear in any order are matched by asking
//! a [`Grammar`] whether a run of value nodes fits a Value Definition Syntax
//! pattern. [`CssGrammar`] is used by default; an [`Expander`] can be built
//! around any other implementation, including a plain closure:
//!
//! ```
//! use longhand::{Expander, Node};
//!
//! let expander = Expander::with_grammar(|pattern: &str, _: &[Node]| pattern == "<color>");
//! let longhands = expander.expand(&[("outline", "anything")]);
//! assert_eq!(longhands[2], ("outline-color".to_string(), "anything".to_string()));
//! ```

pub mod block;
pub mod error;
pub mod expand;
pub mod grammar;
pub mod value;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use expand::{Declaration, Expander, match_unordered};
pub use grammar::{CssGrammar, Grammar};
pub use value::{Component, Node, Numeric, ToCss};

/// Expand shorthand declarations with the built-in grammar.
///
/// Property names are matched exactly, so they should already be lowercase.
pub fn expand_shorthands<P, V>(declarations: &[(P, V)]) -> Vec<(String, String)>
where
    P: AsRef<str>,
    V: AsRef<str>,
{
    Expander::new().expand(declarations)
}
