//! Shorthand expansion pipeline.
//!
//! A declaration passes through a fixed sequence of stages. Each stage either
//! rewrites a shorthand it recognizes into its longhands or passes the
//! declaration through unchanged. Later stages see the output of earlier ones,
//! so `border` first becomes `border-width`, `border-style` and
//! `border-color`, which the box-edge stage then splits per edge.

mod border;
mod box_model;
mod font;
mod layout;
mod unordered;

pub use unordered::match_unordered;

use crate::grammar::{CssGrammar, Grammar};
use crate::value::{self, Node, ToCss};

/// A property name with its parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: Node,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: Node) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }
}

type Stage = fn(&dyn Grammar, Declaration) -> Vec<Declaration>;

/// Expansion stages in application order.
const STAGES: [(&str, Stage); 7] = [
    ("border", border::expand_border),
    ("box-edges", box_model::expand_edges),
    ("border-radius", border::expand_border_radius),
    ("border-image", border::expand_border_image),
    ("gap", layout::expand_gap),
    ("place", layout::expand_place),
    ("font", font::expand_text),
];

/// Expands shorthand declarations using a grammar oracle.
#[derive(Debug, Clone, Default)]
pub struct Expander<G = CssGrammar> {
    grammar: G,
}

impl Expander<CssGrammar> {
    pub fn new() -> Self {
        Self::with_grammar(CssGrammar)
    }
}

impl<G: Grammar> Expander<G> {
    pub fn with_grammar(grammar: G) -> Self {
        Self { grammar }
    }

    /// Expand `(property, value)` pairs into longhand pairs.
    ///
    /// Output follows input order, and every longhand of one declaration
    /// precedes those of the next. A declaration whose value does not parse
    /// is dropped.
    pub fn expand<P, V>(&self, declarations: &[(P, V)]) -> Vec<(String, String)>
    where
        P: AsRef<str>,
        V: AsRef<str>,
    {
        let mut longhands = Vec::with_capacity(declarations.len());
        for (property, text) in declarations {
            let property = property.as_ref();
            let value = match value::parse(text.as_ref()) {
                Ok(value) => value,
                Err(err) => {
                    log::trace!("dropping `{property}`: {err}");
                    continue;
                }
            };
            longhands.extend(
                self.expand_declaration(Declaration::new(property, value))
                    .into_iter()
                    .map(|declaration| (declaration.property, declaration.value.to_css_string())),
            );
        }
        longhands
    }

    /// Run one parsed declaration through every stage.
    pub fn expand_declaration(&self, declaration: Declaration) -> Vec<Declaration> {
        STAGES
            .iter()
            .fold(vec![declaration], |declarations, (name, stage)| {
                self.run_stage(name, *stage, declarations)
            })
    }

    fn run_stage(&self, name: &str, stage: Stage, declarations: Vec<Declaration>) -> Vec<Declaration> {
        let mut out = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            let property = log::log_enabled!(log::Level::Trace).then(|| declaration.property.clone());
            let expanded = stage(&self.grammar, declaration);
            if let Some(property) = property {
                let unchanged = matches!(expanded.as_slice(), [only] if only.property == property);
                if !unchanged {
                    let longhands: Vec<&str> = expanded.iter().map(|d| d.property.as_str()).collect();
                    log::trace!("{name}: {property} -> {}", longhands.join(", "));
                }
            }
            out.extend(expanded);
        }
        out
    }
}

/// Pair each longhand name with its matched value, `initial` when absent.
pub(crate) fn longhands<S, const N: usize>(names: [S; N], values: [Option<Node>; N]) -> Vec<Declaration>
where
    S: Into<String>,
{
    names
        .into_iter()
        .zip(values)
        .map(|(name, value)| Declaration::new(name, value.unwrap_or_else(Node::initial)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(property: &str, value: &str) -> Vec<(String, String)> {
        Expander::new().expand(&[(property, value)])
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(expand("color", "red"), vec![("color".to_string(), "red".to_string())]);
    }

    #[test]
    fn test_unparsable_value_is_dropped() {
        assert!(expand("margin", "foo(").is_empty());
        assert!(expand("margin", "").is_empty());
    }

    #[test]
    fn test_stages_chain() {
        let properties: Vec<String> = expand("border", "1px solid red")
            .into_iter()
            .map(|(property, _)| property)
            .collect();
        assert_eq!(
            properties,
            [
                "border-top-width",
                "border-right-width",
                "border-bottom-width",
                "border-left-width",
                "border-top-style",
                "border-right-style",
                "border-bottom-style",
                "border-left-style",
                "border-top-color",
                "border-right-color",
                "border-bottom-color",
                "border-left-color",
            ]
        );
    }

    #[test]
    fn test_input_order_is_kept() {
        let out = Expander::new().expand(&[("gap", "1px"), ("color", "red"), ("margin-block", "2px")]);
        let properties: Vec<&str> = out.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            properties,
            ["row-gap", "column-gap", "color", "margin-block-start", "margin-block-end"]
        );
    }

    #[test]
    fn test_duplicate_declarations_are_kept() {
        let out = Expander::new().expand(&[("color", "red"), ("color", "blue")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].1, "blue");
    }

    #[test]
    fn test_custom_grammar() {
        // A grammar that knows nothing leaves every component initial.
        let expander = Expander::with_grammar(|_: &str, _: &[Node]| false);
        let out = expander.expand(&[("text-decoration", "underline red")]);
        assert_eq!(
            out,
            vec![
                ("text-decoration-line".to_string(), "initial".to_string()),
                ("text-decoration-style".to_string(), "initial".to_string()),
                ("text-decoration-color".to_string(), "initial".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_expander_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expander>();
    }

    #[test]
    fn test_expand_declaration() {
        let declaration = Declaration::new("padding", value::parse("1px 2px").unwrap());
        let out = Expander::new().expand_declaration(declaration);
        assert_eq!(out.len(), 4);
        assert_eq!(out[3].property, "padding-left");
        assert_eq!(out[3].value.to_css_string(), "2px");
    }
}
