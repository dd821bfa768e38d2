//! Grid gaps and `place-*` alignment shorthands.

use super::Declaration;
use super::box_model::pair_sides;
use crate::grammar::Grammar;
use crate::value::Node;

/// `gap` and the legacy `grid-*gap` names. Legacy single-axis names are
/// renamed to their current longhand.
pub(crate) fn expand_gap(_grammar: &dyn Grammar, declaration: Declaration) -> Vec<Declaration> {
    let renamed = match declaration.property.as_str() {
        "gap" | "grid-gap" => return split_pair(declaration, "row-gap", "column-gap"),
        "grid-row-gap" => "row-gap",
        "grid-column-gap" => "column-gap",
        _ => return vec![declaration],
    };
    vec![Declaration::new(renamed, declaration.value)]
}

/// `place-content`, `place-items` and `place-self` into their `align-*`
/// and `justify-*` pair.
pub(crate) fn expand_place(_grammar: &dyn Grammar, declaration: Declaration) -> Vec<Declaration> {
    let axis = match declaration.property.as_str() {
        "place-content" => "content",
        "place-items" => "items",
        "place-self" => "self",
        _ => return vec![declaration],
    };
    split_pair(declaration, &format!("align-{axis}"), &format!("justify-{axis}"))
}

fn split_pair(declaration: Declaration, first: &str, second: &str) -> Vec<Declaration> {
    match pair_sides(declaration.value.value_list()) {
        Some([a, b]) => vec![
            Declaration::new(first, Node::container([a.clone()])),
            Declaration::new(second, Node::container([b.clone()])),
        ],
        None => vec![declaration],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::CssGrammar;
    use crate::value::{ToCss, parse};

    fn run(
        stage: fn(&dyn Grammar, Declaration) -> Vec<Declaration>,
        property: &str,
        value: &str,
    ) -> Vec<(String, String)> {
        stage(&CssGrammar, Declaration::new(property, parse(value).unwrap()))
            .into_iter()
            .map(|d| (d.property, d.value.to_css_string()))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_gap() {
        assert_eq!(
            run(expand_gap, "gap", "1px 2px"),
            pairs(&[("row-gap", "1px"), ("column-gap", "2px")])
        );
        assert_eq!(
            run(expand_gap, "grid-gap", "3px"),
            pairs(&[("row-gap", "3px"), ("column-gap", "3px")])
        );
    }

    #[test]
    fn test_legacy_gap_names() {
        assert_eq!(run(expand_gap, "grid-row-gap", "1em"), pairs(&[("row-gap", "1em")]));
        assert_eq!(
            run(expand_gap, "grid-column-gap", "calc(1px + 2px)"),
            pairs(&[("column-gap", "calc(1px + 2px)")])
        );
    }

    #[test]
    fn test_place() {
        assert_eq!(
            run(expand_place, "place-items", "center"),
            pairs(&[("align-items", "center"), ("justify-items", "center")])
        );
        assert_eq!(
            run(expand_place, "place-self", "start end"),
            pairs(&[("align-self", "start"), ("justify-self", "end")])
        );
        assert_eq!(
            run(expand_place, "place-content", "space-between stretch"),
            pairs(&[("align-content", "space-between"), ("justify-content", "stretch")])
        );
    }

    #[test]
    fn test_unrelated_properties_pass_through() {
        assert_eq!(run(expand_gap, "row-gap", "1px"), pairs(&[("row-gap", "1px")]));
        assert_eq!(run(expand_place, "align-items", "center"), pairs(&[("align-items", "center")]));
    }
}
