//! Positional expansion of box-edge shorthands.
//!
//! Physical shorthands take one to four values in top, right, bottom, left
//! order; logical ones take one or two in start, end order. Missing values are
//! copied from the ones given.

use super::Declaration;
use crate::grammar::Grammar;
use crate::value::Node;

/// Expand 1-4 values to [top, right, bottom, left] following CSS shorthand
/// rules. Values beyond the fourth are ignored.
pub(crate) fn box_sides<T>(values: &[T]) -> Option<[&T; 4]> {
    let top = values.first()?;
    let right = values.get(1).unwrap_or(top);
    let bottom = values.get(2).unwrap_or(top);
    let left = values.get(3).unwrap_or(right);
    Some([top, right, bottom, left])
}

/// Expand 1-2 values to [start, end].
pub(crate) fn pair_sides<T>(values: &[T]) -> Option<[&T; 2]> {
    let start = values.first()?;
    let end = values.get(1).unwrap_or(start);
    Some([start, end])
}

const PHYSICAL: [&str; 4] = ["top", "right", "bottom", "left"];
const LOGICAL: [&str; 2] = ["start", "end"];

pub(crate) fn expand_edges(_grammar: &dyn Grammar, declaration: Declaration) -> Vec<Declaration> {
    let property = declaration.property.as_str();
    let value = &declaration.value;
    let expanded = match property {
        "margin" | "padding" => physical(value, |edge| format!("{property}-{edge}")),
        "inset" => physical(value, str::to_owned),
        "margin-inline" | "margin-block" | "padding-inline" | "padding-block" | "inset-inline"
        | "inset-block" => logical(value, |edge| format!("{property}-{edge}")),
        "border-width" | "border-style" | "border-color" => {
            let kind = border_kind(property);
            physical(value, |edge| format!("border-{edge}-{kind}"))
        }
        "border-inline-width" | "border-inline-style" | "border-inline-color" => {
            let kind = border_kind(property);
            logical(value, |edge| format!("border-inline-{edge}-{kind}"))
        }
        "border-block-width" | "border-block-style" | "border-block-color" => {
            let kind = border_kind(property);
            logical(value, |edge| format!("border-block-{edge}-{kind}"))
        }
        _ => None,
    };
    // An empty list has nothing to distribute.
    expanded.unwrap_or_else(|| vec![declaration])
}

/// `width`, `style` or `color`.
fn border_kind(property: &str) -> &str {
    property.rsplit('-').next().unwrap_or_default()
}

fn physical(value: &Node, name: impl Fn(&str) -> String) -> Option<Vec<Declaration>> {
    let sides = box_sides(value.value_list())?;
    Some(distribute(&PHYSICAL, &sides, name))
}

fn logical(value: &Node, name: impl Fn(&str) -> String) -> Option<Vec<Declaration>> {
    let sides = pair_sides(value.value_list())?;
    Some(distribute(&LOGICAL, &sides, name))
}

fn distribute(edges: &[&str], values: &[&Node], name: impl Fn(&str) -> String) -> Vec<Declaration> {
    edges
        .iter()
        .zip(values)
        .map(|(edge, value)| Declaration::new(name(edge), Node::container([(*value).clone()])))
        .collect()
}
