//! Border, outline, border-radius and border-image shorthands.

use super::box_model::box_sides;
use super::{Declaration, longhands, match_unordered};
use crate::grammar::Grammar;
use crate::value::{Node, split_by_slash};

const LINE_WIDTH: &str = "<line-width>";
const LINE_STYLE: &str = "<line-style>";
const COLOR: &str = "<color>";

const IMAGE_SOURCE: &str = "<'border-image-source'>";
const IMAGE_SLICE: &str = "<'border-image-slice'> [ / <'border-image-width'> | / <'border-image-width'>? / <'border-image-outset'> ]?";
const IMAGE_REPEAT: &str = "<'border-image-repeat'>";

const CORNERS: [&str; 4] = [
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
];

fn is_border_shorthand(property: &str) -> bool {
    matches!(
        property,
        "border"
            | "border-inline"
            | "border-block"
            | "border-top"
            | "border-right"
            | "border-bottom"
            | "border-left"
            | "border-inline-start"
            | "border-inline-end"
            | "border-block-start"
            | "border-block-end"
            | "outline"
    )
}

/// `<line-width> || <line-style> || <color>` into `-width`, `-style` and
/// `-color` longhands of the same property.
pub(crate) fn expand_border(grammar: &dyn Grammar, declaration: Declaration) -> Vec<Declaration> {
    if !is_border_shorthand(&declaration.property) {
        return vec![declaration];
    }
    let property = &declaration.property;
    let (values, _) = match_unordered(grammar, [LINE_WIDTH, LINE_STYLE, COLOR], &declaration.value);
    let names = ["width", "style", "color"].map(|kind| format!("{property}-{kind}"));
    longhands(names, values)
}

/// Corner radii, with an optional `/` introducing the vertical radii.
pub(crate) fn expand_border_radius(_grammar: &dyn Grammar, declaration: Declaration) -> Vec<Declaration> {
    if declaration.property != "border-radius" {
        return vec![declaration];
    }
    let nodes = declaration.value.value_list();
    let (horizontal, vertical) = match nodes.iter().position(|node| node.is_operator('/')) {
        Some(slash) => {
            let rest: Vec<Node> = nodes[slash + 1..]
                .iter()
                .filter(|node| !node.is_operator('/'))
                .cloned()
                .collect();
            (&nodes[..slash], rest)
        }
        None => (nodes, Vec::new()),
    };

    let initial = Node::ident("initial");
    let horizontal = box_sides(horizontal).unwrap_or([&initial; 4]);
    let vertical = box_sides(vertical.as_slice());

    CORNERS
        .iter()
        .enumerate()
        .map(|(corner, name)| {
            let mut radii = vec![horizontal[corner].clone()];
            if let Some(vertical) = vertical {
                radii.push(vertical[corner].clone());
            }
            Declaration::new(*name, Node::Container(radii))
        })
        .collect()
}

/// `source || slice [/ width | / width? / outset]? || repeat`.
pub(crate) fn expand_border_image(grammar: &dyn Grammar, declaration: Declaration) -> Vec<Declaration> {
    if declaration.property != "border-image" {
        return vec![declaration];
    }
    let ([source, slice_group, repeat], _) =
        match_unordered(grammar, [IMAGE_SOURCE, IMAGE_SLICE, IMAGE_REPEAT], &declaration.value);

    let mut parts = [None, None, None];
    if let Some(group) = &slice_group {
        for (part, nodes) in parts.iter_mut().zip(split_by_slash(group.value_list())) {
            if !nodes.is_empty() {
                *part = Some(Node::container(nodes));
            }
        }
    }
    let [slice, width, outset] = parts;

    longhands(
        [
            "border-image-source",
            "border-image-slice",
            "border-image-width",
            "border-image-outset",
            "border-image-repeat",
        ],
        [source, slice, width, outset, repeat],
    )
}
