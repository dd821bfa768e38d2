//! `font`, `text-decoration` and `text-emphasis`.

use super::{Declaration, longhands, match_unordered};
use crate::grammar::Grammar;
use crate::value::Node;

const FONT_STYLE: &str = "<'font-style'>";
// CSS 2.1 values only; the rest of font-variant is not settable from `font`.
const FONT_VARIANT: &str = "normal | small-caps";
const FONT_WEIGHT: &str = "<'font-weight'>";
const FONT_WIDTH: &str = "normal | ultra-condensed | extra-condensed | condensed | semi-condensed | semi-expanded | expanded | extra-expanded | ultra-expanded";
const FONT_CONFIG: &str = "<'font-size'> / <'line-height'> <'font-family'>";

const DECORATION_LINE: &str = "<'text-decoration-line'>";
const DECORATION_STYLE: &str = "<'text-decoration-style'>";
const DECORATION_COLOR: &str = "<'text-decoration-color'>";

const EMPHASIS_STYLE: &str = "<'text-emphasis-style'>";
const EMPHASIS_COLOR: &str = "<'text-emphasis-color'>";

pub(crate) fn expand_text(grammar: &dyn Grammar, declaration: Declaration) -> Vec<Declaration> {
    match declaration.property.as_str() {
        "font" => expand_font(grammar, &declaration.value),
        "text-decoration" => {
            let patterns = [DECORATION_LINE, DECORATION_STYLE, DECORATION_COLOR];
            let (values, _) = match_unordered(grammar, patterns, &declaration.value);
            longhands(
                ["text-decoration-line", "text-decoration-style", "text-decoration-color"],
                values,
            )
        }
        "text-emphasis" => {
            let (values, _) = match_unordered(grammar, [EMPHASIS_STYLE, EMPHASIS_COLOR], &declaration.value);
            longhands(["text-emphasis-style", "text-emphasis-color"], values)
        }
        _ => vec![declaration],
    }
}

fn expand_font(grammar: &dyn Grammar, value: &Node) -> Vec<Declaration> {
    let (values, config) = match_unordered(
        grammar,
        [FONT_STYLE, FONT_VARIANT, FONT_WEIGHT, FONT_WIDTH],
        value,
    );
    let [size, line_height, family] = split_font_config(grammar, config.value_list());

    let mut out = longhands(["font-style", "font-variant", "font-weight", "font-width"], values);
    out.extend([
        Declaration::new("font-size", size),
        Declaration::new("line-height", line_height),
        Declaration::new("font-family", family),
    ]);
    out
}

/// Split what the keyword components left over into size, line height and
/// family list.
fn split_font_config(grammar: &dyn Grammar, config: &[Node]) -> [Node; 3] {
    match config {
        [] => [Node::initial(), Node::initial(), Node::initial()],
        [size, _slash, line_height, family @ ..] if grammar.matches(FONT_CONFIG, config) => [
            Node::container([size.clone()]),
            Node::container([line_height.clone()]),
            Node::container(family),
        ],
        [size, family @ ..] => [
            Node::container([size.clone()]),
            Node::initial(),
            Node::container(family),
        ],
    }
}
