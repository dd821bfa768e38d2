//! Greedy matcher for the `||` combinator.

use crate::grammar::Grammar;
use crate::value::Node;

/// Match the list of patterns against the nodes of `value`.
///
/// Matches can appear in a different order than the patterns and every
/// pattern is optional: Value Definition Syntax writes this as
/// `<a> || <b> || <c>`.
///
/// Each pass visits the still unmatched patterns in order. A pattern takes the
/// longest prefix of the unconsumed nodes that the grammar accepts, and
/// those nodes are consumed before the next pattern is tried. Passing over
/// every pattern without consuming anything ends the search, so the loop
/// runs at most `N + 1` times. There is no backtracking: a pattern that could
/// only match after a shorter choice by an earlier pattern is missed.
///
/// Returns the match for each pattern in input order and a container of the
/// nodes no pattern consumed.
pub fn match_unordered<const N: usize>(
    grammar: &dyn Grammar,
    patterns: [&str; N],
    value: &Node,
) -> ([Option<Node>; N], Node) {
    let nodes = value.value_list();
    let mut matched: [Option<Node>; N] = std::array::from_fn(|_| None);
    let mut pending = [true; N];
    let mut consumed = 0;

    while pending.contains(&true) && consumed < nodes.len() {
        let last_consumed = consumed;
        for (index, pattern) in patterns.iter().enumerate() {
            if !pending[index] {
                continue;
            }
            let rest = &nodes[consumed..];
            let longest = (1..=rest.len())
                .filter(|&len| grammar.matches(pattern, &rest[..len]))
                .last();
            if let Some(len) = longest {
                matched[index] = Some(Node::container(&rest[..len]));
                pending[index] = false;
                consumed += len;
            }
        }
        // Nothing matched in this pass, so the next would be identical.
        if consumed == last_consumed {
            break;
        }
    }

    (matched, Node::container(&nodes[consumed..]))
}
