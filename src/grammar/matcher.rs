//! Exhaustive matching of compiled terms against node slices.
//!
//! Every term maps a start index to the set of indices where a match of that
//! term can end. A slice matches when its length is reachable from zero.

use std::collections::BTreeSet;

use super::syntax::Term;
use crate::value::Node;

type Ends = BTreeSet<usize>;

pub(crate) fn matches(term: &Term, nodes: &[Node]) -> bool {
    ends(term, nodes, 0).contains(&nodes.len())
}

fn ends(term: &Term, nodes: &[Node], start: usize) -> Ends {
    match term {
        Term::Keyword(keyword) => single(nodes, start, |node| {
            matches!(node, Node::Ident(name) if name.eq_ignore_ascii_case(keyword))
        }),
        Term::Literal(symbol) => single(nodes, start, |node| node.is_operator(*symbol)),
        Term::Type(primitive, range) => single(nodes, start, |node| primitive.matches(*range, node)),
        Term::Sequence(terms) => terms.iter().fold(Ends::from([start]), |positions, term| {
            positions
                .into_iter()
                .flat_map(|position| ends(term, nodes, position))
                .collect()
        }),
        Term::OneOf(terms) => terms.iter().flat_map(|term| ends(term, nodes, start)).collect(),
        Term::AnyOf(terms) => unordered(terms, nodes, start, false),
        Term::AllOf(terms) => unordered(terms, nodes, start, true),
        Term::Repeat {
            term,
            min,
            max,
            comma,
        } => repeated(term, *min, *max, *comma, nodes, start),
    }
}

fn single(nodes: &[Node], start: usize, accept: impl Fn(&Node) -> bool) -> Ends {
    match nodes.get(start) {
        Some(node) if accept(node) => Ends::from([start + 1]),
        _ => Ends::new(),
    }
}

fn unordered(terms: &[Term], nodes: &[Node], start: usize, require_all: bool) -> Ends {
    let mut out = Ends::new();
    let mut used = vec![false; terms.len()];
    visit_unordered(terms, nodes, start, &mut used, require_all, &mut out);
    out
}

fn visit_unordered(
    terms: &[Term],
    nodes: &[Node],
    position: usize,
    used: &mut [bool],
    require_all: bool,
    out: &mut Ends,
) {
    for index in 0..terms.len() {
        if used[index] {
            continue;
        }
        used[index] = true;
        for end in ends(&terms[index], nodes, position) {
            if !require_all || used.iter().all(|u| *u) {
                out.insert(end);
            }
            visit_unordered(terms, nodes, end, used, require_all, out);
        }
        used[index] = false;
    }
}

fn repeated(
    term: &Term,
    min: usize,
    max: Option<usize>,
    comma: bool,
    nodes: &[Node],
    start: usize,
) -> Ends {
    let mut out = Ends::new();
    if min == 0 {
        out.insert(start);
    }
    // Each productive round consumes at least one node.
    let limit = max.unwrap_or(nodes.len().saturating_sub(start) + 1);
    let mut frontier = Ends::from([start]);
    for count in 1..=limit {
        let mut next = Ends::new();
        for &position in &frontier {
            let from = if comma && count > 1 {
                match nodes.get(position) {
                    Some(node) if node.is_operator(',') => position + 1,
                    _ => continue,
                }
            } else {
                position
            };
            next.extend(ends(term, nodes, from));
        }
        if next.is_empty() {
            break;
        }
        let settled = next == frontier;
        if count >= min || settled {
            out.extend(next.iter().copied());
        }
        if settled {
            break;
        }
        frontier = next;
    }
    out
}
