//! Value trees for CSS declarations.
//!
//! A declaration value is parsed into a [`Node`] tree. The expanders only ever
//! look at [`Node::Container`] children and [`Node::Operator`] symbols; every
//! other token is carried as an [`Node::Opaque`] [`Component`] that only the
//! grammar and the serializer inspect.

mod parse;
mod to_css;

pub use parse::parse;
pub use to_css::ToCss;

/// A node in a parsed CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An ordered group of nodes: a whole property value or a sub-grouping.
    Container(Vec<Node>),
    /// A bare identifier such as `solid` or `initial`.
    Ident(String),
    /// A separator operator, `/` or `,`.
    Operator(char),
    /// Anything else, passed through untouched.
    Opaque(Component),
}

/// Grammar-specific payload of an opaque node.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Number(Numeric),
    /// `unit_value` semantics: `50%` is stored as `0.5`.
    Percentage(Numeric),
    Dimension(Numeric, String),
    /// `#abc`; `id` is set when the name is also a valid identifier.
    Hash { value: String, id: bool },
    String(String),
    Url(String),
    Function { name: String, arguments: Vec<Node> },
    Parenthesized(Vec<Node>),
    Bracketed(Vec<Node>),
    Delim(char),
}

/// Numeric token data as reported by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeric {
    pub value: f32,
    pub int_value: Option<i32>,
    pub has_sign: bool,
}


impl Node {
    /// Wrap `nodes` in a container.
    pub fn container(nodes: impl Into<Vec<Node>>) -> Self {
        Node::Container(nodes.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(name.into())
    }

    /// The `initial` keyword, wrapped as a whole value.
    pub fn initial() -> Self {
        Node::Container(vec![Node::ident("initial")])
    }

    pub fn is_operator(&self, symbol: char) -> bool {
        matches!(self, Node::Operator(op) if *op == symbol)
    }

    /// Children of a container, or the node itself as a one-element list.
    pub fn value_list(&self) -> &[Node] {
        match self {
            Node::Container(children) => children,
            other => std::slice::from_ref(other),
        }
    }
}

/// Split a node list on `/` operators.
///
/// Always returns at least one group; a trailing or doubled `/` produces an
/// empty group.
pub(crate) fn split_by_slash(nodes: &[Node]) -> Vec<&[Node]> {
    nodes.split(|node| node.is_operator('/')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_list_of_container() {
        let value = Node::container([Node::ident("a"), Node::ident("b")]);
        assert_eq!(value.value_list().len(), 2);
    }

    #[test]
    fn test_value_list_of_leaf() {
        let node = Node::ident("solid");
        assert_eq!(node.value_list(), &[Node::ident("solid")]);
    }

    #[test]
    fn test_initial_is_single_ident_container() {
        assert_eq!(
            Node::initial(),
            Node::Container(vec![Node::Ident("initial".into())])
        );
    }

    #[test]
    fn test_split_by_slash() {
        let nodes = [
            Node::ident("a"),
            Node::Operator('/'),
            Node::Operator('/'),
            Node::ident("b"),
        ];
        let groups = split_by_slash(&nodes);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], &[Node::ident("a")]);
        assert!(groups[1].is_empty());
        assert_eq!(groups[2], &[Node::ident("b")]);
    }

    #[test]
    fn test_split_without_slash() {
        let nodes = [Node::ident("a"), Node::Operator(',')];
        assert_eq!(split_by_slash(&nodes), vec![&nodes[..]]);
    }
}
