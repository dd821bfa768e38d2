//! Canonical serialization of value trees.
//!
//! Output is compact: children are separated by one space, except that no
//! space is written around operators (`12px/1.5`, `Arial,serif`).

use cssparser::{CowRcStr, Token, serialize_identifier, serialize_string};

use super::{Component, Node, Numeric};

/// Serialize a value as CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

// Writing into a String never fails, so fmt::Result values below are ignored.

impl ToCss for Node {
    fn to_css(&self, buf: &mut String) {
        match self {
            Node::Container(children) => write_list(children, buf),
            Node::Ident(name) => {
                let _ = serialize_identifier(name, buf);
            }
            Node::Operator(symbol) => buf.push(*symbol),
            Node::Opaque(component) => component.to_css(buf),
        }
    }
}

impl ToCss for Component {
    fn to_css(&self, buf: &mut String) {
        match self {
            Component::Number(n) => write_token(
                &Token::Number {
                    has_sign: n.has_sign,
                    value: n.value,
                    int_value: n.int_value,
                },
                buf,
            ),
            Component::Percentage(n) => write_token(
                &Token::Percentage {
                    has_sign: n.has_sign,
                    unit_value: n.value,
                    int_value: n.int_value,
                },
                buf,
            ),
            Component::Dimension(n, unit) => write_dimension(n, unit, buf),
            Component::Hash { value, id: true } => {
                write_token(&Token::IDHash(CowRcStr::from(value.as_str())), buf);
            }
            Component::Hash { value, id: false } => {
                write_token(&Token::Hash(CowRcStr::from(value.as_str())), buf);
            }
            Component::String(value) => {
                let _ = serialize_string(value, buf);
            }
            Component::Url(url) => {
                write_token(&Token::UnquotedUrl(CowRcStr::from(url.as_str())), buf);
            }
            Component::Function { name, arguments } => {
                let _ = serialize_identifier(name, buf);
                buf.push('(');
                write_list(arguments, buf);
                buf.push(')');
            }
            Component::Parenthesized(children) => {
                buf.push('(');
                write_list(children, buf);
                buf.push(')');
            }
            Component::Bracketed(children) => {
                buf.push('[');
                write_list(children, buf);
                buf.push(']');
            }
            Component::Delim(c) => buf.push(*c),
        }
    }
}

fn write_list(nodes: &[Node], buf: &mut String) {
    let mut previous: Option<&Node> = None;
    for node in nodes {
        if let Some(prev) = previous
            && !matches!(prev, Node::Operator(_))
            && !matches!(node, Node::Operator(_))
        {
            buf.push(' ');
        }
        node.to_css(buf);
        previous = Some(node);
    }
}

fn write_dimension(n: &Numeric, unit: &str, buf: &mut String) {
    write_token(
        &Token::Dimension {
            has_sign: n.has_sign,
            value: n.value,
            int_value: n.int_value,
            unit: CowRcStr::from(unit),
        },
        buf,
    );
}

fn write_token(token: &Token<'_>, buf: &mut String) {
    let _ = cssparser::ToCss::to_css(token, buf);
}
