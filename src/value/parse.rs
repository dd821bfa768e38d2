//! Value parsing on top of the cssparser tokenizer.

use cssparser::{
    BasicParseErrorKind, ParseError, ParseErrorKind, Parser, ParserInput, SourcePosition, Token,
};

use super::{Component, Node, Numeric};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueError {
    Empty,
    Unclosed(char),
}

/// Parse raw declaration value text into a [`Node::Container`].
///
/// Whitespace and comments are dropped. Empty values, unbalanced blocks and
/// tokens that cannot appear in a declaration value (`;`, `{`, stray closing
/// brackets, bad strings or urls) are rejected.
pub fn parse(text: &str) -> Result<Node> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let children = parser
        .parse_entirely(|input| {
            let nodes = parse_nodes(input)?;
            if nodes.is_empty() {
                return Err(input.new_custom_error(ValueError::Empty));
            }
            Ok(nodes)
        })
        .map_err(into_error)?;
    Ok(Node::Container(children))
}

fn parse_nodes<'i>(input: &mut Parser<'i, '_>) -> std::result::Result<Vec<Node>, ParseError<'i, ValueError>> {
    let mut nodes = Vec::new();
    while !input.is_exhausted() {
        nodes.push(parse_node(input)?);
    }
    Ok(nodes)
}

fn parse_node<'i>(input: &mut Parser<'i, '_>) -> std::result::Result<Node, ParseError<'i, ValueError>> {
    let start = input.position();
    let location = input.current_source_location();
    let token = input.next()?.clone();
    let node = match token {
        Token::Ident(name) => Node::Ident(name.as_ref().to_owned()),
        Token::Delim('/') => Node::Operator('/'),
        Token::Comma => Node::Operator(','),
        Token::Delim(c) => Node::Opaque(Component::Delim(c)),
        Token::Number {
            has_sign,
            value,
            int_value,
        } => Node::Opaque(Component::Number(Numeric {
            value,
            int_value,
            has_sign,
        })),
        Token::Percentage {
            has_sign,
            unit_value,
            int_value,
        } => Node::Opaque(Component::Percentage(Numeric {
            value: unit_value,
            int_value,
            has_sign,
        })),
        Token::Dimension {
            has_sign,
            value,
            int_value,
            unit,
        } => Node::Opaque(Component::Dimension(
            Numeric {
                value,
                int_value,
                has_sign,
            },
            unit.as_ref().to_owned(),
        )),
        Token::Hash(value) => Node::Opaque(Component::Hash {
            value: value.as_ref().to_owned(),
            id: false,
        }),
        Token::IDHash(value) => Node::Opaque(Component::Hash {
            value: value.as_ref().to_owned(),
            id: true,
        }),
        Token::QuotedString(value) => Node::Opaque(Component::String(value.as_ref().to_owned())),
        Token::UnquotedUrl(url) => Node::Opaque(Component::Url(url.as_ref().to_owned())),
        Token::Function(name) => {
            let arguments = input.parse_nested_block(parse_nodes)?;
            expect_closed(input, start, ')')?;
            Node::Opaque(Component::Function {
                name: name.as_ref().to_owned(),
                arguments,
            })
        }
        Token::ParenthesisBlock => {
            let children = input.parse_nested_block(parse_nodes)?;
            expect_closed(input, start, ')')?;
            Node::Opaque(Component::Parenthesized(children))
        }
        Token::SquareBracketBlock => {
            let children = input.parse_nested_block(parse_nodes)?;
            expect_closed(input, start, ']')?;
            Node::Opaque(Component::Bracketed(children))
        }
        other => return Err(location.new_unexpected_token_error(other)),
    };
    Ok(node)
}

/// The tokenizer closes blocks implicitly at end of input; a value such as
/// `foo(` is still rejected.
fn expect_closed<'i>(
    input: &Parser<'i, '_>,
    start: SourcePosition,
    close: char,
) -> std::result::Result<(), ParseError<'i, ValueError>> {
    if input.slice_from(start).ends_with(close) {
        Ok(())
    } else {
        Err(input.new_custom_error(ValueError::Unclosed(close)))
    }
}

fn into_error(error: ParseError<'_, ValueError>) -> Error {
    let message = match error.kind {
        ParseErrorKind::Custom(ValueError::Empty) => "empty value".to_owned(),
        ParseErrorKind::Custom(ValueError::Unclosed(close)) => format!("missing closing `{close}`"),
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected token {token:?}")
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            "unexpected end of input".to_owned()
        }
        ParseErrorKind::Basic(other) => format!("{other:?}"),
    };
    Error::Parse {
        message,
        line: error.location.line + 1,
        column: error.location.column,
    }
}
