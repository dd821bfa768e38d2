//! Value Definition Syntax patterns.
//!
//! Patterns are tokenized with cssparser and compiled into a [`Term`] tree.
//! `<type>` and `<'property'>` references are resolved while compiling, so a
//! compiled term only contains keywords, literals and primitive data types.

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};

use super::types::{self, Primitive, Range};
use crate::error::{Error, Result};

/// A compiled pattern.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Term {
    Keyword(String),
    /// `/` or `,`
    Literal(char),
    Type(Primitive, Option<Range>),
    /// Juxtaposition: all terms, in order.
    Sequence(Vec<Term>),
    /// `&&`: all terms, any order.
    AllOf(Vec<Term>),
    /// `||`: one or more terms, any order, each at most once.
    AnyOf(Vec<Term>),
    /// `|`: exactly one term.
    OneOf(Vec<Term>),
    Repeat {
        term: Box<Term>,
        min: usize,
        max: Option<usize>,
        comma: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum SyntaxError {
    UnknownType(String),
    UnknownProperty(String),
    Definition(String),
    Expected(&'static str),
}

type PResult<'i, T> = std::result::Result<T, ParseError<'i, SyntaxError>>;

/// Compile a pattern string.
pub(crate) fn compile(pattern: &str) -> Result<Term> {
    let mut input = ParserInput::new(pattern);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(parse_one_of)
        .map_err(|err| Error::Syntax {
            pattern: pattern.to_owned(),
            message: describe(err),
        })
}

fn describe(err: ParseError<'_, SyntaxError>) -> String {
    match err.kind {
        ParseErrorKind::Custom(SyntaxError::UnknownType(name)) => format!("unknown type <{name}>"),
        ParseErrorKind::Custom(SyntaxError::UnknownProperty(name)) => {
            format!("unknown property <'{name}'>")
        }
        ParseErrorKind::Custom(SyntaxError::Definition(message)) => message,
        ParseErrorKind::Custom(SyntaxError::Expected(what)) => {
            format!("expected {what} at column {}", err.location.column)
        }
        ParseErrorKind::Basic(kind) => format!("{kind:?} at column {}", err.location.column),
    }
}

/// Wrap `terms` with `combine` unless there is only one.
fn collapse(mut terms: Vec<Term>, combine: fn(Vec<Term>) -> Term) -> Term {
    if terms.len() == 1 {
        terms.remove(0)
    } else {
        combine(terms)
    }
}

fn parse_one_of<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Term> {
    let mut terms = vec![parse_any_of(input)?];
    while input.try_parse(|i| expect_combinator(i, '|', false)).is_ok() {
        terms.push(parse_any_of(input)?);
    }
    Ok(collapse(terms, Term::OneOf))
}

fn parse_any_of<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Term> {
    let mut terms = vec![parse_all_of(input)?];
    while input.try_parse(|i| expect_combinator(i, '|', true)).is_ok() {
        terms.push(parse_all_of(input)?);
    }
    Ok(collapse(terms, Term::AnyOf))
}

fn parse_all_of<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Term> {
    let mut terms = vec![parse_sequence(input)?];
    while input.try_parse(|i| expect_combinator(i, '&', true)).is_ok() {
        terms.push(parse_sequence(input)?);
    }
    Ok(collapse(terms, Term::AllOf))
}

fn parse_sequence<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Term> {
    let mut terms = Vec::new();
    while at_component(input) {
        terms.push(parse_multiplied(input)?);
    }
    if terms.is_empty() {
        return Err(input.new_custom_error(SyntaxError::Expected("a component")));
    }
    Ok(collapse(terms, Term::Sequence))
}

/// Consume `symbol` (or `symbol symbol` when `doubled`) with nothing between.
fn expect_combinator<'i>(input: &mut Parser<'i, '_>, symbol: char, doubled: bool) -> PResult<'i, ()> {
    input.expect_delim(symbol)?;
    let state = input.state();
    let repeated = matches!(input.next_including_whitespace(), Ok(Token::Delim(c)) if *c == symbol);
    if !doubled {
        input.reset(&state);
    }
    if repeated == doubled {
        Ok(())
    } else {
        Err(input.new_custom_error(SyntaxError::Expected("a combinator")))
    }
}

fn at_component(input: &mut Parser<'_, '_>) -> bool {
    let state = input.state();
    let found = matches!(
        input.next(),
        Ok(Token::Ident(_) | Token::Delim('<' | '/') | Token::Comma | Token::SquareBracketBlock)
    );
    input.reset(&state);
    found
}

fn parse_multiplied<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Term> {
    let mut term = parse_atom(input)?;
    loop {
        let state = input.state();
        let token = input.next_including_whitespace().cloned();
        term = match token {
            Ok(Token::Delim('?')) => repeat(term, 0, Some(1), false),
            Ok(Token::Delim('*')) => repeat(term, 0, None, false),
            Ok(Token::Delim('+')) => repeat(term, 1, None, false),
            Ok(Token::Delim('#')) => {
                let (min, max) = input
                    .try_parse(|i| {
                        i.expect_curly_bracket_block()?;
                        i.parse_nested_block(parse_count)
                    })
                    .unwrap_or((1, None));
                repeat(term, min, max, true)
            }
            Ok(Token::CurlyBracketBlock) => {
                let (min, max) = input.parse_nested_block(parse_count)?;
                repeat(term, min, max, false)
            }
            // `!` only marks a group as required; groups already are.
            Ok(Token::Delim('!')) => term,
            _ => {
                input.reset(&state);
                return Ok(term);
            }
        };
    }
}

fn repeat(term: Term, min: usize, max: Option<usize>, comma: bool) -> Term {
    Term::Repeat {
        term: Box::new(term),
        min,
        max,
        comma,
    }
}

/// `{m}`, `{m,}` or `{m,n}`
fn parse_count<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, (usize, Option<usize>)> {
    let min = expect_count(input)?;
    if input.try_parse(|i| i.expect_comma()).is_err() {
        return Ok((min, Some(min)));
    }
    if input.is_exhausted() {
        return Ok((min, None));
    }
    let max = expect_count(input)?;
    Ok((min, Some(max)))
}

fn expect_count<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, usize> {
    let value = input.expect_integer()?;
    usize::try_from(value).map_err(|_| input.new_custom_error(SyntaxError::Expected("a count")))
}

fn parse_atom<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Term> {
    let location = input.current_source_location();
    match input.next()?.clone() {
        Token::Ident(name) => Ok(Term::Keyword(name.as_ref().to_owned())),
        Token::Delim('/') => Ok(Term::Literal('/')),
        Token::Comma => Ok(Term::Literal(',')),
        Token::SquareBracketBlock => input.parse_nested_block(parse_one_of),
        Token::Delim('<') => parse_reference(input),
        other => Err(location.new_unexpected_token_error(other)),
    }
}

/// The part of `<type>`, `<type [min,max]>` or `<'property'>` after `<`.
fn parse_reference<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Term> {
    let location = input.current_source_location();
    match input.next()?.clone() {
        Token::QuotedString(name) => {
            input.expect_delim('>')?;
            match types::property_definition(&name) {
                Some(definition) => compile_definition(input, definition),
                None => Err(input.new_custom_error(SyntaxError::UnknownProperty(name.as_ref().to_owned()))),
            }
        }
        Token::Ident(name) => {
            let range = input
                .try_parse(|i| {
                    i.expect_square_bracket_block()?;
                    i.parse_nested_block(parse_range)
                })
                .ok();
            input.expect_delim('>')?;
            if let Some(primitive) = Primitive::from_name(&name) {
                return Ok(Term::Type(primitive, range));
            }
            match types::type_definition(&name) {
                Some(definition) => compile_definition(input, definition),
                None => Err(input.new_custom_error(SyntaxError::UnknownType(name.as_ref().to_owned()))),
            }
        }
        other => Err(location.new_unexpected_token_error(other)),
    }
}

fn compile_definition<'i>(input: &Parser<'i, '_>, definition: &str) -> PResult<'i, Term> {
    compile(definition).map_err(|err| input.new_custom_error(SyntaxError::Definition(err.to_string())))
}

fn parse_range<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, Range> {
    let min = parse_bound(input)?;
    input.expect_comma()?;
    let max = parse_bound(input)?;
    Ok(Range { min, max })
}

fn parse_bound<'i>(input: &mut Parser<'i, '_>) -> PResult<'i, f32> {
    let location = input.current_source_location();
    match input.next()?.clone() {
        Token::Number { value, .. } => Ok(value),
        Token::Dimension { value, unit, .. } => {
            Ok(types::angle_in_degrees(value, &unit).unwrap_or(value))
        }
        Token::Ident(name) if name.as_ref() == "∞" => Ok(f32::INFINITY),
        Token::Ident(name) if name.as_ref() == "-∞" => Ok(f32::NEG_INFINITY),
        other => Err(location.new_unexpected_token_error(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(name: &str) -> Term {
        Term::Keyword(name.into())
    }

    #[test]
    fn test_keyword_alternatives() {
        assert_eq!(
            compile("normal | small-caps").unwrap(),
            Term::OneOf(vec![keyword("normal"), keyword("small-caps")])
        );
    }

    #[test]
    fn test_combinator_precedence() {
        // juxtaposition binds tighter than &&, which binds tighter than ||, then |
        let term = compile("a b && c || d | e").unwrap();
        let expected = Term::OneOf(vec![
            Term::AnyOf(vec![
                Term::AllOf(vec![Term::Sequence(vec![keyword("a"), keyword("b")]), keyword("c")]),
                keyword("d"),
            ]),
            keyword("e"),
        ]);
        assert_eq!(term, expected);
    }

    #[test]
    fn test_group_with_count() {
        let term = compile("[ stretch | repeat ]{1,2}").unwrap();
        assert!(matches!(
            term,
            Term::Repeat { min: 1, max: Some(2), comma: false, .. }
        ));
    }

    #[test]
    fn test_multipliers() {
        assert!(matches!(compile("a?").unwrap(), Term::Repeat { min: 0, max: Some(1), .. }));
        assert!(matches!(compile("a*").unwrap(), Term::Repeat { min: 0, max: None, .. }));
        assert!(matches!(compile("a+").unwrap(), Term::Repeat { min: 1, max: None, .. }));
        assert!(matches!(compile("a#").unwrap(), Term::Repeat { min: 1, max: None, comma: true, .. }));
        assert!(matches!(compile("a{2,}").unwrap(), Term::Repeat { min: 2, max: None, .. }));
        assert!(matches!(compile("a{3}").unwrap(), Term::Repeat { min: 3, max: Some(3), .. }));
        assert!(matches!(
            compile("a#{1,4}").unwrap(),
            Term::Repeat { min: 1, max: Some(4), comma: true, .. }
        ));
    }

    #[test]
    fn test_type_with_range() {
        assert_eq!(
            compile("<length [0,∞]>").unwrap(),
            Term::Type(
                Primitive::Length,
                Some(Range {
                    min: 0.0,
                    max: f32::INFINITY
                })
            )
        );
    }

    #[test]
    fn test_angle_range_in_degrees() {
        match compile("<angle [-0.25turn,90deg]>").unwrap() {
            Term::Type(Primitive::Angle, Some(range)) => {
                assert_eq!(range.min, -90.0);
                assert_eq!(range.max, 90.0);
            }
            other => panic!("unexpected term {other:?}"),
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            compile("a / b").unwrap(),
            Term::Sequence(vec![keyword("a"), Term::Literal('/'), keyword("b")])
        );
    }

    #[test]
    fn test_references_are_resolved() {
        assert!(compile("<line-width>").is_ok());
        assert!(compile("<'font-size'> / <'line-height'> <'font-family'>").is_ok());
        assert!(compile(
            "<'border-image-slice'> [ / <'border-image-width'> | / <'border-image-width'>? / <'border-image-outset'> ]?"
        )
        .is_ok());
    }

    #[test]
    fn test_unknown_references() {
        let err = compile("<no-such-type>").unwrap_err();
        assert!(err.to_string().contains("unknown type <no-such-type>"));
        let err = compile("<'no-such-property'>").unwrap_err();
        assert!(err.to_string().contains("unknown property"));
    }

    #[test]
    fn test_malformed_patterns() {
        assert!(compile("").is_err());
        assert!(compile("a |").is_err());
        assert!(compile("a & b").is_err());
        assert!(compile("a{x}").is_err());
    }
}
