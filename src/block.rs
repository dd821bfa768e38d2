//! Declaration blocks: `property: value; ...` text in and out.
//!
//! The expander works on `(property, value)` pairs. This module splits a
//! block's text into those pairs, separates the `!important` flag from the
//! value and writes the expanded longhands back out as a block.

use std::fmt;

use cssparser::{CowRcStr, ParseError, Parser, ParserInput, ParserState, RuleBodyItemParser, RuleBodyParser};

use crate::expand::Expander;
use crate::grammar::Grammar;

/// One declaration as written in a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDeclaration {
    pub property: String,
    /// Value text without the `!important` flag.
    pub value: String,
    pub important: bool,
}

impl BlockDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

impl fmt::Display for BlockDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        f.write_str(";")
    }
}

/// Split a declaration block into declarations.
///
/// Surrounding braces are not expected. Invalid declarations and nested
/// rules are skipped the way a browser would skip them. Property names are
/// lowercased, except custom properties.
pub fn parse_declarations(css: &str) -> Vec<BlockDeclaration> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut declarations = Vec::new();
    let mut decl_parser = DeclarationListParser {
        declarations: &mut declarations,
    };

    for result in RuleBodyParser::new(&mut parser, &mut decl_parser) {
        if let Err((_, source)) = result {
            log::trace!("skipping invalid declaration `{}`", source.trim());
        }
    }

    declarations
}

/// Expand every declaration, carrying each one's `!important` flag over to
/// its longhands.
pub fn expand_declarations<G: Grammar>(
    expander: &Expander<G>,
    declarations: &[BlockDeclaration],
) -> Vec<BlockDeclaration> {
    declarations
        .iter()
        .flat_map(|declaration| {
            expander
                .expand(&[(&declaration.property, &declaration.value)])
                .into_iter()
                .map(|(property, value)| BlockDeclaration {
                    property,
                    value,
                    important: declaration.important,
                })
        })
        .collect()
}

/// Expand the shorthands in a declaration block, one longhand per line.
pub fn expand_block(css: &str) -> String {
    let declarations = parse_declarations(css);
    expand_declarations(&Expander::new(), &declarations)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

struct DeclarationListParser<'a> {
    declarations: &'a mut Vec<BlockDeclaration>,
}

impl<'i> cssparser::AtRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> cssparser::QualifiedRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> cssparser::DeclarationParser<'i> for DeclarationListParser<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        input.skip_whitespace();
        let start = input.position();
        let mut end = start;
        let mut important = false;
        loop {
            if input.try_parse(cssparser::parse_important).is_ok() {
                important = true;
                break;
            }
            if input.next().is_err() {
                break;
            }
            end = input.position();
        }
        // Anything after `!important` fails the declaration.
        input.expect_exhausted()?;

        let property = if name.starts_with("--") {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        };
        self.declarations.push(BlockDeclaration {
            property,
            value: input.slice(start..end).trim().to_string(),
            important,
        });
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationListParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
