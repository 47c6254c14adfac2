//! Text front-end for directive lists.
//!
//! Spacing can be written the way a style sheet writes padding:
//!
//! ```text
//! all: 16; vertical: 8; top: 2
//! ```
//!
//! Declarations are `<name>: <number>`, separated by `;` (the last `;` is
//! optional). Order is kept, so the parsed list resolves exactly like the
//! equivalent hand-built one.
//!
//! | Name | Alias | Directive |
//! |------|-------|-----------|
//! | `all` | `padding` | [`EdgeDirective::All`] |
//! | `horizontal` | `padding-x` | [`EdgeDirective::Horizontal`] |
//! | `vertical` | `padding-y` | [`EdgeDirective::Vertical`] |
//! | `top` | `padding-top` | [`EdgeDirective::Top`] |
//! | `bottom` | `padding-bottom` | [`EdgeDirective::Bottom`] |
//! | `leading` | `padding-leading` | [`EdgeDirective::Leading`] |
//! | `trailing` | `padding-trailing` | [`EdgeDirective::Trailing`] |
//!
//! ## Example
//!
//! ```rust
//! use edges::parser::parse_box;
//!
//! let resolved = parse_box("top: 20; all: 16").unwrap();
//! assert_eq!(resolved.top, 20.0);
//! assert_eq!(resolved.leading, 16.0);
//! ```

pub mod units;

use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{eof, map},
    multi::many0,
    sequence::{delimited, terminated, tuple},
};

use crate::EdgesError;
use crate::resolve::resolve;
use crate::types::{EdgeDirective, ResolvedBox};

/// Parses a directive list, keeping source order.
pub fn parse_directives(source: &str) -> Result<Vec<EdgeDirective>, EdgesError> {
    let (remaining, raw) =
        many0(parse_declaration)(source).map_err(|e| EdgesError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(EdgesError::InvalidSyntax(format!(
            "Unexpected tokens at end of directive list: {}",
            remaining.trim()
        )));
    }

    raw.into_iter()
        .map(|(name, value)| match directive_for(name, value) {
            Some(directive) => {
                log::trace!("parsed directive {}", directive);
                Ok(directive)
            }
            None => {
                log::debug!("rejecting unknown edge '{}'", name);
                Err(EdgesError::UnknownEdge(name.to_string()))
            }
        })
        .collect()
}

/// Parses and resolves in one step.
pub fn parse_box(source: &str) -> Result<ResolvedBox, EdgesError> {
    parse_directives(source).map(|directives| resolve(&directives))
}

/// Parses a declaration name: alphanumerics, dashes and underscores.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// One `name: value` pair, followed by `;` or end of input.
fn parse_declaration(input: &str) -> IResult<&str, (&str, f64)> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = terminated(
        units::parse_number,
        delimited(
            multispace0,
            alt((map(char(';'), |_| ()), map(eof, |_| ()))),
            multispace0,
        ),
    )(input)?;
    Ok((input, (name, value)))
}

fn directive_for(name: &str, value: f64) -> Option<EdgeDirective> {
    let directive = match name.to_lowercase().as_str() {
        "all" | "padding" => EdgeDirective::All(value),
        "horizontal" | "padding-x" => EdgeDirective::Horizontal(value),
        "vertical" | "padding-y" => EdgeDirective::Vertical(value),
        "top" | "padding-top" => EdgeDirective::Top(value),
        "bottom" | "padding-bottom" => EdgeDirective::Bottom(value),
        "leading" | "padding-leading" => EdgeDirective::Leading(value),
        "trailing" | "padding-trailing" => EdgeDirective::Trailing(value),
        _ => return None,
    };
    Some(directive)
}

impl FromStr for EdgeDirective {
    type Err = EdgesError;

    /// Parses exactly one declaration, e.g. `"top: 4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut directives = parse_directives(s)?;
        match directives.len() {
            1 => Ok(directives.remove(0)),
            n => Err(EdgesError::InvalidSyntax(format!(
                "expected one directive, found {}",
                n
            ))),
        }
    }
}
