//! Error types for directive and corner parsing.
//!
//! Resolution itself never fails; these errors only come out of the text
//! front-ends in [`crate::parser`] and [`crate::types::corners`].

use thiserror::Error;

/// Errors that can occur while parsing directive or corner text.
///
/// # Examples
///
/// ```rust
/// use edges::parser::parse_directives;
/// use edges::EdgesError;
///
/// let result = parse_directives("top: 4; middle: 2");
/// assert!(matches!(result, Err(EdgesError::UnknownEdge(name)) if name == "middle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgesError {
    /// Malformed directive text.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("directive syntax error: {0}")]
    InvalidSyntax(String),

    /// A declaration named an edge or edge group that does not exist.
    #[error("unknown edge: {0}")]
    UnknownEdge(String),

    /// A corner mask named a corner that does not exist.
    #[error("unknown corner: {0}")]
    UnknownCorner(String),
}
