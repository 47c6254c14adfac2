//! # edges - Edge Padding Resolution
//!
//! Value types for describing spacing around a rectangle, and the resolver
//! that turns an ordered list of padding directives into four edge values.
//!
//! - **Resolution**: collapse overlapping [`EdgeDirective`]s into a [`ResolvedBox`]
//! - **Parsing**: read directive lists from text such as `all: 16; top: 2`
//! - **Types**: insets, layout direction, corner masks and gradient axes
//!
//! ## Quick Start
//!
//! ```rust
//! use edges::{resolve, EdgeDirective::*};
//!
//! let resolved = resolve(&[All(16.0), Vertical(8.0), Top(2.0)]);
//!
//! assert_eq!(resolved.top, 2.0);
//! assert_eq!(resolved.bottom, 8.0);
//! assert_eq!(resolved.leading, 16.0);
//! assert_eq!(resolved.trailing, 16.0);
//! ```
//!
//! ## Precedence
//!
//! Directives fall into three tiers, applied broadest first:
//!
//! 1. `All`
//! 2. `Horizontal`, `Vertical`
//! 3. `Top`, `Bottom`, `Leading`, `Trailing`
//!
//! A narrower tier always overrides a broader one regardless of list
//! position. Within a tier the last directive wins.
//!
//! ## Modules
//!
//! - [`resolve`]: the directive resolver
//! - [`parser`]: directive text parsing
//! - [`types`]: directives, boxes, insets, corners and gradients
//! - [`error`]: error types for parsing failures

pub mod error;
pub mod parser;
pub mod resolve;
pub mod types;

pub use error::EdgesError;
pub use resolve::resolve;
pub use types::{
    Corners, Edge, EdgeDirective, GradientAxis, GradientStop, Insets, LayoutDirection,
    LinearGradient, PhysicalCorners, PhysicalEdges, ResolvedBox, Tier, UnitPoint,
};
