//! Directive resolution.
//!
//! A directive list collapses into a [`ResolvedBox`] in one pass per
//! [`Tier`], each pass scanning the whole list in its original order:
//!
//! 1. `All` directives write every edge.
//! 2. `Horizontal`/`Vertical` directives write their axis pair.
//! 3. Single-edge directives write their edge.
//!
//! Later passes overwrite earlier ones, so a narrower directive wins over a
//! broader one no matter where it appears. Inside a tier the last directive
//! touching an edge wins.

use crate::types::{EdgeDirective, ResolvedBox, Tier};

/// Resolves `directives` into a box. Never fails; an empty list yields
/// [`ResolvedBox::ZERO`].
///
/// # Example
///
/// ```
/// use edges::{resolve, EdgeDirective::*, ResolvedBox};
///
/// let a = resolve(&[Top(20.0), All(16.0)]);
/// let b = resolve(&[All(16.0), Top(20.0)]);
/// assert_eq!(a, b);
/// assert_eq!(a, ResolvedBox::new(20.0, 16.0, 16.0, 16.0));
/// ```
pub fn resolve(directives: &[EdgeDirective]) -> ResolvedBox {
    let mut resolved = ResolvedBox::ZERO;

    for tier in Tier::ORDER {
        for directive in directives.iter().filter(|d| d.tier() == tier) {
            let value = directive.value();
            for &edge in directive.edges() {
                resolved.set(edge, value);
            }
        }
    }

    log::trace!(
        "resolve: {} directives -> top={} bottom={} leading={} trailing={}",
        directives.len(),
        resolved.top,
        resolved.bottom,
        resolved.leading,
        resolved.trailing
    );

    resolved
}

impl ResolvedBox {
    /// Same as [`resolve`], as a constructor.
    pub fn from_directives(directives: &[EdgeDirective]) -> Self {
        resolve(directives)
    }
}

impl FromIterator<EdgeDirective> for ResolvedBox {
    fn from_iter<I: IntoIterator<Item = EdgeDirective>>(iter: I) -> Self {
        let directives: Vec<EdgeDirective> = iter.into_iter().collect();
        resolve(&directives)
    }
}
