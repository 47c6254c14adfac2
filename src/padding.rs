//! The padding modifier: an ordered directive list plus the boundary it is
//! applied to.

use edges::{EdgeDirective, ResolvedBox, parser::parse_directives, resolve};
use smallvec::SmallVec;

use crate::error::Result;

/// Anything that can take four edge magnitudes and pad itself by them.
///
/// This is the seam to the host layout engine. Implementations apply the
/// values as given; negative magnitudes expand instead of shrink if the host
/// supports it.
pub trait PaddingTarget {
    fn apply_padding(&mut self, top: f64, leading: f64, bottom: f64, trailing: f64);
}

/// An ordered list of padding directives, resolved on demand.
///
/// Build one with [`edge_paddings!`](crate::edge_paddings), from an iterator,
/// from text, or by chaining builder calls:
///
/// ```
/// use edgekit::EdgePaddings;
///
/// let resolved = EdgePaddings::default().top(20.0).all(16.0).resolve();
/// assert_eq!(resolved.top, 20.0);
/// assert_eq!(resolved.bottom, 16.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgePaddings {
    directives: SmallVec<[EdgeDirective; 4]>,
}

impl EdgePaddings {
    pub fn new<I: IntoIterator<Item = EdgeDirective>>(directives: I) -> Self {
        Self {
            directives: directives.into_iter().collect(),
        }
    }

    /// Reads a directive list such as `"all: 16; top: 2"`.
    pub fn parse(source: &str) -> Result<Self> {
        Ok(Self::new(parse_directives(source)?))
    }

    pub fn directives(&self) -> &[EdgeDirective] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn push(&mut self, directive: EdgeDirective) {
        self.directives.push(directive);
    }

    pub fn resolve(&self) -> ResolvedBox {
        resolve(&self.directives)
    }

    /// Resolves and hands the result to `target` as
    /// `(top, leading, bottom, trailing)`.
    pub fn apply_to<T: PaddingTarget + ?Sized>(&self, target: &mut T) -> ResolvedBox {
        let resolved = self.resolve();
        target.apply_padding(
            resolved.top,
            resolved.leading,
            resolved.bottom,
            resolved.trailing,
        );
        resolved
    }

    fn with(mut self, directive: EdgeDirective) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn all(self, value: f64) -> Self {
        self.with(EdgeDirective::All(value))
    }

    pub fn horizontal(self, value: f64) -> Self {
        self.with(EdgeDirective::Horizontal(value))
    }

    pub fn vertical(self, value: f64) -> Self {
        self.with(EdgeDirective::Vertical(value))
    }

    pub fn top(self, value: f64) -> Self {
        self.with(EdgeDirective::Top(value))
    }

    pub fn bottom(self, value: f64) -> Self {
        self.with(EdgeDirective::Bottom(value))
    }

    pub fn leading(self, value: f64) -> Self {
        self.with(EdgeDirective::Leading(value))
    }

    pub fn trailing(self, value: f64) -> Self {
        self.with(EdgeDirective::Trailing(value))
    }
}

impl FromIterator<EdgeDirective> for EdgePaddings {
    fn from_iter<I: IntoIterator<Item = EdgeDirective>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Extend<EdgeDirective> for EdgePaddings {
    fn extend<I: IntoIterator<Item = EdgeDirective>>(&mut self, iter: I) {
        self.directives.extend(iter);
    }
}

impl From<&EdgePaddings> for ResolvedBox {
    fn from(paddings: &EdgePaddings) -> Self {
        paddings.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(f64, f64, f64, f64)>,
    }

    impl PaddingTarget for Recorder {
        fn apply_padding(&mut self, top: f64, leading: f64, bottom: f64, trailing: f64) {
            self.calls.push((top, leading, bottom, trailing));
        }
    }

    #[test]
    fn apply_to_passes_top_leading_bottom_trailing() {
        let paddings = EdgePaddings::default().all(1.0).bottom(3.0).trailing(4.0);
        let mut recorder = Recorder::default();

        paddings.apply_to(&mut recorder);

        assert_eq!(recorder.calls, vec![(1.0, 1.0, 3.0, 4.0)]);
    }

    #[test]
    fn builder_keeps_call_order() {
        let paddings = EdgePaddings::default().top(1.0).top(2.0);
        assert_eq!(
            paddings.directives(),
            &[EdgeDirective::Top(1.0), EdgeDirective::Top(2.0)]
        );
        assert_eq!(paddings.resolve().top, 2.0);
    }

    #[test]
    fn parse_errors_surface_through_crate_error() {
        let err = EdgePaddings::parse("top: 1; sideways: 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Padding directive error: unknown edge: sideways"
        );
    }
}
