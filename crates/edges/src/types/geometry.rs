use super::directive::{Edge, EdgeDirective};

/// Horizontal flow of the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Four resolved edge magnitudes.
///
/// Produced by folding a directive list (see [`crate::resolve`]); every edge
/// no directive touches stays at `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedBox {
    pub top: f64,
    pub bottom: f64,
    pub leading: f64,
    pub trailing: f64,
}

impl ResolvedBox {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        leading: 0.0,
        trailing: 0.0,
    };

    pub fn new(top: f64, bottom: f64, leading: f64, trailing: f64) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Leading => self.leading,
            Edge::Trailing => self.trailing,
        }
    }

    pub(crate) fn set(&mut self, edge: Edge, value: f64) {
        match edge {
            Edge::Top => self.top = value,
            Edge::Bottom => self.bottom = value,
            Edge::Leading => self.leading = value,
            Edge::Trailing => self.trailing = value,
        }
    }

    /// Leading plus trailing.
    pub fn horizontal(&self) -> f64 {
        self.leading + self.trailing
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Four single-edge directives that resolve back to this box.
    pub fn to_directives(&self) -> [EdgeDirective; 4] {
        [
            EdgeDirective::Top(self.top),
            EdgeDirective::Bottom(self.bottom),
            EdgeDirective::Leading(self.leading),
            EdgeDirective::Trailing(self.trailing),
        ]
    }

    /// Maps leading/trailing onto left/right for the given direction.
    pub fn to_physical(&self, direction: LayoutDirection) -> PhysicalEdges {
        let (left, right) = match direction {
            LayoutDirection::LeftToRight => (self.leading, self.trailing),
            LayoutDirection::RightToLeft => (self.trailing, self.leading),
        };
        PhysicalEdges {
            top: self.top,
            right,
            bottom: self.bottom,
            left,
        }
    }
}

/// Edge magnitudes in screen terms, after the layout direction is known.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicalEdges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Plain inset values built by chaining setters.
///
/// Unlike a directive list there is no precedence here: each setter writes
/// through immediately, so `Insets::all(4.0).with_top(1.0).with_vertical(2.0)`
/// ends with `top == 2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl Insets {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn all(value: f64) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            leading: horizontal,
            trailing: horizontal,
        }
    }

    pub fn with_top(mut self, value: f64) -> Self {
        self.top = value;
        self
    }

    pub fn with_bottom(mut self, value: f64) -> Self {
        self.bottom = value;
        self
    }

    pub fn with_leading(mut self, value: f64) -> Self {
        self.leading = value;
        self
    }

    pub fn with_trailing(mut self, value: f64) -> Self {
        self.trailing = value;
        self
    }

    pub fn with_horizontal(self, value: f64) -> Self {
        self.with_leading(value).with_trailing(value)
    }

    pub fn with_vertical(self, value: f64) -> Self {
        self.with_top(value).with_bottom(value)
    }
}

impl From<ResolvedBox> for Insets {
    fn from(resolved: ResolvedBox) -> Self {
        Self {
            top: resolved.top,
            leading: resolved.leading,
            bottom: resolved.bottom,
            trailing: resolved.trailing,
        }
    }
}

impl From<Insets> for ResolvedBox {
    fn from(insets: Insets) -> Self {
        Self {
            top: insets.top,
            bottom: insets.bottom,
            leading: insets.leading,
            trailing: insets.trailing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_swaps_leading_and_trailing() {
        let resolved = ResolvedBox::new(1.0, 2.0, 3.0, 4.0);

        let ltr = resolved.to_physical(LayoutDirection::LeftToRight);
        assert_eq!((ltr.left, ltr.right), (3.0, 4.0));

        let rtl = resolved.to_physical(LayoutDirection::RightToLeft);
        assert_eq!((rtl.left, rtl.right), (4.0, 3.0));
        assert_eq!((rtl.top, rtl.bottom), (1.0, 2.0));
    }

    #[test]
    fn insets_setters_write_through_in_order() {
        let insets = Insets::all(4.0).with_top(1.0).with_vertical(2.0);
        assert_eq!(insets.top, 2.0);
        assert_eq!(insets.bottom, 2.0);
        assert_eq!(insets.leading, 4.0);
    }

    #[test]
    fn extents_sum_opposite_edges() {
        let resolved = ResolvedBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(resolved.vertical(), 3.0);
        assert_eq!(resolved.horizontal(), 7.0);
    }
}
