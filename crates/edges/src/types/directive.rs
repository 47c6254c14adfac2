use std::fmt;

/// One side of a rectangle, named relative to the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    /// Start edge: left in left-to-right layouts, right in right-to-left ones.
    Leading,
    /// End edge: right in left-to-right layouts, left in right-to-left ones.
    Trailing,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Leading, Edge::Trailing];
    pub const HORIZONTAL: [Edge; 2] = [Edge::Leading, Edge::Trailing];
    pub const VERTICAL: [Edge; 2] = [Edge::Top, Edge::Bottom];
}

/// Precedence level of a directive.
///
/// Broader directives rank lower: a single-edge directive always beats an
/// axis directive, which always beats an all-edges directive, wherever they
/// sit in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    All,
    Axis,
    Edge,
}

impl Tier {
    /// Tiers in the order their passes run.
    pub const ORDER: [Tier; 3] = [Tier::All, Tier::Axis, Tier::Edge];
}

/// A single padding instruction for one edge or group of edges.
///
/// Magnitudes are unvalidated: zero, negative and non-finite values are
/// carried through to the resolved box as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeDirective {
    All(f64),
    /// Leading and trailing.
    Horizontal(f64),
    /// Top and bottom.
    Vertical(f64),
    Top(f64),
    Bottom(f64),
    Leading(f64),
    Trailing(f64),
}

impl EdgeDirective {
    /// Builds the single-edge directive for `edge`.
    pub fn edge(edge: Edge, value: f64) -> Self {
        match edge {
            Edge::Top => EdgeDirective::Top(value),
            Edge::Bottom => EdgeDirective::Bottom(value),
            Edge::Leading => EdgeDirective::Leading(value),
            Edge::Trailing => EdgeDirective::Trailing(value),
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            EdgeDirective::All(v)
            | EdgeDirective::Horizontal(v)
            | EdgeDirective::Vertical(v)
            | EdgeDirective::Top(v)
            | EdgeDirective::Bottom(v)
            | EdgeDirective::Leading(v)
            | EdgeDirective::Trailing(v) => v,
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            EdgeDirective::All(_) => Tier::All,
            EdgeDirective::Horizontal(_) | EdgeDirective::Vertical(_) => Tier::Axis,
            EdgeDirective::Top(_)
            | EdgeDirective::Bottom(_)
            | EdgeDirective::Leading(_)
            | EdgeDirective::Trailing(_) => Tier::Edge,
        }
    }

    /// The edges this directive writes to.
    pub fn edges(&self) -> &'static [Edge] {
        match self {
            EdgeDirective::All(_) => &Edge::ALL,
            EdgeDirective::Horizontal(_) => &Edge::HORIZONTAL,
            EdgeDirective::Vertical(_) => &Edge::VERTICAL,
            EdgeDirective::Top(_) => &[Edge::Top],
            EdgeDirective::Bottom(_) => &[Edge::Bottom],
            EdgeDirective::Leading(_) => &[Edge::Leading],
            EdgeDirective::Trailing(_) => &[Edge::Trailing],
        }
    }

    /// Canonical declaration name, as accepted by the directive parser.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeDirective::All(_) => "all",
            EdgeDirective::Horizontal(_) => "horizontal",
            EdgeDirective::Vertical(_) => "vertical",
            EdgeDirective::Top(_) => "top",
            EdgeDirective::Bottom(_) => "bottom",
            EdgeDirective::Leading(_) => "leading",
            EdgeDirective::Trailing(_) => "trailing",
        }
    }
}

/// Writes `name: value`, which [`str::parse`] reads back. Non-finite values
/// print as `inf`, `-inf` or `NaN` and parse back the same way.
impl fmt::Display for EdgeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.value())
    }
}
