/// A point in a shape's unit square: `(0, 0)` is top-leading, `(1, 1)` is
/// bottom-trailing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const TOP_LEADING: Self = Self::new(0.0, 0.0);
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const TOP_TRAILING: Self = Self::new(1.0, 0.0);
    pub const LEADING: Self = Self::new(0.0, 0.5);
    pub const CENTER: Self = Self::new(0.5, 0.5);
    pub const TRAILING: Self = Self::new(1.0, 0.5);
    pub const BOTTOM_LEADING: Self = Self::new(0.0, 1.0);
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    pub const BOTTOM_TRAILING: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction a linear gradient runs across its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientAxis {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Leading to trailing.
    Horizontal,
    /// Top-leading to bottom-trailing.
    Diagonal,
    /// Bottom-leading to top-trailing.
    AntiDiagonal,
}

impl GradientAxis {
    /// Start and end points of the axis.
    pub fn endpoints(self) -> (UnitPoint, UnitPoint) {
        match self {
            GradientAxis::Vertical => (UnitPoint::TOP, UnitPoint::BOTTOM),
            GradientAxis::Horizontal => (UnitPoint::LEADING, UnitPoint::TRAILING),
            GradientAxis::Diagonal => (UnitPoint::TOP_LEADING, UnitPoint::BOTTOM_TRAILING),
            GradientAxis::AntiDiagonal => (UnitPoint::BOTTOM_LEADING, UnitPoint::TOP_TRAILING),
        }
    }
}

/// A color stop: location in `0.0..=1.0` along the axis, plus the color.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop<C> {
    pub location: f64,
    pub color: C,
}

/// Linear gradient description, generic over the host's color type.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient<C> {
    pub axis: GradientAxis,
    pub stops: Vec<GradientStop<C>>,
}

impl<C> LinearGradient<C> {
    pub fn new(axis: GradientAxis, stops: Vec<GradientStop<C>>) -> Self {
        Self { axis, stops }
    }

    /// Spreads `colors` evenly from `0.0` to `1.0`. A single color sits at `0.0`.
    pub fn evenly_spaced<I: IntoIterator<Item = C>>(axis: GradientAxis, colors: I) -> Self {
        let colors: Vec<C> = colors.into_iter().collect();
        let last = colors.len().saturating_sub(1);
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| GradientStop {
                location: if last == 0 { 0.0 } else { i as f64 / last as f64 },
                color,
            })
            .collect();
        Self { axis, stops }
    }

    pub fn start_point(&self) -> UnitPoint {
        self.axis.endpoints().0
    }

    pub fn end_point(&self) -> UnitPoint {
        self.axis.endpoints().1
    }
}
