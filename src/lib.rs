pub mod error;
pub mod padding;
pub mod region;

pub use edges::{
    Corners, Edge, EdgeDirective, EdgesError, GradientAxis, GradientStop, Insets, LayoutDirection,
    LinearGradient, PhysicalCorners, PhysicalEdges, ResolvedBox, Tier, UnitPoint, resolve,
};
pub use error::{EdgekitError, Result};
pub use padding::{EdgePaddings, PaddingTarget};
pub use region::Region;

/// Builds an [`EdgePaddings`] from individual directives.
///
/// Directives can be written as bare variant calls, which accept any numeric
/// literal, or as arbitrary `EdgeDirective` expressions:
///
/// ```
/// use edgekit::{edge_paddings, EdgeDirective};
///
/// let a = edge_paddings![All(16), Top(20)];
/// let b = edge_paddings![EdgeDirective::Top(20.0), EdgeDirective::All(16.0)];
/// assert_eq!(a.resolve(), b.resolve());
///
/// let empty = edge_paddings![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! edge_paddings {
    () => {
        $crate::EdgePaddings::default()
    };

    // Bare variants: `All(16)`, `Top(2.5)`
    ($($kind:ident ( $value:expr )),+ $(,)?) => {
        $crate::EdgePaddings::new([$($crate::EdgeDirective::$kind($value as f64)),+])
    };

    // Fallback: any `EdgeDirective` expressions
    ($($directive:expr),+ $(,)?) => {
        $crate::EdgePaddings::new([$($directive),+])
    };
}
