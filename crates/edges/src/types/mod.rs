pub mod corners;
pub mod directive;
pub mod geometry;
pub mod gradient;

pub use corners::{Corners, PhysicalCorners};
pub use directive::{Edge, EdgeDirective, Tier};
pub use geometry::{Insets, LayoutDirection, PhysicalEdges, ResolvedBox};
pub use gradient::{GradientAxis, GradientStop, LinearGradient, UnitPoint};
