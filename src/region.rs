use edges::{LayoutDirection, ResolvedBox};

use crate::error::{EdgekitError, Result};
use crate::padding::PaddingTarget;

/// A rectangular layout region in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub direction: LayoutDirection,
}

impl Region {
    /// Creates a left-to-right region. Width and height must be finite and
    /// non-negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && width >= 0.0 && height.is_finite() && height >= 0.0) {
            return Err(EdgekitError::InvalidRegion(format!(
                "size {}x{} must be finite and non-negative",
                width, height
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            direction: LayoutDirection::LeftToRight,
        })
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the region shrunk by `edges`. Negative edges grow it; the size
    /// never drops below zero.
    pub fn inset(&self, edges: &ResolvedBox) -> Region {
        let physical = edges.to_physical(self.direction);
        Region {
            x: self.x + physical.left,
            y: self.y + physical.top,
            width: (self.width - physical.left - physical.right).max(0.0),
            height: (self.height - physical.top - physical.bottom).max(0.0),
            direction: self.direction,
        }
    }
}

impl PaddingTarget for Region {
    fn apply_padding(&mut self, top: f64, leading: f64, bottom: f64, trailing: f64) {
        let inset = self.inset(&ResolvedBox::new(top, bottom, leading, trailing));
        log::trace!(
            "Region::apply_padding: {}x{} -> {}x{}",
            self.width,
            self.height,
            inset.width,
            inset.height
        );
        *self = inset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_size() {
        assert!(matches!(
            Region::new(0.0, 0.0, -1.0, 10.0),
            Err(EdgekitError::InvalidRegion(_))
        ));
        assert!(Region::new(0.0, 0.0, f64::NAN, 10.0).is_err());
    }

    #[test]
    fn inset_clamps_to_zero() {
        let region = Region::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let inset = region.inset(&ResolvedBox::new(8.0, 8.0, 0.0, 0.0));
        assert_eq!(inset.height, 0.0);
        assert_eq!(inset.y, 8.0);
    }
}
