use bitflags::bitflags;

use super::geometry::LayoutDirection;
use crate::EdgesError;

bitflags! {
    /// Set of rectangle corners, named relative to the layout direction.
    ///
    /// Used to pick which corners of a shape get rounded.
    ///
    /// # Example
    ///
    /// ```
    /// use edges::Corners;
    ///
    /// let mask = Corners::union_of([Corners::TOP_LEADING, Corners::BOTTOM]);
    /// assert!(mask.contains(Corners::BOTTOM_TRAILING));
    /// assert!(!mask.contains(Corners::TOP_TRAILING));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        const TOP_LEADING     = 0b0001;
        const TOP_TRAILING    = 0b0010;
        const BOTTOM_LEADING  = 0b0100;
        const BOTTOM_TRAILING = 0b1000;

        const TOP      = Self::TOP_LEADING.bits() | Self::TOP_TRAILING.bits();
        const BOTTOM   = Self::BOTTOM_LEADING.bits() | Self::BOTTOM_TRAILING.bits();
        const LEADING  = Self::TOP_LEADING.bits() | Self::BOTTOM_LEADING.bits();
        const TRAILING = Self::TOP_TRAILING.bits() | Self::BOTTOM_TRAILING.bits();
        const ALL      = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

bitflags! {
    /// Set of rectangle corners in screen terms.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PhysicalCorners: u8 {
        const TOP_LEFT     = 0b0001;
        const TOP_RIGHT    = 0b0010;
        const BOTTOM_LEFT  = 0b0100;
        const BOTTOM_RIGHT = 0b1000;
    }
}

impl Corners {
    /// Unions any number of masks. An empty iterator gives the empty mask.
    pub fn union_of<I: IntoIterator<Item = Corners>>(masks: I) -> Self {
        masks.into_iter().fold(Corners::empty(), |acc, mask| acc | mask)
    }

    /// Parses a `|`-separated list of corner names, e.g. `"top-leading | bottom"`.
    ///
    /// Accepted names: `top-leading`, `top-trailing`, `bottom-leading`,
    /// `bottom-trailing`, `top`, `bottom`, `leading`, `trailing`, `all` and
    /// `none`. Matching is case-insensitive.
    pub fn parse(input: &str) -> Result<Self, EdgesError> {
        let mut mask = Corners::empty();
        for name in input.split('|').map(str::trim) {
            if name.is_empty() {
                return Err(EdgesError::InvalidSyntax(format!(
                    "empty corner name in '{}'",
                    input
                )));
            }
            mask |= Self::from_label(name).ok_or_else(|| {
                log::debug!("rejecting unknown corner '{}'", name);
                EdgesError::UnknownCorner(name.to_string())
            })?;
        }
        Ok(mask)
    }

    fn from_label(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "top-leading" => Some(Corners::TOP_LEADING),
            "top-trailing" => Some(Corners::TOP_TRAILING),
            "bottom-leading" => Some(Corners::BOTTOM_LEADING),
            "bottom-trailing" => Some(Corners::BOTTOM_TRAILING),
            "top" => Some(Corners::TOP),
            "bottom" => Some(Corners::BOTTOM),
            "leading" => Some(Corners::LEADING),
            "trailing" => Some(Corners::TRAILING),
            "all" => Some(Corners::ALL),
            "none" => Some(Corners::empty()),
            _ => None,
        }
    }

    /// Maps leading/trailing corners onto left/right for the given direction.
    pub fn to_physical(self, direction: LayoutDirection) -> PhysicalCorners {
        let rtl = direction == LayoutDirection::RightToLeft;
        let pairs = [
            (Corners::TOP_LEADING, PhysicalCorners::TOP_LEFT, PhysicalCorners::TOP_RIGHT),
            (Corners::TOP_TRAILING, PhysicalCorners::TOP_RIGHT, PhysicalCorners::TOP_LEFT),
            (Corners::BOTTOM_LEADING, PhysicalCorners::BOTTOM_LEFT, PhysicalCorners::BOTTOM_RIGHT),
            (Corners::BOTTOM_TRAILING, PhysicalCorners::BOTTOM_RIGHT, PhysicalCorners::BOTTOM_LEFT),
        ];

        let mut physical = PhysicalCorners::empty();
        for (corner, ltr, rtl_corner) in pairs {
            if self.contains(corner) {
                physical |= if rtl { rtl_corner } else { ltr };
            }
        }
        physical
    }
}
