// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::geometry::AxisPoint;
use crate::orientation::ScaleOrientation;

/// Screen edge the scale is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScalePosition {
    /// Ticks start at the leading edge and point inwards.
    #[default]
    Left,
    /// Ticks start at the trailing edge and point inwards (mirrored).
    Right,
}

impl ScalePosition {
    /// Across-axis coordinate of the edge the ticks start from.
    #[must_use]
    pub fn start_across(self, orientation: ScaleOrientation, size: Size) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Right => orientation.across_length(size),
        }
    }

    /// Mirrors a tick endpoint so that it points inwards from the scale edge.
    ///
    /// `point.across` is the distance from the edge; for [`Right`](Self::Right)
    /// it is subtracted from the edge coordinate.
    #[must_use]
    pub fn mirror_endpoint(
        self,
        orientation: ScaleOrientation,
        size: Size,
        point: AxisPoint,
    ) -> AxisPoint {
        match self {
            Self::Left => point,
            Self::Right => AxisPoint::new(
                point.along,
                self.start_across(orientation, size) - point.across,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_is_identity() {
        let size = Size::new(300.0, 600.0);
        let p = AxisPoint::new(40.0, 25.0);
        assert_eq!(ScalePosition::Left.start_across(ScaleOrientation::Portrait, size), 0.0);
        assert_eq!(
            ScalePosition::Left.mirror_endpoint(ScaleOrientation::Portrait, size, p),
            p
        );
    }

    #[test]
    fn right_mirrors_from_far_edge() {
        let size = Size::new(300.0, 600.0);
        let p = AxisPoint::new(40.0, 25.0);

        let portrait = ScalePosition::Right.mirror_endpoint(ScaleOrientation::Portrait, size, p);
        assert_eq!(portrait, AxisPoint::new(40.0, 275.0));

        // In landscape the across axis is the screen height.
        let landscape = ScalePosition::Right.mirror_endpoint(ScaleOrientation::Landscape, size, p);
        assert_eq!(landscape, AxisPoint::new(40.0, 575.0));
    }
}
